use crate::binding::error::BindingError;

type Getter<M, V> = Box<dyn Fn(&M) -> Option<V>>;
type Setter<M, V> = Box<dyn Fn(&mut M, V) -> Option<()>>;

/// Typed accessor pair for one model field. The dotted `path` only labels
/// the field for lookups and error attribution.
pub struct Property<M, V> {
    path: String,
    get: Getter<M, V>,
    set: Setter<M, V>,
}

impl<M: 'static, V: 'static> Property<M, V> {
    /// Accessor for a field that always exists on `M`.
    pub fn new(
        path: impl Into<String>,
        get: impl Fn(&M) -> V + 'static,
        set: impl Fn(&mut M, V) + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            get: Box::new(move |m: &M| Some(get(m))),
            set: Box::new(move |m: &mut M, v: V| {
                set(m, v);
                Some(())
            }),
        }
    }

    /// Accessor for a field reached through an optional parent; `None` from
    /// either closure means the path does not resolve on this model.
    pub fn nested(
        path: impl Into<String>,
        get: impl Fn(&M) -> Option<V> + 'static,
        set: impl Fn(&mut M, V) -> Option<()> + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            get: Box::new(get),
            set: Box::new(set),
        }
    }
}

impl<M, V> Property<M, V> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn read(&self, model: &M) -> Result<V, BindingError> {
        (self.get)(model).ok_or_else(|| BindingError::Unresolved(self.path.clone()))
    }

    pub fn write(&self, model: &mut M, value: V) -> Result<(), BindingError> {
        (self.set)(model, value).ok_or_else(|| BindingError::Unresolved(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Jre {
        path: String,
    }

    #[derive(Default)]
    struct Config {
        name: String,
        jre: Option<Jre>,
    }

    #[test]
    fn plain_property_reads_and_writes() {
        let p = Property::new(
            "name",
            |c: &Config| c.name.clone(),
            |c: &mut Config, v: String| c.name = v,
        );
        let mut cfg = Config::default();
        p.write(&mut cfg, "app".into()).unwrap();
        assert_eq!(p.read(&cfg).unwrap(), "app");
        assert_eq!(p.path(), "name");
    }

    #[test]
    fn nested_property_fails_under_absent_parent() {
        let p = Property::nested(
            "jre.path",
            |c: &Config| c.jre.as_ref().map(|j| j.path.clone()),
            |c: &mut Config, v: String| c.jre.as_mut().map(|j| j.path = v),
        );
        let mut cfg = Config::default();
        assert_eq!(
            p.read(&cfg),
            Err(BindingError::Unresolved("jre.path".into()))
        );
        assert!(p.write(&mut cfg, "x".into()).is_err());

        cfg.jre = Some(Jre::default());
        p.write(&mut cfg, "/opt/jre".into()).unwrap();
        assert_eq!(p.read(&cfg).unwrap(), "/opt/jre");
    }
}
