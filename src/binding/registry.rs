use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::rc::Rc;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::binding::{
    Binding, BindingError, ComboBinding, CommitError, ListBinding, OptComponentBinding,
    OptTextListBinding, Property, RadioBinding, RegistrationError, TextBinding, TextListBinding,
    ToggleBinding,
};
use crate::validate::{InvariantViolation, Validatable};
use crate::widgets::{ComboBox, Handle, ListView, RadioGroup, TextArea, TextInput, Toggle, Widget};

type BindingMap<M> = IndexMap<String, Rc<Binding<M>>>;

/// All bindings of one screen.
///
/// Optional sub-object bindings live in their own map and are processed
/// before the regular ones. A regular binding whose path starts with the path
/// of an optional sub-object that is currently absent is cleared on
/// `refresh` and skipped on `commit`.
///
/// Path prefixes are plain string prefixes: `"proxy"` also covers
/// `"proxyHost"`. Register nested paths with a trailing `.` in mind.
pub struct Registry<M> {
    bindings: Rc<RefCell<BindingMap<M>>>,
    components: BindingMap<M>,
    modified: Rc<Cell<bool>>,
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self {
            bindings: Rc::new(RefCell::new(IndexMap::new())),
            components: IndexMap::new(),
            modified: Rc::new(Cell::new(false)),
        }
    }
}

fn cascade<M>(bindings: &BindingMap<M>, prefix: &str, enabled: bool) {
    for b in bindings.values() {
        if b.property().starts_with(prefix) {
            trace!(property = b.property(), enabled, "cascading enabled state");
            b.set_enabled(enabled);
        }
    }
}

impl<M: Validatable + 'static> Registry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any bound widget changed since the last clear, refresh or
    /// successful commit.
    pub fn is_modified(&self) -> bool {
        self.modified.get()
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Regular binding registered under exactly `property`.
    pub fn lookup(&self, property: &str) -> Option<Rc<Binding<M>>> {
        self.bindings.borrow().get(property).cloned()
    }

    /// Optional sub-object binding registered under exactly `property`.
    pub fn lookup_component(&self, property: &str) -> Option<Rc<Binding<M>>> {
        self.components.get(property).cloned()
    }

    fn track<W: Widget>(&self, widget: &Handle<W>) {
        let modified = Rc::clone(&self.modified);
        widget.subscribe(move || modified.set(true));
    }

    fn vacant(map: &BindingMap<M>, property: &str) -> Result<(), RegistrationError> {
        if property.is_empty() {
            return Err(RegistrationError::EmptyPath);
        }
        if map.contains_key(property) {
            return Err(RegistrationError::Duplicate(property.to_string()));
        }
        Ok(())
    }

    fn ensure_vacant(&self, property: &str) -> Result<(), RegistrationError> {
        Self::vacant(&self.bindings.borrow(), property)
    }

    fn insert(&mut self, binding: Binding<M>) -> &mut Self {
        let key = binding.property().to_string();
        self.bindings.borrow_mut().insert(key, Rc::new(binding));
        self
    }

    /// Text field bound to any value that round-trips through a string.
    pub fn add_text<V>(
        &mut self,
        property: Property<M, V>,
        widget: Handle<TextInput>,
        default: &str,
    ) -> Result<&mut Self, RegistrationError>
    where
        V: FromStr + Display + 'static,
        V::Err: Display,
    {
        self.ensure_vacant(property.path())?;
        self.track(&widget);
        Ok(self.insert(Binding::Text(TextBinding::new(property, widget, default))))
    }

    /// Multi-line editor bound to a single value, line breaks included.
    pub fn add_text_area<V>(
        &mut self,
        property: Property<M, V>,
        widget: Handle<TextArea>,
        default: &str,
    ) -> Result<&mut Self, RegistrationError>
    where
        V: FromStr + Display + 'static,
        V::Err: Display,
    {
        self.ensure_vacant(property.path())?;
        self.track(&widget);
        Ok(self.insert(Binding::MultiText(TextBinding::new(
            property, widget, default,
        ))))
    }

    pub fn add_toggle(
        &mut self,
        property: Property<M, bool>,
        widget: Handle<Toggle>,
        default: bool,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        self.track(&widget);
        Ok(self.insert(Binding::Toggle(ToggleBinding::new(
            property, widget, default,
        ))))
    }

    pub fn add_radio(
        &mut self,
        property: Property<M, usize>,
        widget: Handle<RadioGroup>,
        default: usize,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        let binding = RadioBinding::new(property, widget, default)?;
        self.track(binding.widget());
        Ok(self.insert(Binding::Radio(binding)))
    }

    pub fn add_combo(
        &mut self,
        property: Property<M, usize>,
        widget: Handle<ComboBox>,
        default: usize,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        let binding = ComboBinding::new(property, widget, default)?;
        self.track(binding.widget());
        Ok(self.insert(Binding::Combo(binding)))
    }

    pub fn add_list(
        &mut self,
        property: Property<M, Vec<String>>,
        widget: Handle<ListView>,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        self.track(&widget);
        Ok(self.insert(Binding::List(ListBinding::new(property, widget))))
    }

    /// Multi-line editor, one list element per non-blank line.
    pub fn add_text_list(
        &mut self,
        property: Property<M, Vec<String>>,
        widget: Handle<TextArea>,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        self.track(&widget);
        Ok(self.insert(Binding::TextList(TextListBinding::new(property, widget))))
    }

    /// Multi-line list that is absent from the model while `gate` is off.
    pub fn add_opt_text_list(
        &mut self,
        property: Property<M, Option<Vec<String>>>,
        gate: Handle<Toggle>,
        widget: Handle<TextArea>,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        self.track(&gate);
        self.track(&widget);
        Ok(self.insert(Binding::OptTextList(OptTextListBinding::new(
            property, gate, widget,
        ))))
    }

    /// Like [`add_opt_text_list`](Self::add_opt_text_list), with the gate
    /// state also kept in its own boolean model field.
    pub fn add_opt_text_list_with_state(
        &mut self,
        property: Property<M, Option<Vec<String>>>,
        state: Property<M, bool>,
        gate: Handle<Toggle>,
        widget: Handle<TextArea>,
    ) -> Result<&mut Self, RegistrationError> {
        self.ensure_vacant(property.path())?;
        self.track(&gate);
        self.track(&widget);
        Ok(self.insert(Binding::OptTextList(
            OptTextListBinding::new(property, gate, widget).with_state(state),
        )))
    }

    /// Optional sub-object of type `S`, present while `gate` is on. Toggling
    /// the gate enables or disables every regular binding under its path.
    pub fn add_optional<S>(
        &mut self,
        property: Property<M, Option<S>>,
        gate: Handle<Toggle>,
        enabled_by_default: bool,
    ) -> Result<&mut Self, RegistrationError>
    where
        S: Validatable + Default + Clone + 'static,
    {
        Self::vacant(&self.components, property.path())?;
        let path = property.path().to_string();

        let modified = Rc::clone(&self.modified);
        let bindings = Rc::downgrade(&self.bindings);
        let weak_gate = gate.downgrade();
        let prefix = path.clone();
        gate.subscribe(move || {
            modified.set(true);
            let (Some(bindings), Some(gate)) = (bindings.upgrade(), weak_gate.upgrade()) else {
                return;
            };
            let on = gate.with(|t| t.is_on());
            // Busy only while a binding is being inserted; no widget edits happen then.
            let Ok(map) = bindings.try_borrow() else {
                return;
            };
            cascade(&map, &prefix, on);
        });

        let binding = OptComponentBinding::new(property, gate, enabled_by_default);
        self.components
            .insert(path, Rc::new(Binding::Component(binding)));
        Ok(self)
    }

    /// Enables or disables every regular binding whose path starts with
    /// `prefix` (string prefix, not path segments).
    pub fn set_enabled(&self, prefix: &str, enabled: bool) {
        cascade(&self.bindings.borrow(), prefix, enabled);
    }

    /// Drops the invalid marker from every widget.
    pub fn mark_all_valid(&self) {
        for b in self.components.values() {
            each_widget_valid(b);
        }
        for b in self.bindings.borrow().values() {
            each_widget_valid(b);
        }
    }

    fn is_beneath_absent(&self, model: &M, property: &str) -> Result<bool, BindingError> {
        for (path, c) in &self.components {
            if property.starts_with(path.as_str()) {
                return match c.as_component() {
                    Some(c) => c.is_present(model).map(|present| !present),
                    None => Ok(false),
                };
            }
        }
        Ok(false)
    }

    /// Resets optional sub-object gates first, then every regular binding.
    pub fn clear(&self) {
        debug!(
            components = self.components.len(),
            bindings = self.len(),
            "clearing bound widgets"
        );
        for c in self.components.values() {
            c.clear();
            if let Some(c) = c.as_component() {
                self.set_enabled(c.property(), c.enabled_by_default());
            }
        }
        for b in self.bindings.borrow().values() {
            b.clear();
        }
        self.modified.set(false);
    }

    /// Copies model values into the widgets. Widgets beneath an absent
    /// optional sub-object are cleared instead.
    pub fn refresh(&self, model: &M) -> Result<(), BindingError> {
        debug!(
            components = self.components.len(),
            bindings = self.len(),
            "refreshing widgets from model"
        );
        for c in self.components.values() {
            c.put(model)?;
            if let Some(c) = c.as_component() {
                self.set_enabled(c.property(), c.is_present(model)?);
            }
        }
        for b in self.bindings.borrow().values() {
            if self.is_beneath_absent(model, b.property())? {
                b.clear();
            } else {
                b.put(model)?;
            }
        }
        self.modified.set(false);
        Ok(())
    }

    /// Copies widget values into the model, then validates the model and
    /// each present optional sub-object.
    ///
    /// Not atomic: on failure the model may already hold some new values.
    /// The modified flag is only cleared on success.
    pub fn commit(&self, model: &mut M) -> Result<(), CommitError<M>> {
        debug!(
            components = self.components.len(),
            bindings = self.len(),
            "committing widgets to model"
        );
        for c in self.components.values() {
            c.get(model)?;
        }
        for b in self.bindings.borrow().values() {
            if !self.is_beneath_absent(model, b.property())? {
                b.get(model)?;
            }
        }

        model
            .check_invariants()
            .map_err(|violation| self.attribute(violation))?;

        for c in self.components.values() {
            if let Some(c) = c.as_component() {
                c.check(model).map_err(|e| match e {
                    CommitError::Invariant { violation, .. } => self.attribute(violation),
                    other => other,
                })?;
            }
        }

        self.modified.set(false);
        Ok(())
    }

    fn attribute(&self, violation: InvariantViolation) -> CommitError<M> {
        let binding = self.lookup(violation.property());
        if binding.is_none() {
            warn!(
                property = violation.property(),
                "invariant violation has no bound widget"
            );
        }
        CommitError::Invariant { violation, binding }
    }
}

fn each_widget_valid<M>(b: &Binding<M>) {
    match b {
        Binding::Text(t) => t.widget().set_invalid(false),
        Binding::MultiText(t) => t.widget().set_invalid(false),
        Binding::Toggle(t) => t.widget().set_invalid(false),
        Binding::Radio(r) => r.widget().set_invalid(false),
        Binding::Combo(c) => c.widget().set_invalid(false),
        Binding::List(l) => l.widget().set_invalid(false),
        Binding::TextList(t) => t.widget().set_invalid(false),
        Binding::OptTextList(t) => t.widget().set_invalid(false),
        Binding::Component(c) => c.gate().set_invalid(false),
    }
}

#[cfg(test)]
mod tests;
