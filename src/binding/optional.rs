use std::rc::Rc;

use crate::binding::error::{BindingError, CommitError};
use crate::binding::{mark, Property};
use crate::validate::Validatable;
use crate::widgets::{Handle, Toggle};

type Presence<M> = Box<dyn Fn(&M) -> Result<bool, BindingError>>;
type Install<M> = Box<dyn Fn(&mut M, bool) -> Result<(), BindingError>>;
type Check<M> = Box<dyn Fn(&M) -> Result<(), CommitError<M>>>;

/// Gate toggle deciding whether an optional sub-object exists on the model.
///
/// The sub-object's own fields are bound separately, under paths that start
/// with this binding's path; the registry skips them while the sub-object is
/// absent and enables or disables them along with the gate.
pub struct OptComponentBinding<M> {
    path: String,
    gate: Handle<Toggle>,
    enabled_by_default: bool,
    present: Presence<M>,
    install: Install<M>,
    check: Check<M>,
}

impl<M: 'static> OptComponentBinding<M> {
    pub fn new<S>(
        property: Property<M, Option<S>>,
        gate: Handle<Toggle>,
        enabled_by_default: bool,
    ) -> Self
    where
        S: Validatable + Default + Clone + 'static,
    {
        let path = property.path().to_string();
        let property = Rc::new(property);
        let reader = Rc::clone(&property);
        let checker = Rc::clone(&property);
        Self {
            path,
            gate,
            enabled_by_default,
            present: Box::new(move |m: &M| reader.read(m).map(|c| c.is_some())),
            install: Box::new(move |m: &mut M, on: bool| {
                property.write(m, on.then(S::default))
            }),
            check: Box::new(move |m: &M| -> Result<(), CommitError<M>> {
                match checker.read(m)? {
                    Some(component) => {
                        component
                            .check_invariants()
                            .map_err(|violation| CommitError::Invariant {
                                violation,
                                binding: None,
                            })
                    }
                    None => Ok(()),
                }
            }),
        }
    }
}

impl<M> OptComponentBinding<M> {
    pub fn property(&self) -> &str {
        &self.path
    }

    pub fn gate(&self) -> &Handle<Toggle> {
        &self.gate
    }

    pub fn enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    pub fn is_gate_on(&self) -> bool {
        self.gate.with(|t| t.is_on())
    }

    pub fn is_present(&self, model: &M) -> Result<bool, BindingError> {
        (self.present)(model)
    }

    pub fn clear(&self) {
        self.gate.edit(|t| t.set_on(self.enabled_by_default));
    }

    pub fn put(&self, model: &M) -> Result<(), BindingError> {
        let present = self.is_present(model)?;
        self.gate.edit(|t| t.set_on(present));
        Ok(())
    }

    /// Replaces the sub-object with a fresh default instance when the gate is
    /// on, or removes it when off. Nested widgets are never read here.
    pub fn get(&self, model: &mut M) -> Result<(), BindingError> {
        (self.install)(model, self.is_gate_on())
    }

    /// Validates the sub-object if it is present.
    pub fn check(&self, model: &M) -> Result<(), CommitError<M>> {
        (self.check)(model)
    }

    pub fn mark(&self, valid: bool) {
        mark(&self.gate, valid);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.gate.set_enabled(enabled);
    }
}
