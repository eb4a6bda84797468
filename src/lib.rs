//! Two-way binding between terminal form widgets and configuration models.
//!
//! Screens create widgets, wrap them in [`widgets::Handle`]s and register
//! each one with a [`binding::Registry`] under the path of the model field it
//! edits. The registry then copies values in both directions and validates
//! the model on commit, pointing back at the widget that holds a bad value.

pub mod binding;
pub mod messages;
pub mod theme;
pub mod validate;
pub mod widgets;

pub use binding::{Binding, BindingError, CommitError, Property, Registry, RegistrationError};
pub use messages::{MessageSource, Messages};
pub use validate::{InvariantViolation, Validatable};
