use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::binding::Binding;
use crate::messages::MessageSource;
use crate::validate::InvariantViolation;

/// Screen assembly mistakes. Raised while registering, never at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("duplicate binding for property '{0}'")]
    Duplicate(String),

    #[error("property path must not be empty")]
    EmptyPath,

    #[error("default index {index} is out of range for '{property}' ({len} options)")]
    DefaultOutOfRange {
        property: String,
        index: usize,
        len: usize,
    },
}

impl RegistrationError {
    /// Text for the user, looked up in `messages`.
    pub fn describe(&self, messages: &dyn MessageSource) -> String {
        match self {
            RegistrationError::Duplicate(property) => {
                messages.format("Bindings.duplicate.binding", &[property.as_str()])
            }
            RegistrationError::EmptyPath => messages.get("Bindings.empty.path"),
            RegistrationError::DefaultOutOfRange {
                property,
                index,
                len,
            } => {
                let (index, len) = (index.to_string(), len.to_string());
                messages.format(
                    "Bindings.default.out.of.range",
                    &[property.as_str(), index.as_str(), len.as_str()],
                )
            }
        }
    }
}

/// A value could not be moved between a widget and the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("property '{0}' does not resolve on this model")]
    Unresolved(String),

    #[error("cannot convert '{value}' for property '{property}': {reason}")]
    Conversion {
        property: String,
        value: String,
        reason: String,
    },

    #[error("property '{0}' has no selection")]
    NoSelection(String),

    #[error("index {index} is out of range for '{property}' ({len} options)")]
    IndexOutOfRange {
        property: String,
        index: usize,
        len: usize,
    },
}

/// Failure of [`Registry::commit`](crate::binding::Registry::commit).
#[derive(Error)]
pub enum CommitError<M> {
    /// Internal fault; the UI reports it as an unexpected error.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// User-correctable input error. `binding` is the registered binding whose
    /// property path equals the violation's, when there is one.
    #[error("{violation}")]
    Invariant {
        violation: InvariantViolation,
        binding: Option<Rc<Binding<M>>>,
    },
}

impl<M> CommitError<M> {
    pub fn violation(&self) -> Option<&InvariantViolation> {
        match self {
            CommitError::Invariant { violation, .. } => Some(violation),
            CommitError::Binding(_) => None,
        }
    }

    pub fn binding(&self) -> Option<&Rc<Binding<M>>> {
        match self {
            CommitError::Invariant { binding, .. } => binding.as_ref(),
            CommitError::Binding(_) => None,
        }
    }

    /// Text for the user. Invariant violations carry model-authored text;
    /// binding faults go through the `Bindings.failure` message.
    pub fn describe(&self, messages: &dyn MessageSource) -> String {
        match self {
            CommitError::Invariant { violation, .. } => violation.message().to_string(),
            CommitError::Binding(e) => {
                messages.format("Bindings.failure", &[e.to_string().as_str()])
            }
        }
    }
}

impl<M> fmt::Debug for CommitError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitError::Binding(e) => f.debug_tuple("Binding").field(e).finish(),
            CommitError::Invariant { violation, binding } => f
                .debug_struct("Invariant")
                .field("violation", violation)
                .field("binding", &binding.as_ref().map(|b| b.property()))
                .finish(),
        }
    }
}
