//! Self-validation contract for bound model objects.

use thiserror::Error;

/// Implemented by every model object (and optional sub-object) a registry
/// commits into. Validation stops at the first broken rule.
pub trait Validatable {
    fn check_invariants(&self) -> Result<(), InvariantViolation>;
}

/// A broken model rule, naming the property path responsible for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvariantViolation {
    property: String,
    message: String,
}

impl InvariantViolation {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn check_true(
    condition: bool,
    property: &str,
    message: impl Into<String>,
) -> Result<(), InvariantViolation> {
    if condition {
        Ok(())
    } else {
        Err(InvariantViolation::new(property, message))
    }
}

/// Fails when `value` is blank.
pub fn check_not_empty(value: &str, property: &str, name: &str) -> Result<(), InvariantViolation> {
    check_true(
        !value.trim().is_empty(),
        property,
        format!("Enter: {name}"),
    )
}

/// Fails when `value` lies outside `min..=max`.
pub fn check_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
    property: &str,
    name: &str,
) -> Result<(), InvariantViolation> {
    let ok = value >= min && value <= max;
    check_true(
        ok,
        property,
        format!("{name} must be in range [{min}-{max}]"),
    )
}
