//! Step validation contract.
//!
//! A wizard step may carry a [`StepSchema`]. The progression asks it to
//! validate the captured data before letting the user advance. Any
//! `Fn(&StepData) -> Validation` closure is a schema.

use serde::Serialize;
use std::collections::BTreeMap;

/// Captured data for one step.
pub type StepData = serde_json::Value;

/// Field name to error message.
pub type ValidationErrors = BTreeMap<String, String>;

/// Result of validating step data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: ValidationErrors,
}

impl Validation {
    /// A passing validation.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: ValidationErrors::new(),
        }
    }

    /// Valid exactly when `errors` is empty.
    pub fn from_errors(errors: ValidationErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A failing validation with a single field error.
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(field.into(), message.into());
        Self::from_errors(errors)
    }
}

/// Validates the data captured for a step.
pub trait StepSchema {
    fn validate(&self, data: &StepData) -> Validation;
}

impl<F> StepSchema for F
where
    F: Fn(&StepData) -> Validation,
{
    fn validate(&self, data: &StepData) -> Validation {
        self(data)
    }
}
