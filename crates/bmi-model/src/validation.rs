use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First unmet precondition of a form submission.
///
/// Checks run in a fixed priority order (gender, weight, height) and at most
/// one error is active at a time; a later submission replaces it wholesale.
/// The `#[error]` texts are the exact messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please, select your gender.")]
    MissingGender,
    #[error("Please, type your weight.")]
    MissingWeight,
    #[error("Please, type your height.")]
    MissingHeight,
}

impl ValidationError {
    /// Returns the fixed user-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingGender => "Please, select your gender.",
            ValidationError::MissingWeight => "Please, type your weight.",
            ValidationError::MissingHeight => "Please, type your height.",
        }
    }

    /// Name of the form field the error points at.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingGender => "gender",
            ValidationError::MissingWeight => "weight",
            ValidationError::MissingHeight => "height",
        }
    }
}
