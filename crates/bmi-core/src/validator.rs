//! Submission validation.
//!
//! Checks run in a fixed priority order (gender, weight, height) and
//! short-circuit at the first failure, so at most one error is reported per
//! submission. A field is missing when it is unset or zero; the zero case
//! keeps parity with the historical form contract, where zero doubled as the
//! "not entered" sentinel.

use bmi_model::{Gender, ValidationError};

/// Validate a submission, returning the first unmet precondition.
///
/// Returns `None` when the submission may proceed to classification.
pub fn validate(
    gender: Option<Gender>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> Option<ValidationError> {
    if gender.is_none() {
        return Some(ValidationError::MissingGender);
    }
    if is_unset(weight_kg) {
        return Some(ValidationError::MissingWeight);
    }
    if is_unset(height_cm) {
        return Some(ValidationError::MissingHeight);
    }
    None
}

/// A field is unset when absent or zero.
fn is_unset(value: Option<f64>) -> bool {
    match value {
        Some(value) => value == 0.0,
        None => true,
    }
}
