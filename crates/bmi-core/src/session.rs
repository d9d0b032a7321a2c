//! Form session state machine.
//!
//! Holds the state of one active form: the three input fields, the active
//! validation error, and the last computed assessment. One submission runs a
//! full validate-then-classify pass synchronously; data flows one direction
//! per submission event.

use tracing::debug;

use bmi_model::{BmiAssessment, Gender, Measurement, ValidationError};

use crate::classifier::classify;
use crate::validator::validate;

/// State of one active form session.
///
/// Fields start unset. An assessment exists iff the most recent submission
/// validated successfully and no reset has occurred since.
#[derive(Debug, Clone, Default)]
pub struct Session {
    gender: Option<Gender>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    active_error: Option<ValidationError>,
    result: Option<BmiAssessment>,
}

impl Session {
    /// Create a session with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_weight(&mut self, weight_kg: Option<f64>) {
        self.weight_kg = weight_kg;
    }

    pub fn set_height(&mut self, height_cm: Option<f64>) {
        self.height_cm = height_cm;
    }

    /// Run one validate-then-classify pass over the current fields.
    ///
    /// On success the assessment is stored and the active error cleared. On
    /// failure the error is stored, replacing any prior one, and a previously
    /// stored assessment is left untouched.
    pub fn submit(&mut self) -> Result<BmiAssessment, ValidationError> {
        if let Some(error) = validate(self.gender, self.weight_kg, self.height_cm) {
            debug!(field = error.field(), "submission rejected");
            self.active_error = Some(error);
            return Err(error);
        }
        self.active_error = None;
        // Validation guarantees both fields are set and nonzero.
        let measurement = Measurement {
            weight_kg: self.weight_kg.unwrap_or_default(),
            height_cm: self.height_cm.unwrap_or_default(),
        };
        let assessment = classify(measurement);
        debug!(
            value = assessment.value,
            condition = assessment.label(),
            "submission classified"
        );
        self.result = Some(assessment);
        Ok(assessment)
    }

    /// Clear the input fields and the stored assessment.
    ///
    /// The active error is not cleared explicitly; after a successful
    /// submission no error is active anyway, matching the original form.
    pub fn reset(&mut self) {
        self.gender = None;
        self.weight_kg = None;
        self.height_cm = None;
        self.result = None;
    }

    /// The stored assessment, if the last submission succeeded.
    pub fn result(&self) -> Option<&BmiAssessment> {
        self.result.as_ref()
    }

    /// The active validation error, if any.
    pub fn active_error(&self) -> Option<ValidationError> {
        self.active_error
    }

    /// Message for the active error, or an empty string when none is active.
    pub fn error_message(&self) -> &'static str {
        self.active_error.map(|e| e.message()).unwrap_or("")
    }
}
