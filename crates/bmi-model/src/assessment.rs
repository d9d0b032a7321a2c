use serde::{Deserialize, Serialize};

use crate::condition::BmiCondition;

/// One person's measurements for a single submission. Transient; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimeters.
    pub height_cm: f64,
}

/// Outcome of one validated submission.
///
/// `value` is the BMI rounded to exactly 2 decimal places; the rounded value
/// is what gets stored, displayed, and classified. No higher-precision value
/// is retained. Replaced wholesale on each new submission; cleared by reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// BMI value rounded to 2 decimal places.
    pub value: f64,
    /// Clinical band the value falls in.
    pub condition: BmiCondition,
}

impl BmiAssessment {
    /// Display label of the band.
    pub fn label(&self) -> &'static str {
        self.condition.label()
    }

    /// Explanatory paragraph for the band.
    pub fn advice(&self) -> &'static str {
        self.condition.advice()
    }
}

#[cfg(test)]
mod tests {
    use super::{BmiAssessment, BmiCondition};

    #[test]
    fn assessment_serializes() {
        let assessment = BmiAssessment {
            value: 22.86,
            condition: BmiCondition::Normal,
        };
        let json = serde_json::to_string(&assessment).expect("serialize assessment");
        let round: BmiAssessment = serde_json::from_str(&json).expect("deserialize assessment");
        assert_eq!(round, assessment);
    }
}
