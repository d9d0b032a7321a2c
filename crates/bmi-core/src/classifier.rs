//! BMI computation and band classification.
//!
//! The band table is evaluated in order and the first match wins. The
//! boundary values, the strict comparisons, and the literal gaps between
//! ranges (18.5-18.6, 24.9-25, 29.9-30, 34.9-35, 39.9-40) are reproduced
//! exactly from the reference table; values in a gap or on a boundary reach
//! the `Normal` fallback. Do not close the gaps.

use bmi_model::{BmiAssessment, BmiCondition, Measurement};

/// Compute the BMI for a validated measurement and classify it.
///
/// `bmi = weight_kg / (height_cm / 100)^2`, rounded to 2 decimal places
/// before classification. Only the rounded value is retained.
pub fn classify(measurement: Measurement) -> BmiAssessment {
    let value = compute_bmi(measurement.weight_kg, measurement.height_cm);
    BmiAssessment {
        value,
        condition: condition_for(value),
    }
}

/// Compute the BMI value rounded to 2 decimal places.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Map a rounded BMI value to its band. Total: every value maps to exactly
/// one band, with `Normal` as the fallback.
pub fn condition_for(bmi: f64) -> BmiCondition {
    if 0.0 < bmi && bmi < 18.5 {
        return BmiCondition::BelowNormal;
    }
    if 18.6 < bmi && bmi < 24.9 {
        return BmiCondition::Normal;
    }
    if 25.0 < bmi && bmi < 29.9 {
        return BmiCondition::Overweight;
    }
    if 30.0 < bmi && bmi < 34.9 {
        return BmiCondition::ObesityGradeI;
    }
    if 35.0 < bmi && bmi < 39.9 {
        return BmiCondition::ObesityGradeII;
    }
    if bmi > 40.0 {
        return BmiCondition::ObesityGradeIII;
    }
    BmiCondition::Normal
}

/// Round half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use bmi_model::{BmiCondition, Measurement};

    use super::{classify, compute_bmi, condition_for};

    fn measurement(weight_kg: f64, height_cm: f64) -> Measurement {
        Measurement {
            weight_kg,
            height_cm,
        }
    }

    #[test]
    fn computes_rounded_bmi() {
        // 70 / 1.75^2 = 22.857... -> 22.86
        assert_eq!(compute_bmi(70.0, 175.0), 22.86);
        // 56 / 1.68^2 = 19.841... -> 19.84
        assert_eq!(compute_bmi(56.0, 168.0), 19.84);
        // 120 / 1.70^2 = 41.522... -> 41.52
        assert_eq!(compute_bmi(120.0, 170.0), 41.52);
    }

    #[test]
    fn classifies_reference_scenarios() {
        assert_eq!(
            classify(measurement(70.0, 175.0)).condition,
            BmiCondition::Normal
        );
        assert_eq!(
            classify(measurement(56.0, 168.0)).condition,
            BmiCondition::Normal
        );
        assert_eq!(
            classify(measurement(120.0, 170.0)).condition,
            BmiCondition::ObesityGradeIII
        );
        assert_eq!(
            classify(measurement(45.0, 170.0)).condition,
            BmiCondition::BelowNormal
        );
    }

    #[test]
    fn band_interiors() {
        assert_eq!(condition_for(15.57), BmiCondition::BelowNormal);
        assert_eq!(condition_for(22.86), BmiCondition::Normal);
        assert_eq!(condition_for(27.5), BmiCondition::Overweight);
        assert_eq!(condition_for(32.0), BmiCondition::ObesityGradeI);
        assert_eq!(condition_for(37.0), BmiCondition::ObesityGradeII);
        assert_eq!(condition_for(41.52), BmiCondition::ObesityGradeIII);
    }

    #[test]
    fn gaps_fall_back_to_normal() {
        // Values inside the literal gaps of the reference table.
        for value in [18.55, 24.95, 29.95, 34.95, 39.95] {
            assert_eq!(condition_for(value), BmiCondition::Normal, "gap {value}");
        }
    }

    #[test]
    fn boundaries_fall_back_to_normal() {
        // All comparisons are strict, so boundary values miss their band.
        for value in [18.5, 18.6, 24.9, 25.0, 29.9, 30.0, 34.9, 35.0, 39.9, 40.0] {
            assert_eq!(
                condition_for(value),
                BmiCondition::Normal,
                "boundary {value}"
            );
        }
    }

    #[test]
    fn zero_and_negative_fall_back_to_normal() {
        assert_eq!(condition_for(0.0), BmiCondition::Normal);
        assert_eq!(condition_for(-1.0), BmiCondition::Normal);
    }
}
