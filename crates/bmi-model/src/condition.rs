use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical classification band derived from a BMI value.
///
/// The band boundaries (including the literal gaps between ranges, which
/// fall back to `Normal`) are reproduced exactly from the reference
/// classification table; see `bmi-core`'s classifier for the decision order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCondition {
    BelowNormal,
    Normal,
    Overweight,
    ObesityGradeI,
    #[serde(rename = "obesity_grade_ii")]
    ObesityGradeII,
    #[serde(rename = "obesity_grade_iii")]
    ObesityGradeIII,
}

impl BmiCondition {
    /// All bands, in classification order.
    pub const ALL: [BmiCondition; 6] = [
        BmiCondition::BelowNormal,
        BmiCondition::Normal,
        BmiCondition::Overweight,
        BmiCondition::ObesityGradeI,
        BmiCondition::ObesityGradeII,
        BmiCondition::ObesityGradeIII,
    ];

    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCondition::BelowNormal => "Below Normal",
            BmiCondition::Normal => "Normal",
            BmiCondition::Overweight => "Overweight",
            BmiCondition::ObesityGradeI => "Obesity Grade I",
            BmiCondition::ObesityGradeII => "Obesity Grade II",
            BmiCondition::ObesityGradeIII => "Obesity Grade III",
        }
    }

    /// Returns the fixed explanatory paragraph shown with a result.
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCondition::BelowNormal => {
                "Look for a doctor. Some people are underweight due to the \
                 characteristics of their body and that's ok. Others may be \
                 experiencing problems such as malnutrition. You need to know \
                 what the case is."
            }
            BmiCondition::Normal => {
                "Glad you're at your normal weight! And the best way to stay \
                 that way is to maintain an active lifestyle and a balanced diet."
            }
            BmiCondition::Overweight => {
                "He is, in fact, a pre-obesity and many people in this range \
                 already have associated diseases, such as diabetes and \
                 hypertension. It is important to review habits and seek help \
                 before, due to a series of factors, entering the obesity range \
                 for real."
            }
            BmiCondition::ObesityGradeI => {
                "Warning sign! It's time to take care of yourself, even if your \
                 exams are normal. Let's start the changes today! Take care of \
                 your food. You need to start a follow-up with a nutritionist \
                 and/or endocrinologist."
            }
            BmiCondition::ObesityGradeII => {
                "Even if your exams appear to be normal, it's time to take care \
                 of yourself, initiating lifestyle changes with close monitoring \
                 of health professionals."
            }
            BmiCondition::ObesityGradeIII => {
                "Here the signal is red, with a strong probability that there \
                 are already very serious diseases associated. Treatment must \
                 be even more urgent."
            }
        }
    }

    /// Human-readable rendering of the band's test on the BMI value.
    ///
    /// `Normal` additionally acts as the fallback for values matched by no
    /// explicit range.
    pub fn range_description(&self) -> &'static str {
        match self {
            BmiCondition::BelowNormal => "0 < BMI < 18.5",
            BmiCondition::Normal => "18.6 < BMI < 24.9",
            BmiCondition::Overweight => "25 < BMI < 29.9",
            BmiCondition::ObesityGradeI => "30 < BMI < 34.9",
            BmiCondition::ObesityGradeII => "35 < BMI < 39.9",
            BmiCondition::ObesityGradeIII => "BMI > 40",
        }
    }
}

impl fmt::Display for BmiCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::BmiCondition;

    #[test]
    fn labels_cover_all_bands() {
        let labels: Vec<&str> = BmiCondition::ALL.iter().map(BmiCondition::label).collect();
        assert_eq!(
            labels,
            vec![
                "Below Normal",
                "Normal",
                "Overweight",
                "Obesity Grade I",
                "Obesity Grade II",
                "Obesity Grade III",
            ]
        );
    }

    #[test]
    fn advice_is_nonempty_for_every_band() {
        for condition in BmiCondition::ALL {
            assert!(!condition.advice().is_empty());
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&BmiCondition::ObesityGradeIII).unwrap();
        assert_eq!(json, "\"obesity_grade_iii\"");
    }
}
