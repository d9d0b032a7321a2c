pub mod assessment;
pub mod condition;
pub mod gender;
pub mod validation;

pub use assessment::{BmiAssessment, Measurement};
pub use condition::BmiCondition;
pub use gender::Gender;
pub use validation::ValidationError;

#[cfg(test)]
mod tests {
    use super::{BmiAssessment, BmiCondition, Gender, ValidationError};

    #[test]
    fn model_types_round_trip_through_json() {
        let assessment = BmiAssessment {
            value: 19.84,
            condition: BmiCondition::Normal,
        };
        let json = serde_json::to_string(&assessment).expect("serialize");
        let round: BmiAssessment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round.condition, BmiCondition::Normal);

        let gender: Gender = serde_json::from_str("\"men\"").expect("deserialize gender");
        assert_eq!(gender, Gender::Men);

        let error: ValidationError =
            serde_json::from_str("\"missing_weight\"").expect("deserialize error");
        assert_eq!(error, ValidationError::MissingWeight);
    }
}
