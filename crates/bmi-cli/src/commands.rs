use comfy_table::Table;
use tracing::info_span;

use bmi_core::Session;
use bmi_model::{BmiAssessment, BmiCondition, ValidationError};

use crate::cli::AssessArgs;
use crate::summary::{apply_table_style, header_cell};

/// Run one validate-then-classify pass over the supplied fields.
pub fn run_assess(args: &AssessArgs) -> Result<BmiAssessment, ValidationError> {
    let span = info_span!("assess");
    let _guard = span.enter();

    let mut session = Session::new();
    session.set_gender(args.gender.map(Into::into));
    session.set_weight(args.weight);
    session.set_height(args.height);
    session.submit()
}

/// Print the six clinical bands with their ranges and guidance.
pub fn run_conditions() {
    println!("{}", conditions_table());
}

fn conditions_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Condition"),
        header_cell("BMI Range"),
        header_cell("Guidance"),
    ]);
    apply_table_style(&mut table);
    for condition in BmiCondition::ALL {
        table.add_row(vec![
            condition.label(),
            condition.range_description(),
            condition.advice(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use bmi_model::{BmiCondition, ValidationError};

    use super::{conditions_table, run_assess};
    use crate::cli::{AssessArgs, GenderArg};

    fn assess_args(
        gender: Option<GenderArg>,
        weight: Option<f64>,
        height: Option<f64>,
    ) -> AssessArgs {
        AssessArgs {
            gender,
            weight,
            height,
            json: false,
        }
    }

    #[test]
    fn empty_submission_reports_missing_gender() {
        let result = run_assess(&assess_args(None, None, None));
        assert_eq!(result, Err(ValidationError::MissingGender));
        assert_eq!(result.unwrap_err().message(), "Please, select your gender.");
    }

    #[test]
    fn partial_submission_reports_first_missing_field() {
        let result = run_assess(&assess_args(Some(GenderArg::Men), None, Some(175.0)));
        assert_eq!(result, Err(ValidationError::MissingWeight));
    }

    #[test]
    fn complete_submission_classifies() {
        let assessment = run_assess(&assess_args(Some(GenderArg::Woman), Some(56.0), Some(168.0)))
            .expect("valid submission");
        assert_eq!(assessment.value, 19.84);
        assert_eq!(assessment.condition, BmiCondition::Normal);
    }

    #[test]
    fn conditions_table_lists_all_bands() {
        let rendered = conditions_table().to_string();
        for condition in BmiCondition::ALL {
            assert!(rendered.contains(condition.label()), "{}", condition.label());
        }
    }
}
