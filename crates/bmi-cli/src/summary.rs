use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bmi_model::{BmiAssessment, BmiCondition};

/// Print a successful assessment as a human-readable summary.
pub fn print_assessment(assessment: &BmiAssessment) {
    println!("Perfect! Here is your BMI:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("BMI"), header_cell("Condition")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(format!("{:.2}", assessment.value)).add_attribute(Attribute::Bold),
        condition_cell(assessment.condition),
    ]);
    println!("{table}");
    println!();
    println!("{}", assessment.advice());
}

/// Print a successful assessment as JSON for machine consumption.
pub fn print_assessment_json(assessment: &BmiAssessment) -> Result<()> {
    let json = serde_json::to_string_pretty(assessment).context("serialize assessment")?;
    println!("{json}");
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn condition_cell(condition: BmiCondition) -> Cell {
    Cell::new(condition.label())
        .fg(condition_color(condition))
        .add_attribute(Attribute::Bold)
}

fn condition_color(condition: BmiCondition) -> Color {
    match condition {
        BmiCondition::Normal => Color::Green,
        BmiCondition::BelowNormal | BmiCondition::Overweight => Color::Yellow,
        BmiCondition::ObesityGradeI
        | BmiCondition::ObesityGradeII
        | BmiCondition::ObesityGradeIII => Color::Red,
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
