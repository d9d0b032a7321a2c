//! CLI library components for the BMI calculator.

pub mod logging;
