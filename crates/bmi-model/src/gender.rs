use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender selection offered by the intake form.
///
/// Gender is validated for presence only; it never feeds into the BMI
/// formula or the band classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Others,
    Woman,
    Men,
}

impl Gender {
    /// All selectable options, in form display order.
    pub const ALL: [Gender; 3] = [Gender::Others, Gender::Woman, Gender::Men];

    /// Returns the display label shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Others => "Others",
            Gender::Woman => "Woman",
            Gender::Men => "Men",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "OTHERS" => Ok(Gender::Others),
            "WOMAN" => Ok(Gender::Woman),
            "MEN" => Ok(Gender::Men),
            _ => Err(format!("Unknown gender option: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Gender;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("men".parse::<Gender>().unwrap(), Gender::Men);
        assert_eq!("WOMAN".parse::<Gender>().unwrap(), Gender::Woman);
        assert_eq!(" others ".parse::<Gender>().unwrap(), Gender::Others);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn display_matches_form_labels() {
        let labels: Vec<&str> = Gender::ALL.iter().map(Gender::as_str).collect();
        assert_eq!(labels, vec!["Others", "Woman", "Men"]);
    }
}
