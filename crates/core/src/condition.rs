//! The conditions a chart can be drafted for.

use crate::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the charting forms offered in the sidebar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    #[serde(alias = "식욕부진")]
    Appetite,
    #[serde(alias = "성장")]
    Growth,
    #[serde(alias = "비염")]
    Rhinitis,
}

impl Condition {
    /// Sidebar order.
    pub const ALL: [Condition; 3] = [Condition::Appetite, Condition::Growth, Condition::Rhinitis];

    /// Machine name used by surfaces and replay scripts.
    pub fn key(self) -> &'static str {
        match self {
            Condition::Appetite => "appetite",
            Condition::Growth => "growth",
            Condition::Rhinitis => "rhinitis",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Appetite => "식욕부진",
            Condition::Growth => "성장",
            Condition::Rhinitis => "비염",
        }
    }

    /// First line of this condition's note fragment.
    pub fn header(self) -> &'static str {
        match self {
            Condition::Appetite => "#식욕부진",
            Condition::Growth => "#성장",
            Condition::Rhinitis => "#비염",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Condition {
    type Err = ChartError;

    /// Accepts either the machine name or the sidebar label.
    fn from_str(s: &str) -> ChartResult<Self> {
        let s = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| ChartError::UnknownCondition(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_and_label() {
        assert_eq!("growth".parse::<Condition>().unwrap(), Condition::Growth);
        assert_eq!("Rhinitis".parse::<Condition>().unwrap(), Condition::Rhinitis);
        assert_eq!("식욕부진".parse::<Condition>().unwrap(), Condition::Appetite);
    }

    #[test]
    fn rejects_unknown() {
        let err = "asthma".parse::<Condition>().unwrap_err();
        assert!(matches!(err, ChartError::UnknownCondition(ref s) if s == "asthma"));
    }

    #[test]
    fn headers_carry_the_label() {
        for condition in Condition::ALL {
            assert_eq!(condition.header(), format!("#{}", condition.label()));
        }
    }

    #[test]
    fn deserializes_key_or_label() {
        let conditions: Vec<Condition> =
            serde_yaml::from_str("- growth\n- 성장\n- 비염\n- 식욕부진\n").expect("deserialize");
        assert_eq!(
            conditions,
            vec![
                Condition::Growth,
                Condition::Growth,
                Condition::Rhinitis,
                Condition::Appetite
            ]
        );
        assert_eq!(
            serde_yaml::to_string(&Condition::Rhinitis).expect("serialize"),
            "rhinitis\n"
        );
    }
}
