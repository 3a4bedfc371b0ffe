//! Symptom status codes.
//!
//! The empty code is not a variant: an unset symptom holds `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symbol that is not part of a status-code set.
#[derive(Debug, thiserror::Error)]
#[error("'{symbol}' is not a valid status code")]
pub struct StatusError {
    pub symbol: String,
}

/// A closed set of status codes that can be rendered into a note.
pub trait StatusCode: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Every code in the set, in the order a form offers them.
    const ALL: &'static [Self];

    /// The shorthand written into the note, e.g. `++`.
    fn symbol(self) -> &'static str;

    /// Parse a shorthand symbol back into a code.
    fn from_symbol(symbol: &str) -> Result<Self, StatusError> {
        let symbol = symbol.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.symbol() == symbol)
            .ok_or_else(|| StatusError {
                symbol: symbol.to_owned(),
            })
    }
}

/// Binary presence marker for a symptom: `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    #[serde(rename = "+")]
    Present,
    #[serde(rename = "-")]
    Absent,
}

impl StatusCode for Presence {
    const ALL: &'static [Self] = &[Presence::Present, Presence::Absent];

    fn symbol(self) -> &'static str {
        match self {
            Presence::Present => "+",
            Presence::Absent => "-",
        }
    }
}

/// Severity-graded marker for a symptom: `++`, `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "++")]
    Severe,
    #[serde(rename = "+")]
    Present,
    #[serde(rename = "-")]
    Absent,
}

impl Severity {
    pub fn is_severe(self) -> bool {
        matches!(self, Severity::Severe)
    }
}

impl StatusCode for Severity {
    const ALL: &'static [Self] = &[Severity::Severe, Severity::Present, Severity::Absent];

    fn symbol(self) -> &'static str {
        match self {
            Severity::Severe => "++",
            Severity::Present => "+",
            Severity::Absent => "-",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Presence {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl FromStr for Severity {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbols() {
        assert_eq!("+".parse::<Presence>().unwrap(), Presence::Present);
        assert_eq!(" - ".parse::<Presence>().unwrap(), Presence::Absent);
        assert_eq!("++".parse::<Severity>().unwrap(), Severity::Severe);
    }

    #[test]
    fn presence_has_no_severe_grade() {
        let err = "++".parse::<Presence>().unwrap_err();
        assert_eq!(err.symbol, "++");
        assert_eq!(err.to_string(), "'++' is not a valid status code");
    }

    #[test]
    fn empty_symbol_is_not_a_code() {
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn serializes_as_symbol() {
        let json = serde_json::to_string(&Severity::Severe).expect("serialize");
        assert_eq!(json, "\"++\"");
        let parsed: Presence = serde_json::from_str("\"-\"").expect("deserialize");
        assert_eq!(parsed, Presence::Absent);
    }
}
