//! Form interactions as data.
//!
//! A [`FieldEvent`] is one user action against the session. Surfaces build them from their own
//! input, and replay scripts are YAML lists of them:
//!
//! ```yaml
//! - action: set_text
//!   condition: growth
//!   field: growthLastYearNum
//!   value: "5"
//! - action: toggle
//!   condition: appetite
//!   symptom: abdominalPain
//!   status: "+"
//! ```

use crate::{ChartError, ChartResult, Condition};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FieldEvent {
    Select {
        condition: Condition,
    },
    SetText {
        condition: Condition,
        field: String,
        #[serde(default)]
        value: String,
    },
    Toggle {
        condition: Condition,
        symptom: String,
        status: String,
    },
    SetDetail {
        condition: Condition,
        symptom: String,
        #[serde(default)]
        detail: String,
    },
    EditNote {
        text: String,
    },
    Reset,
}

impl FieldEvent {
    /// The condition whose field store this event touches, if any.
    pub fn condition(&self) -> Option<Condition> {
        match self {
            FieldEvent::Select { condition }
            | FieldEvent::SetText { condition, .. }
            | FieldEvent::Toggle { condition, .. }
            | FieldEvent::SetDetail { condition, .. } => Some(*condition),
            FieldEvent::EditNote { .. } | FieldEvent::Reset => None,
        }
    }
}

/// Parse a YAML list of events.
pub fn parse_script(input: &str) -> ChartResult<Vec<FieldEvent>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(input).map_err(ChartError::ReplayParse)
}

/// Read and parse a replay script from disk.
pub fn load_script(path: &Path) -> ChartResult<Vec<FieldEvent>> {
    let contents = std::fs::read_to_string(path).map_err(ChartError::ReplayRead)?;
    parse_script(&contents)
}
