use crate::Condition;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unknown condition: {0}")]
    UnknownCondition(String),
    #[error("{condition} has no field named '{field}'")]
    UnknownField { condition: Condition, field: String },
    #[error("{condition} has no symptom named '{symptom}'")]
    UnknownSymptom {
        condition: Condition,
        symptom: String,
    },
    #[error("invalid status '{status}' for {symptom}")]
    InvalidStatus {
        symptom: String,
        status: String,
        #[source]
        source: pedichart_types::StatusError,
    },
    #[error("'{value}' is not a valid choice for {field}")]
    InvalidChoice { field: String, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read replay script: {0}")]
    ReplayRead(std::io::Error),
    #[error("failed to parse replay script: {0}")]
    ReplayParse(serde_yaml::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Failure writing to the system clipboard.
///
/// These never reach the user; the editor logs them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("failed to spawn clipboard program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard program stdin was not captured")]
    StdinUnavailable,
    #[error("failed to pipe text to clipboard program: {0}")]
    Write(std::io::Error),
    #[error("clipboard program '{program}' exited with {code:?}")]
    Exit { program: String, code: Option<i32> },
    #[error("clipboard write timed out after {0:?}")]
    Timeout(Duration),
    #[error("clipboard unavailable")]
    Unavailable,
}
