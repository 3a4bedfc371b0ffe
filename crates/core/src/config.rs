//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the session. The
//! parsing functions take raw `Option<String>` values instead of reading the environment
//! themselves, so tests never touch process-wide state.

use crate::constants::DEFAULT_CLIPBOARD_TIMEOUT;
use crate::{ChartError, ChartResult};
use std::time::Duration;

/// External program the note is piped into on copy, e.g. `xclip -selection clipboard`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    clipboard_command: Option<ClipboardCommand>,
    clipboard_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        clipboard_command: Option<ClipboardCommand>,
        clipboard_timeout: Duration,
    ) -> ChartResult<Self> {
        if clipboard_timeout.is_zero() {
            return Err(ChartError::InvalidConfig(
                "clipboard timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            clipboard_command,
            clipboard_timeout,
        })
    }

    /// Build a config from the raw values of the `PEDICHART_*` environment variables.
    pub fn from_env_values(
        clipboard_cmd: Option<String>,
        clipboard_timeout_ms: Option<String>,
    ) -> ChartResult<Self> {
        Self::new(
            clipboard_command_from_env_value(clipboard_cmd),
            clipboard_timeout_from_env_value(clipboard_timeout_ms)?,
        )
    }

    /// `None` means copies go to the in-process clipboard.
    pub fn clipboard_command(&self) -> Option<&ClipboardCommand> {
        self.clipboard_command.as_ref()
    }

    pub fn clipboard_timeout(&self) -> Duration {
        self.clipboard_timeout
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            clipboard_command: None,
            clipboard_timeout: DEFAULT_CLIPBOARD_TIMEOUT,
        }
    }
}

/// Split a whitespace-separated command line into program and arguments.
///
/// Returns `None` if `value` is `None` or blank.
pub fn clipboard_command_from_env_value(value: Option<String>) -> Option<ClipboardCommand> {
    let value = value?;
    let mut parts = value.split_whitespace().map(str::to_owned);
    let program = parts.next()?;

    Some(ClipboardCommand {
        program,
        args: parts.collect(),
    })
}

/// Parse the clipboard timeout in milliseconds.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn clipboard_timeout_from_env_value(value: Option<String>) -> ChartResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_CLIPBOARD_TIMEOUT);
    };

    let millis = value.parse::<u64>().map_err(|e| {
        ChartError::InvalidConfig(format!("clipboard timeout '{value}' is not a number: {e}"))
    })?;

    Ok(Duration::from_millis(millis))
}
