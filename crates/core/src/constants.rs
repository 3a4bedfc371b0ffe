//! Constants used throughout the pedichart core crate.
//!
//! Labels here are written into notes or shown next to them verbatim.

use std::time::Duration;

/// Separator between condition fragments in the combined note.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// How long the "copied" acknowledgment stays up after a successful copy.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Copy button label.
pub const COPY_LABEL: &str = "복사";

/// Copy button label while the acknowledgment is showing.
pub const COPIED_LABEL: &str = "복사됨!";

/// Reset button label.
pub const RESET_LABEL: &str = "초기화";

/// Shown in place of an empty note.
pub const NOTE_PLACEHOLDER: &str = "항목을 입력하면 차팅이 자동으로 생성됩니다.";

/// Environment variable naming the clipboard program and its arguments.
pub const CLIPBOARD_CMD_ENV: &str = "PEDICHART_CLIPBOARD_CMD";

/// Environment variable overriding the clipboard write timeout, in milliseconds.
pub const CLIPBOARD_TIMEOUT_ENV: &str = "PEDICHART_CLIPBOARD_TIMEOUT_MS";

/// Default clipboard write timeout.
pub const DEFAULT_CLIPBOARD_TIMEOUT: Duration = Duration::from_millis(3_000);
