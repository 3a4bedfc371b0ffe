//! The editable combined note and its copy action.

use crate::clipboard::Clipboard;
use crate::constants::{COPIED_INDICATOR_DURATION, COPIED_LABEL, COPY_LABEL};
use tokio::time::Instant;

/// What a copy request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The note was empty; nothing was written.
    Skipped,
    Copied,
    /// The clipboard rejected the write. Already logged.
    Failed,
}

/// Text surface showing the combined note.
///
/// Manual edits are kept verbatim until the next recompute, which replaces them without any
/// attempt to merge.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    text: String,
    copied_at: Option<Instant>,
}

impl NoteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text with the user's own edit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Show a freshly recomputed combined note, discarding any manual edit.
    pub fn sync(&mut self, combined: String) {
        if self.text != combined {
            tracing::debug!(chars = combined.chars().count(), "note recomputed");
        }
        self.text = combined;
    }

    /// Copy the displayed text; empty text is never copied.
    pub async fn copy<C: Clipboard>(&mut self, clipboard: &C) -> CopyOutcome {
        if self.text.is_empty() {
            return CopyOutcome::Skipped;
        }

        match clipboard.write(&self.text).await {
            Ok(()) => {
                tracing::info!(chars = self.text.chars().count(), "note copied to clipboard");
                self.copied_at = Some(Instant::now());
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to copy note to clipboard");
                CopyOutcome::Failed
            }
        }
    }

    /// Whether the "copied" acknowledgment is still showing.
    pub fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_INDICATOR_DURATION)
    }

    pub fn copy_label(&self) -> &'static str {
        if self.is_copied() {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
