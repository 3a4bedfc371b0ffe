//! Clipboard backends.
//!
//! The clipboard is the only external service the drafting assistant talks to. Writes are
//! awaited so the editor can flip its "copied" indicator once they finish.

use crate::{ClipboardCommand, ClipboardError, CoreConfig};
use std::cell::RefCell;
use std::future::Future;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// Something the note can be copied into.
pub trait Clipboard {
    fn write(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Pipes the text into an external program such as `wl-copy`, `xclip` or `pbcopy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: ClipboardCommand,
    timeout: Duration,
}

impl CommandClipboard {
    pub fn new(command: ClipboardCommand, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    pub fn program(&self) -> &str {
        &self.command.program
    }
}

impl Clipboard for CommandClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let program = &self.command.program;
        tracing::debug!(%program, bytes = text.len(), "writing note to clipboard program");

        // Clipboard tools often fork a daemon that outlives the command; nothing waits on its
        // output streams.
        let mut child = tokio::process::Command::new(program)
            .args(&self.command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or(ClipboardError::StdinUnavailable)?;

        let run = async move {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(ClipboardError::Write)?;
            // Close stdin so the program sees EOF.
            drop(stdin);
            child.wait().await.map_err(ClipboardError::Write)
        };

        let status = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| ClipboardError::Timeout(self.timeout))??;

        if !status.success() {
            return Err(ClipboardError::Exit {
                program: program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// In-process clipboard; holds the last copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}

/// The clipboard chosen from [`CoreConfig`] at startup.
#[derive(Debug)]
pub enum ClipboardBackend {
    Command(CommandClipboard),
    Memory(MemoryClipboard),
}

impl ClipboardBackend {
    pub fn from_config(config: &CoreConfig) -> Self {
        match config.clipboard_command() {
            Some(command) => ClipboardBackend::Command(CommandClipboard::new(
                command.clone(),
                config.clipboard_timeout(),
            )),
            None => ClipboardBackend::Memory(MemoryClipboard::new()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ClipboardBackend::Command(clipboard) => format!("command `{}`", clipboard.program()),
            ClipboardBackend::Memory(_) => "in-memory".to_string(),
        }
    }
}

impl Clipboard for ClipboardBackend {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        match self {
            ClipboardBackend::Command(clipboard) => clipboard.write(text).await,
            ClipboardBackend::Memory(clipboard) => clipboard.write(text).await,
        }
    }
}
