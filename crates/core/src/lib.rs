//! # pedichart core
//!
//! Core logic for the pediatric chart drafting assistant.
//!
//! This crate contains the state behind the drafting forms and the pure note assembly:
//! - One field store per condition (appetite loss, growth, rhinitis), each with its own
//!   note assembler
//! - The aggregator that concatenates fragments in first-touched order
//! - The editable note, with copy-to-clipboard and reset
//! - [`ChartSession`], the single owner of all of the above
//!
//! **No presentation concerns**: rendering, widgets and the command grammar belong in the
//! binaries.

pub mod aggregate;
pub mod clipboard;
pub mod condition;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod events;
pub mod forms;
pub mod session;

pub use aggregate::NoteAggregator;
pub use clipboard::{Clipboard, ClipboardBackend, CommandClipboard, MemoryClipboard};
pub use condition::Condition;
pub use config::{ClipboardCommand, CoreConfig};
pub use editor::{CopyOutcome, NoteEditor};
pub use error::{ChartError, ChartResult, ClipboardError};
pub use events::FieldEvent;
pub use forms::{AppetiteForm, ChartForm, FormCatalog, FormFields, GrowthForm, RhinitisForm};
pub use session::ChartSession;
