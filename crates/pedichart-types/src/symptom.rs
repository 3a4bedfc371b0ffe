use crate::StatusCode;
use serde::{Deserialize, Serialize};

/// One symptom as captured on a form: a status code plus free-text detail.
///
/// The detail only reaches the note while a status is set; clearing the status keeps the
/// typed detail around so re-selecting the status brings it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry<S> {
    pub status: Option<S>,
    #[serde(default)]
    pub detail: String,
}

impl<S> Default for SymptomEntry<S> {
    fn default() -> Self {
        Self {
            status: None,
            detail: String::new(),
        }
    }
}

impl<S: StatusCode> SymptomEntry<S> {
    /// Select `requested`, or clear the status if it is already selected.
    pub fn toggle(&mut self, requested: S) {
        self.status = if self.status == Some(requested) {
            None
        } else {
            Some(requested)
        };
    }

    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = detail.into();
    }

    pub fn is_set(&self) -> bool {
        self.status.is_some()
    }

    /// `label(status)` or `label(status, detail)`; `None` while no status is set.
    pub fn render(&self, label: &str) -> Option<String> {
        let status = self.status?;
        if self.detail.is_empty() {
            Some(format!("{label}({status})"))
        } else {
            Some(format!("{label}({status}, {})", self.detail))
        }
    }
}
