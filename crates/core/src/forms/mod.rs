//! Field stores and note assemblers, one per condition.
//!
//! Every form follows the same shape: a flat record of free-text fields and symptom entries,
//! name-based setters for surfaces that bind controls by name, and an `assemble` function that
//! renders the record into a note fragment.

pub mod appetite;
pub mod growth;
pub mod rhinitis;

pub use appetite::{AppetiteForm, AppetiteSymptom, HungerLevel};
pub use growth::{GrowthForm, PubertySign};
pub use rhinitis::{AccompanyingSymptom, MainSymptom, RhinitisForm};

use crate::{ChartError, ChartResult, Condition};
use pedichart_types::{NonEmptyText, StatusCode, SymptomEntry};
use serde::Serialize;
use std::fmt;

/// Name-based access to one condition's field store.
///
/// Setters reject unknown names and invalid codes without touching the store.
pub trait FormFields {
    fn condition(&self) -> Condition;

    /// Shallow-merge one free-text (or single-choice) field.
    fn set_text(&mut self, field: &str, value: String) -> ChartResult<()>;

    /// Toggle a symptom's status code; selecting the current code clears it.
    fn toggle(&mut self, symptom: &str, status: &str) -> ChartResult<()>;

    /// Set the detail text paired with a symptom.
    fn set_detail(&mut self, symptom: &str, detail: String) -> ChartResult<()>;

    /// Render the note fragment; empty when nothing has been entered.
    fn assemble(&self) -> String;
}

/// A condition's field store together with its static description.
pub trait ChartForm: FormFields + Default + Clone + Serialize {
    const CONDITION: Condition;

    fn catalog() -> FormCatalog;
}

/// The key and note label of one symptom, in the order the note lists them.
pub trait SymptomKey: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

/// Description of a form's fields for surfaces to list.
#[derive(Debug, Clone, Serialize)]
pub struct FormCatalog {
    pub condition: Condition,
    pub header: &'static str,
    pub text_fields: Vec<FieldSpec>,
    pub symptom_groups: Vec<SymptomGroupSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SymptomGroupSpec {
    pub title: &'static str,
    pub codes: Vec<&'static str>,
    pub symptoms: Vec<FieldSpec>,
}

impl SymptomGroupSpec {
    pub(crate) fn of<K: SymptomKey, S: StatusCode>(title: &'static str) -> Self {
        Self {
            title,
            codes: S::ALL.iter().map(|c| c.symbol()).collect(),
            symptoms: K::ALL
                .iter()
                .map(|s| FieldSpec {
                    name: s.key(),
                    label: s.label(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for FormCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.condition.label(), self.condition.key())?;
        for field in &self.text_fields {
            writeln!(f, "  {:<28} {}", field.name, field.label)?;
        }
        for group in &self.symptom_groups {
            writeln!(f, "  [{}] {}", group.codes.join(" "), group.title)?;
            for symptom in &group.symptoms {
                writeln!(f, "    {:<26} {}", symptom.name, symptom.label)?;
            }
        }
        Ok(())
    }
}

/// Catalog for any condition.
pub fn catalog(condition: Condition) -> FormCatalog {
    match condition {
        Condition::Appetite => AppetiteForm::catalog(),
        Condition::Growth => GrowthForm::catalog(),
        Condition::Rhinitis => RhinitisForm::catalog(),
    }
}

/// Accumulates one fragment, line by line, under a condition header.
pub(crate) struct NoteBuilder {
    header: &'static str,
    chart: String,
}

impl NoteBuilder {
    pub(crate) fn new(condition: Condition) -> Self {
        let header = condition.header();
        Self {
            header,
            chart: format!("{header}\n"),
        }
    }

    /// `-<label> : <value>`, skipped when `value` is empty.
    pub(crate) fn line(&mut self, label: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.chart.push_str(&format!("-{label} : {value}\n"));
    }

    /// One labeled line of every set symptom, space separated.
    pub(crate) fn symptoms(&mut self, label: &str, rendered: Vec<String>) {
        self.line(label, &rendered.join(" "));
    }

    /// `+ <other>` with the text trimmed, and no trailing newline.
    pub(crate) fn other(&mut self, other: &str) {
        if let Some(other) = NonEmptyText::optional(other) {
            self.chart.push_str(&format!("+ {other}"));
        }
    }

    pub(crate) fn finish(self) -> String {
        let chart = self.chart.trim();
        if chart == self.header {
            String::new()
        } else {
            chart.to_owned()
        }
    }
}

/// Join the non-empty parts with `sep`.
pub(crate) fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Render every set symptom of a group, in catalog order.
pub(crate) fn render_group<'a, K, S, F>(entry: F) -> Vec<String>
where
    K: SymptomKey,
    S: StatusCode,
    F: Fn(K) -> &'a SymptomEntry<S>,
{
    K::ALL
        .iter()
        .filter_map(|&key| entry(key).render(key.label()))
        .collect()
}

pub(crate) fn parse_status<S: StatusCode>(symptom: &str, status: &str) -> ChartResult<S> {
    S::from_symbol(status).map_err(|source| ChartError::InvalidStatus {
        symptom: symptom.to_owned(),
        status: status.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_fragment_is_empty() {
        let mut builder = NoteBuilder::new(Condition::Growth);
        builder.line("성장 관련 진료", "");
        builder.symptoms("2차 성징", vec![]);
        builder.other("   ");
        assert_eq!(builder.finish(), "");
    }

    #[test]
    fn trailing_newline_is_trimmed() {
        let mut builder = NoteBuilder::new(Condition::Rhinitis);
        builder.line("o/s, agg", "1년 전부터");
        assert_eq!(builder.finish(), "#비염\n-o/s, agg : 1년 전부터");
    }

    #[test]
    fn join_present_skips_empty_parts() {
        assert_eq!(join_present(&["", "b"], ", "), "b");
        assert_eq!(join_present(&["a", "b"], ", "), "a, b");
        assert_eq!(join_present(&["", ""], ", "), "");
    }

    #[test]
    fn every_condition_has_a_catalog() {
        for condition in Condition::ALL {
            let catalog = catalog(condition);
            assert_eq!(catalog.condition, condition);
            assert!(catalog.text_fields.iter().any(|f| f.name == "other"));
            assert!(!catalog.symptom_groups.is_empty());
        }
    }

    #[test]
    fn catalog_listing_names_fields_and_codes() {
        let listing = catalog(Condition::Rhinitis).to_string();
        assert!(listing.starts_with("비염 (rhinitis)\n"));
        assert!(listing.contains("[++ + -]"));
        assert!(listing.contains("nasalCongestion"));
        assert!(listing.contains("findings"));
    }
}
