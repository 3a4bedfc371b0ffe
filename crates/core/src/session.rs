//! The drafting session: every piece of UI state, owned in one place.
//!
//! Any change to a field store is followed, synchronously, by the same chain: the condition's
//! fragment is reassembled, handed to the aggregator, and the recomputed combined note replaces
//! whatever the editor was showing.

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::editor::{CopyOutcome, NoteEditor};
use crate::forms::{AppetiteForm, FormFields, GrowthForm, RhinitisForm};
use crate::{ChartError, ChartResult, Condition, FieldEvent, NoteAggregator};
use serde::Serialize;

pub struct ChartSession<C = MemoryClipboard> {
    active: Condition,
    appetite: AppetiteForm,
    growth: GrowthForm,
    rhinitis: RhinitisForm,
    aggregator: NoteAggregator,
    editor: NoteEditor,
    clipboard: C,
}

/// Serializable view of the three field stores.
#[derive(Debug, Serialize)]
pub struct FormsSnapshot<'a> {
    pub active: Condition,
    pub appetite: &'a AppetiteForm,
    pub growth: &'a GrowthForm,
    pub rhinitis: &'a RhinitisForm,
}

impl Default for ChartSession<MemoryClipboard> {
    fn default() -> Self {
        Self::new(MemoryClipboard::new())
    }
}

impl<C: Clipboard> ChartSession<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            active: Condition::default(),
            appetite: AppetiteForm::default(),
            growth: GrowthForm::default(),
            rhinitis: RhinitisForm::default(),
            aggregator: NoteAggregator::new(),
            editor: NoteEditor::new(),
            clipboard,
        }
    }

    pub fn active(&self) -> Condition {
        self.active
    }

    /// Switch the active form.
    ///
    /// Opening a form re-reports its fragment, so a manual edit of the note is replaced here
    /// just as it is on a field change.
    pub fn select(&mut self, condition: Condition) {
        self.active = condition;
        self.refresh(condition);
    }

    pub fn appetite(&self) -> &AppetiteForm {
        &self.appetite
    }

    pub fn growth(&self) -> &GrowthForm {
        &self.growth
    }

    pub fn rhinitis(&self) -> &RhinitisForm {
        &self.rhinitis
    }

    pub fn update_appetite(&mut self, update: impl FnOnce(&mut AppetiteForm)) {
        update(&mut self.appetite);
        self.refresh(Condition::Appetite);
    }

    pub fn update_growth(&mut self, update: impl FnOnce(&mut GrowthForm)) {
        update(&mut self.growth);
        self.refresh(Condition::Growth);
    }

    pub fn update_rhinitis(&mut self, update: impl FnOnce(&mut RhinitisForm)) {
        update(&mut self.rhinitis);
        self.refresh(Condition::Rhinitis);
    }

    pub fn set_text(
        &mut self,
        condition: Condition,
        field: &str,
        value: impl Into<String>,
    ) -> ChartResult<()> {
        self.with_form(condition, |form| form.set_text(field, value.into()))
    }

    pub fn toggle_status(
        &mut self,
        condition: Condition,
        symptom: &str,
        status: &str,
    ) -> ChartResult<()> {
        self.with_form(condition, |form| form.toggle(symptom, status))
    }

    pub fn set_detail(
        &mut self,
        condition: Condition,
        symptom: &str,
        detail: impl Into<String>,
    ) -> ChartResult<()> {
        self.with_form(condition, |form| form.set_detail(symptom, detail.into()))
    }

    /// Apply one event.
    pub fn apply(&mut self, event: FieldEvent) -> ChartResult<()> {
        tracing::trace!(condition = ?event.condition(), "applying event");
        match event {
            FieldEvent::Select { condition } => self.select(condition),
            FieldEvent::SetText {
                condition,
                field,
                value,
            } => self.set_text(condition, &field, value)?,
            FieldEvent::Toggle {
                condition,
                symptom,
                status,
            } => self.toggle_status(condition, &symptom, &status)?,
            FieldEvent::SetDetail {
                condition,
                symptom,
                detail,
            } => self.set_detail(condition, &symptom, detail)?,
            FieldEvent::EditNote { text } => self.edit_note(text),
            FieldEvent::Reset => self.reset(),
        }
        Ok(())
    }

    /// The note as currently displayed, manual edits included.
    pub fn note(&self) -> &str {
        self.editor.text()
    }

    pub fn edit_note(&mut self, text: impl Into<String>) {
        self.editor.edit(text);
    }

    /// Latest fragment recorded for `condition`.
    pub fn fragment(&self, condition: Condition) -> &str {
        self.aggregator.fragment(condition)
    }

    /// Conditions in the order they first produced text.
    pub fn order(&self) -> &[Condition] {
        self.aggregator.order()
    }

    pub async fn copy(&mut self) -> CopyOutcome {
        self.editor.copy(&self.clipboard).await
    }

    pub fn is_copied(&self) -> bool {
        self.editor.is_copied()
    }

    pub fn copy_label(&self) -> &'static str {
        self.editor.copy_label()
    }

    /// Restore every form to its defaults and forget the note order.
    pub fn reset(&mut self) {
        self.appetite = AppetiteForm::default();
        self.growth = GrowthForm::default();
        self.rhinitis = RhinitisForm::default();
        self.aggregator.reset();
        self.editor.sync(self.aggregator.combined());
        tracing::info!("all charts reset");
    }

    pub fn snapshot(&self) -> FormsSnapshot<'_> {
        FormsSnapshot {
            active: self.active,
            appetite: &self.appetite,
            growth: &self.growth,
            rhinitis: &self.rhinitis,
        }
    }

    /// YAML dump of the three field stores.
    pub fn snapshot_yaml(&self) -> ChartResult<String> {
        serde_yaml::to_string(&self.snapshot()).map_err(ChartError::YamlSerialization)
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn form_mut(&mut self, condition: Condition) -> &mut dyn FormFields {
        match condition {
            Condition::Appetite => &mut self.appetite,
            Condition::Growth => &mut self.growth,
            Condition::Rhinitis => &mut self.rhinitis,
        }
    }

    fn form(&self, condition: Condition) -> &dyn FormFields {
        match condition {
            Condition::Appetite => &self.appetite,
            Condition::Growth => &self.growth,
            Condition::Rhinitis => &self.rhinitis,
        }
    }

    fn with_form(
        &mut self,
        condition: Condition,
        update: impl FnOnce(&mut dyn FormFields) -> ChartResult<()>,
    ) -> ChartResult<()> {
        if let Err(e) = update(self.form_mut(condition)) {
            tracing::warn!(%condition, error = %e, "rejected field update");
            return Err(e);
        }
        self.refresh(condition);
        Ok(())
    }

    fn refresh(&mut self, condition: Condition) {
        let fragment = self.form(condition).assemble();
        self.aggregator.record(condition, fragment);
        self.editor.sync(self.aggregator.combined());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChartSession {
        ChartSession::default()
    }

    #[test]
    fn starts_on_appetite_with_empty_note() {
        let session = session();
        assert_eq!(session.active(), Condition::Appetite);
        assert_eq!(session.note(), "");
        assert!(session.order().is_empty());
    }

    #[test]
    fn field_change_updates_note() {
        let mut session = session();
        session
            .set_text(Condition::Appetite, "mealAmount", "절반")
            .expect("set");
        assert_eq!(session.note(), "#식욕부진\n-식사량 : 절반");
        assert_eq!(session.order(), &[Condition::Appetite]);
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let mut session = session();
        session.edit_note("manual");

        let err = session
            .toggle_status(Condition::Growth, "menarche", "++")
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidStatus { .. }));
        assert_eq!(session.note(), "manual");
        assert_eq!(session.growth(), &GrowthForm::default());
    }

    #[test]
    fn typed_updates_trigger_recompute() {
        let mut session = session();
        session.update_rhinitis(|form| {
            form.nasal_congestion.toggle(pedichart_types::Severity::Severe);
        });
        assert_eq!(session.note(), "#비염\n-증상 : 코막힘(++)");
    }

    #[test]
    fn select_replaces_manual_edit() {
        let mut session = session();
        session
            .set_text(Condition::Growth, "growthHistory", "없음")
            .expect("set");
        session.edit_note("manual");

        session.select(Condition::Rhinitis);
        assert_eq!(session.active(), Condition::Rhinitis);
        assert_eq!(session.note(), "#성장\n-성장 관련 진료 : 없음");
    }

    #[test]
    fn snapshot_yaml_lists_all_forms() {
        let mut session = session();
        session
            .set_detail(Condition::Appetite, "nausea", "아침")
            .expect("detail");
        let yaml = session.snapshot_yaml().expect("yaml");
        assert!(yaml.contains("appetite:"));
        assert!(yaml.contains("growth:"));
        assert!(yaml.contains("rhinitis:"));
        assert!(yaml.contains("아침"));
    }
}
