//! Combines per-condition fragments into one note.

use crate::constants::FRAGMENT_SEPARATOR;
use crate::Condition;
use std::collections::HashMap;

/// Latest fragment per condition, plus the order conditions first produced text.
///
/// A condition enters the order the first time its fragment is non-empty and keeps that
/// position until [`NoteAggregator::reset`], even if its fragment empties out again.
#[derive(Debug, Clone, Default)]
pub struct NoteAggregator {
    fragments: HashMap<Condition, String>,
    order: Vec<Condition>,
}

impl NoteAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `fragment` as the latest text for `condition`.
    pub fn record(&mut self, condition: Condition, fragment: String) {
        if !fragment.is_empty() && !self.order.contains(&condition) {
            tracing::debug!(%condition, position = self.order.len(), "condition entered note order");
            self.order.push(condition);
        }
        self.fragments.insert(condition, fragment);
    }

    /// The latest fragment recorded for `condition`, empty if none.
    pub fn fragment(&self, condition: Condition) -> &str {
        self.fragments.get(&condition).map(String::as_str).unwrap_or("")
    }

    /// Conditions in first-touched order.
    pub fn order(&self) -> &[Condition] {
        &self.order
    }

    /// Non-empty fragments in first-touched order, separated by a blank line.
    pub fn combined(&self) -> String {
        self.order
            .iter()
            .map(|c| self.fragment(*c))
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR)
    }

    /// Drop every fragment and forget the order.
    pub fn reset(&mut self) {
        self.fragments.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_does_not_enter_order() {
        let mut agg = NoteAggregator::new();
        agg.record(Condition::Rhinitis, String::new());
        assert!(agg.order().is_empty());
        assert_eq!(agg.combined(), "");
    }

    #[test]
    fn first_touched_order_wins() {
        let mut agg = NoteAggregator::new();
        agg.record(Condition::Growth, "#성장\n-성장 관련 진료 : 있음".into());
        agg.record(Condition::Appetite, "#식욕부진\n-식사량 : 절반".into());

        assert_eq!(agg.order(), &[Condition::Growth, Condition::Appetite]);
        assert_eq!(
            agg.combined(),
            "#성장\n-성장 관련 진료 : 있음\n\n#식욕부진\n-식사량 : 절반"
        );
    }

    #[test]
    fn position_survives_emptying() {
        let mut agg = NoteAggregator::new();
        agg.record(Condition::Appetite, "#식욕부진\n-식사량 : 절반".into());
        agg.record(Condition::Rhinitis, "#비염\n-증상 : 콧물(+)".into());

        agg.record(Condition::Appetite, String::new());
        assert_eq!(agg.combined(), "#비염\n-증상 : 콧물(+)");

        agg.record(Condition::Appetite, "#식욕부진\n-식사량 : 조금".into());
        assert_eq!(agg.order(), &[Condition::Appetite, Condition::Rhinitis]);
        assert_eq!(
            agg.combined(),
            "#식욕부진\n-식사량 : 조금\n\n#비염\n-증상 : 콧물(+)"
        );
    }

    #[test]
    fn condition_is_ordered_once() {
        let mut agg = NoteAggregator::new();
        agg.record(Condition::Growth, "#성장\n+ a".into());
        agg.record(Condition::Growth, "#성장\n+ b".into());
        assert_eq!(agg.order(), &[Condition::Growth]);
        assert_eq!(agg.fragment(Condition::Growth), "#성장\n+ b");
    }

    #[test]
    fn reset_clears_fragments_and_order() {
        let mut agg = NoteAggregator::new();
        agg.record(Condition::Growth, "#성장\n+ a".into());
        agg.reset();
        assert!(agg.order().is_empty());
        assert_eq!(agg.fragment(Condition::Growth), "");
        assert_eq!(agg.combined(), "");
    }
}
