use pedichart_core::events::parse_script;
use pedichart_core::{
    AppetiteForm, ChartSession, Clipboard, ClipboardError, Condition, CopyOutcome, GrowthForm,
    MemoryClipboard, RhinitisForm,
};
use std::time::Duration;

fn populated() -> ChartSession {
    let mut session: ChartSession = ChartSession::default();
    session
        .set_text(Condition::Growth, "growthLastYearNum", "5")
        .expect("growth");
    session
        .set_text(Condition::Appetite, "mealAmount", "절반")
        .expect("appetite");
    session
        .toggle_status(Condition::Rhinitis, "nasalCongestion", "++")
        .expect("rhinitis");
    session
}

#[test]
fn combined_note_follows_first_touched_order() {
    let session = populated();

    assert_eq!(
        session.order(),
        &[Condition::Growth, Condition::Appetite, Condition::Rhinitis]
    );
    assert_eq!(
        session.note(),
        "#성장\n-최근 1년 키 성장 : 5cm/yr\n\n#식욕부진\n-식사량 : 절반\n\n#비염\n-증상 : 코막힘(++)"
    );
}

#[test]
fn emptied_condition_keeps_its_slot() {
    let mut session = populated();

    session
        .set_text(Condition::Growth, "growthLastYearNum", "")
        .expect("clear growth");
    assert_eq!(
        session.note(),
        "#식욕부진\n-식사량 : 절반\n\n#비염\n-증상 : 코막힘(++)"
    );

    session
        .set_text(Condition::Growth, "growthHistory", "성장클리닉")
        .expect("refill growth");
    assert_eq!(
        session.note(),
        "#성장\n-성장 관련 진료 : 성장클리닉\n\n#식욕부진\n-식사량 : 절반\n\n#비염\n-증상 : 코막힘(++)"
    );
}

#[test]
fn combined_note_is_join_of_fragments() {
    let session = populated();
    let expected = session
        .order()
        .iter()
        .map(|c| session.fragment(*c))
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(session.note(), expected);
}

#[test]
fn reset_restores_defaults() {
    let mut session = populated();
    session.reset();

    assert_eq!(session.appetite(), &AppetiteForm::default());
    assert_eq!(session.growth(), &GrowthForm::default());
    assert_eq!(session.rhinitis(), &RhinitisForm::default());
    assert_eq!(session.note(), "");
    assert!(session.order().is_empty());

    // Ordering starts over after a reset.
    session
        .set_text(Condition::Rhinitis, "findings", "pale turbinate")
        .expect("rhinitis");
    session
        .set_text(Condition::Growth, "other", "메모")
        .expect("growth");
    assert_eq!(session.order(), &[Condition::Rhinitis, Condition::Growth]);
}

#[test]
fn manual_edit_lasts_until_next_field_change() {
    let mut session = populated();
    session.edit_note("직접 고친 차팅");
    assert_eq!(session.note(), "직접 고친 차팅");

    session
        .toggle_status(Condition::Appetite, "nausea", "+")
        .expect("toggle");
    assert!(session.note().starts_with("#성장"));
    assert!(session.note().contains("-동반 증상 : 오심(+)"));
}

#[test]
fn appetite_scenario() {
    let mut session: ChartSession = ChartSession::default();
    session
        .set_text(Condition::Appetite, "mealAmount", "절반")
        .expect("set");
    session
        .toggle_status(Condition::Appetite, "abdominalPain", "+")
        .expect("toggle");
    session
        .set_detail(Condition::Appetite, "abdominalPain", "식후")
        .expect("detail");

    assert_eq!(
        session.fragment(Condition::Appetite),
        "#식욕부진\n-식사량 : 절반\n-동반 증상 : 복통(+, 식후)"
    );
}

#[test]
fn replayed_script_matches_direct_calls() {
    let script = r#"
- action: select
  condition: growth
- action: set_text
  condition: growth
  field: motherGrowthPattern
  value: 초6때 초경
- action: select
  condition: appetite
- action: toggle
  condition: appetite
  symptom: pickyEating
  status: "+"
- action: toggle
  condition: appetite
  symptom: pickyEating
  status: "+"
- action: set_text
  condition: appetite
  field: hungerComplaint
  value: 있음
"#;
    let mut session: ChartSession = ChartSession::default();
    for event in parse_script(script).expect("parse") {
        session.apply(event).expect("apply");
    }

    assert_eq!(session.active(), Condition::Appetite);
    assert!(!session.appetite().picky_eating.is_set());
    assert_eq!(
        session.note(),
        "#성장\n-부모 성장 패턴 : 모(초6때 초경)\n\n#식욕부진\n-배고픔 호소 : 있음"
    );
}

struct OfflineClipboard;

impl Clipboard for OfflineClipboard {
    async fn write(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[tokio::test(start_paused = true)]
async fn copy_acknowledgment_is_transient() {
    let mut session = populated();
    assert_eq!(session.copy_label(), "복사");

    assert_eq!(session.copy().await, CopyOutcome::Copied);
    assert_eq!(session.clipboard().contents().as_deref(), Some(session.note()));
    assert_eq!(session.copy_label(), "복사됨!");

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(!session.is_copied());
}

#[tokio::test]
async fn copy_of_empty_note_is_noop() {
    let mut session = ChartSession::new(MemoryClipboard::new());
    assert_eq!(session.copy().await, CopyOutcome::Skipped);
    assert_eq!(session.clipboard().contents(), None);
}

#[tokio::test]
async fn copy_failure_leaves_state_alone() {
    let mut session = ChartSession::new(OfflineClipboard);
    session
        .set_text(Condition::Rhinitis, "onsetAndAggravatingFactors", "봄철 악화")
        .expect("set");

    assert_eq!(session.copy().await, CopyOutcome::Failed);
    assert!(!session.is_copied());
    assert_eq!(session.note(), "#비염\n-o/s, agg : 봄철 악화");
}
