use super::*;

fn filled() -> BroadcastState {
    BroadcastState {
        audience: "10A".to_owned(),
        title: "Exam Schedule Change".to_owned(),
        message: "Physics moves to Friday.".to_owned(),
        ..BroadcastState::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn submit_disabled_when_any_field_is_empty() {
    for clear in ["audience", "title", "message"] {
        let mut state = filled();
        match clear {
            "audience" => state.audience.clear(),
            "title" => state.title.clear(),
            _ => state.message.clear(),
        }
        assert!(!state.can_submit(), "{clear} empty");
    }
    assert!(filled().can_submit());
}

#[test]
fn whitespace_only_text_is_empty() {
    let mut state = filled();
    state.title = "   ".to_owned();
    assert!(!state.is_valid());
    let mut state = filled();
    state.message = "\n\t".to_owned();
    assert!(!state.is_valid());
}

#[test]
fn submit_disabled_while_sending() {
    let mut state = filled();
    assert!(state.begin_send().is_some());
    assert!(!state.can_submit());
    assert_eq!(state.begin_send(), None);
}

// =============================================================
// Send lifecycle
// =============================================================

#[test]
fn send_reports_success_then_resets() {
    let mut state = filled();
    state.status = Some(SendStatus::Failed);
    let seq = state.begin_send().unwrap();
    assert!(state.sending);
    assert_eq!(state.status, None);

    state.finish_send(true);
    assert!(!state.sending);
    assert_eq!(state.status.map(SendStatus::text), Some(SUCCESS_TEXT));

    state.reset_after(seq);
    assert_eq!(state.audience, "");
    assert_eq!(state.title, "");
    assert_eq!(state.message, "");
    assert_eq!(state.status, None);
}

#[test]
fn stale_reset_does_not_clear_newer_draft() {
    let mut state = filled();
    let first = state.begin_send().unwrap();
    state.finish_send(true);
    state.title = "Follow-up".to_owned();
    state.begin_send().unwrap();

    state.reset_after(first);
    assert_eq!(state.title, "Follow-up");
    assert!(state.sending);
}

#[test]
fn audiences_start_with_everyone() {
    assert_eq!(AUDIENCES[0], ("all", "All Students"));
    let values: Vec<_> = AUDIENCES.iter().map(|(v, _)| *v).collect();
    assert_eq!(values, ["all", "10A", "10B", "11A", "11C"]);
}

// =============================================================
// Preview
// =============================================================

#[test]
fn preview_placeholder_when_both_empty() {
    assert_eq!(Preview::of("", ""), Preview::Placeholder);
}

#[test]
fn preview_marks_missing_field() {
    assert_eq!(
        Preview::of("Holiday", ""),
        Preview::Draft { title: Some("Holiday".to_owned()), message: None }
    );
    assert_eq!(
        Preview::of("", "School closed"),
        Preview::Draft { title: None, message: Some("School closed".to_owned()) }
    );
}
