//! Integration tests for editor crate

use headline_editor::{
    AnimationEvent, AnimationPhase, Clock, Command, EditSession, EditorConfig, ExportSnapshot,
    ManualClock, StyleProperty, WordFlag,
};
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use std::time::Duration;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

fn session() -> (EditSession, ManualClock) {
    init_tracing();
    let clock = ManualClock::new();
    let session = EditSession::with_config(EditorConfig::default(), Arc::new(clock.clone()));
    (session, clock)
}

#[test]
fn test_default_headline_end_to_end() {
    let (session, _) = session();

    let style = serde_json::to_value(session.headline_style()).unwrap();
    assert_eq!(
        style["backgroundImage"],
        "linear-gradient(to right, #667eea, #764ba2)"
    );
    assert_eq!(style["fontSize"], "48px");

    let exported: Value = serde_json::from_str(&session.export_json().unwrap()).unwrap();
    assert_eq!(exported["settings"]["text"], "Create Stunning Headlines");
    assert_eq!(exported["version"], "1.0");
    assert!(exported["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_embed_reflects_edits() {
    let (mut session, _) = session();
    session.update("gradient.enabled", false).unwrap();
    session.update("fontFamily", "Georgia, serif").unwrap();
    session.toggle_word_flag(0, WordFlag::Background).unwrap();

    assert_eq!(
        session.embed_code(),
        "<div style=\"font-size: 48px; font-family: Georgia, serif; font-weight: 700; \">Create Stunning Headlines</div>"
    );
}

#[test]
fn test_word_override_precedence() {
    let (mut session, _) = session();
    session.toggle_word_flag(1, WordFlag::Highlight).unwrap();
    session.toggle_word_flag(1, WordFlag::Background).unwrap();
    session.toggle_word_flag(1, WordFlag::Underline).unwrap();
    session.set_word_color(2, "#ff0000").unwrap();

    let words = session.word_renders();

    assert!(words[0].style.is_empty());
    assert_eq!(words[1].style.get(StyleProperty::BackgroundColor), Some("#000000"));
    assert_eq!(words[1].style.get(StyleProperty::TextDecoration), Some("underline"));
    assert_eq!(
        words[2].style.get(StyleProperty::BackgroundImage),
        Some("linear-gradient(to right, #ff0000, #ff0000)")
    );

    session.update("gradient.enabled", false).unwrap();
    let words = session.word_renders();
    assert_eq!(words[0].style.get(StyleProperty::Color), Some("inherit"));
    assert_eq!(words[2].style.get(StyleProperty::Color), Some("#ff0000"));
}

#[test]
fn test_word_overrides_keep_their_index_when_text_changes() {
    let (mut session, _) = session();
    session.toggle_word_flag(2, WordFlag::Highlight).unwrap();

    session.commit_text("Just two").unwrap();
    assert_eq!(session.word_renders().len(), 2);
    assert!(session.settings().word_style(2).unwrap().highlight);

    session.commit_text("Now there are four").unwrap();
    let words = session.word_renders();
    assert_eq!(words[2].text, "are");
    assert!(words[2].style.contains(StyleProperty::BackgroundColor));
}

#[test]
fn test_replay_token_increases_on_every_toggle() {
    let (mut session, clock) = session();
    let mut last = session.replay_token();

    for _ in 0..3 {
        for on in [true, false, true] {
            clock.advance(Duration::from_millis(100));
            let outcome = session.update("effects.letterAnimation", on).unwrap();

            assert!(outcome.animation.is_some());
            assert!(session.replay_token() > last);
            last = session.replay_token();

            let active = matches!(session.animation_phase(), AnimationPhase::Active { .. });
            assert_eq!(active, on);
        }

        // Let the last reveal run out so the next round starts from off
        clock.advance(Duration::from_secs(2));
        assert!(matches!(session.tick(), Some(AnimationEvent::Reverted { .. })));
        assert!(session.replay_token() > last);
        last = session.replay_token();
        assert_eq!(session.animation_phase(), AnimationPhase::Idle);
    }
}

#[test]
fn test_other_commands_never_lower_the_token() {
    let (mut session, clock) = session();
    session.toggle_letter_animation().unwrap();
    let armed = session.replay_token();

    for command in [
        Command::RefreshAnimation,
        Command::Tick,
        Command::SelectWord { index: 0 },
        Command::AddGradientColor,
    ] {
        clock.advance(Duration::from_millis(100));
        session.dispatch(command).unwrap();
        assert_eq!(session.replay_token(), armed);
    }
}

#[test]
fn test_stale_timer_does_not_revert_new_run() {
    let (mut session, clock) = session();

    session.toggle_letter_animation().unwrap();
    clock.set(Duration::from_millis(1000));
    session.toggle_letter_animation().unwrap();
    session.toggle_letter_animation().unwrap();

    // The first run would have expired here
    clock.set(Duration::from_millis(1800));
    assert_eq!(session.tick(), None);
    assert!(session.settings().effects.letter_animation);

    clock.set(Duration::from_millis(2750));
    assert_eq!(session.tick(), Some(AnimationEvent::Reverted { token: 4 }));
    assert!(!session.settings().effects.letter_animation);
}

#[test]
fn test_selection_gates_text_edits() {
    let (mut session, _) = session();

    session.select_word(0);
    assert!(!session.preview_frame().content_editable);
    assert!(!session.commit_text("Blocked").unwrap());

    // Selecting the same word again deselects it
    session.select_word(0);
    assert!(session.is_editable());

    session.select_word(1);
    session.select_word(2);
    assert_eq!(session.selected_word(), Some(2));
    assert!(session.word_renders()[2].selected);

    session.clear_selection();
    assert!(session.commit_text("Allowed").unwrap());
    assert_eq!(session.settings().text, "Allowed");
}

#[test]
fn test_export_import_round_trip() {
    let (mut session, _) = session();
    session.update("gradient.direction", "down").unwrap();
    session.update("effects.sparkle", true).unwrap();
    session.set_word_color(0, "#123456").unwrap();
    let json = session.export_json().unwrap();

    let (mut other, _) = crate::session();
    other.import_json(&json).unwrap();

    assert_eq!(other.settings(), session.settings());
    assert_eq!(ExportSnapshot::from_json(&json).unwrap().settings, *session.settings());
}

#[test]
fn test_invalid_command_leaves_session_untouched() {
    let (mut session, _) = session();

    let result = session.dispatch(Command::Update {
        path: "fontSize".into(),
        value: json!("big").into(),
    });

    assert!(result.is_err());
    assert_eq!(session.version(), 0);
}

#[test]
fn test_letter_schedule_follows_text() {
    let (mut session, clock) = session();
    session.commit_text("Hi all").unwrap();

    let schedule = session.letter_schedule();
    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule[4].delay_ms, 120);

    session.toggle_letter_animation().unwrap();
    assert_eq!(
        session.pending_deadline(),
        Some(clock.now() + Duration::from_millis(1180))
    );
}
