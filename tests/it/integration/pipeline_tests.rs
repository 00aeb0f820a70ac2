//! Frame-level pipeline tests: classification, mapping, and the state
//! machine wired together, observed through the recording emitter.

use crate::helpers::{
    malformed_frame, test_settings, tracking_frame, EmitterCall, FrameScript, RecordingEmitter,
    ScriptedProvider, FRAME, SCREEN,
};
use airmouse::types::MouseButton;
use airmouse::{Pipeline, Settings};

fn pipeline_with(
    script: FrameScript,
    settings: Settings,
) -> Pipeline<ScriptedProvider, RecordingEmitter> {
    Pipeline::new(
        script.into_provider(),
        RecordingEmitter::new(),
        settings,
        FRAME,
        SCREEN,
    )
    .unwrap()
}

fn run_script(script: FrameScript, settings: Settings) -> Pipeline<ScriptedProvider, RecordingEmitter> {
    let frames = script.len();
    let mut pipeline = pipeline_with(script, settings);
    for _ in 0..frames {
        pipeline.step().unwrap();
    }
    pipeline
}

#[test]
fn cursor_move_precedes_the_click() {
    let script = FrameScript::new().pinch(1).tracking(1);
    let pipeline = run_script(script, test_settings());

    let calls = &pipeline.emitter().calls;
    // One move per frame, then the retrospective click on the release frame.
    assert!(matches!(calls[0], EmitterCall::Move { .. }));
    assert!(matches!(calls[1], EmitterCall::Move { .. }));
    assert_eq!(calls[2], EmitterCall::Click(MouseButton::Left));
    assert_eq!(calls.len(), 3);
}

#[test]
fn drag_workflow_presses_and_releases_once() {
    // Four pinch frames cross the three-frame activation, then a release.
    let script = FrameScript::new().pinch(4).tracking(1);
    let pipeline = run_script(script, test_settings());

    let emitter = pipeline.emitter();
    assert_eq!(
        emitter.discrete_calls(),
        vec![EmitterCall::MouseDown, EmitterCall::MouseUp]
    );
    assert!(!pipeline.interpreter().is_dragging());
}

#[test]
fn right_pinch_clicks_the_right_button() {
    let script = FrameScript::new().right_pinch(1);
    let pipeline = run_script(script, test_settings());
    assert_eq!(
        pipeline.emitter().discrete_calls(),
        vec![EmitterCall::Click(MouseButton::Right)]
    );
}

#[test]
fn spread_motion_scrolls() {
    let script = FrameScript::new().spread_at(0.9).spread_at(0.8);
    let pipeline = run_script(script, test_settings());

    // 0.1 of upward motion at sensitivity 40 is four ticks up.
    assert_eq!(
        pipeline.emitter().discrete_calls(),
        vec![EmitterCall::Scroll { ticks: 4 }]
    );
}

#[test]
fn hand_loss_freezes_the_cursor() {
    let script = FrameScript::new().tracking(1).lost(2);
    let pipeline = run_script(script, test_settings());

    // No-hand frames forward no cursor move.
    let moves = pipeline
        .emitter()
        .calls
        .iter()
        .filter(|c| matches!(c, EmitterCall::Move { .. }))
        .count();
    assert_eq!(moves, 1);
}

#[test]
fn malformed_landmarks_degrade_to_a_no_hand_frame() {
    // The malformed frame lands mid-drag; the drag must end cleanly.
    let script = FrameScript::new().pinch(3).frame(Some(malformed_frame()));
    let pipeline = run_script(script, test_settings());

    assert_eq!(
        pipeline.emitter().discrete_calls(),
        vec![EmitterCall::MouseDown, EmitterCall::MouseUp]
    );
    assert!(!pipeline.interpreter().is_dragging());
}

#[test]
fn frame_skip_consumes_frames_without_processing_them() {
    let settings = Settings {
        frame_skip: 2,
        ..test_settings()
    };
    let script = FrameScript::new().tracking(4);
    let pipeline = run_script(script, settings);

    assert_eq!(pipeline.captured_frames(), 4);
    assert_eq!(pipeline.processed_frames(), 2);
    // Only processed frames reach the mapper.
    let moves = pipeline
        .emitter()
        .calls
        .iter()
        .filter(|c| matches!(c, EmitterCall::Move { .. }))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn process_frame_reports_its_outcome() {
    let mut pipeline = pipeline_with(FrameScript::new(), test_settings());

    let outcome = pipeline.process_frame(Some(tracking_frame(0.5, 0.5)));
    assert!(outcome.cursor.is_some());
    assert!(outcome.events.is_empty());

    let outcome = pipeline.process_frame(None);
    assert!(outcome.cursor.is_none());
}

#[test]
fn reset_releases_an_active_drag() {
    let script = FrameScript::new().pinch(3);
    let mut pipeline = run_script(script, test_settings());
    assert!(pipeline.interpreter().is_dragging());

    pipeline.reset();
    assert!(!pipeline.interpreter().is_dragging());
    assert_eq!(
        pipeline.emitter().calls.last(),
        Some(&EmitterCall::MouseUp)
    );
}

#[test]
fn reset_restarts_smoothing_from_scratch() {
    let settings = Settings {
        smoothing_factor: 0.15,
        ..test_settings()
    };
    let mut pipeline = pipeline_with(FrameScript::new(), settings.clone());
    pipeline.process_frame(Some(tracking_frame(0.9, 0.9)));
    pipeline.reset();

    // The first frame after a reset bypasses smoothing entirely, so a
    // fresh pipeline given the same frame agrees exactly.
    let outcome = pipeline.process_frame(Some(tracking_frame(0.2, 0.2)));
    let mut fresh = pipeline_with(FrameScript::new(), settings);
    let expected = fresh.process_frame(Some(tracking_frame(0.2, 0.2)));
    assert_eq!(outcome.cursor, expected.cursor);
}

#[test]
fn scroll_is_mirrored_by_the_cursor_but_not_the_ticks() {
    // Scroll direction depends on raw fingertip y, unaffected by the
    // horizontal mirror in the mapper.
    let script = FrameScript::new().spread_at(0.2).spread_at(0.4);
    let pipeline = run_script(script, test_settings());
    assert_eq!(
        pipeline.emitter().discrete_calls(),
        vec![EmitterCall::Scroll { ticks: -8 }]
    );
}
