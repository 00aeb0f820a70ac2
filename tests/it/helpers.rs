//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - Synthetic landmark frames with controlled fingertip distances
//! - `FrameScript` - builder for per-frame gesture sequences
//! - `ScriptedProvider` / `RecordingEmitter` - collaborator test doubles
//! - Common settings fixtures

use airmouse::pipeline::{ActionEmitter, LandmarkProvider};
use airmouse::settings::Settings;
use airmouse::types::{FrameSize, Landmark, LandmarkIndex, LandmarkSet, MouseButton};
use std::collections::VecDeque;

/// Camera frame size used across tests.
pub const FRAME: FrameSize = FrameSize { width: 640, height: 480 };

/// Screen size used across tests.
pub const SCREEN: FrameSize = FrameSize { width: 1920, height: 1080 };

// ============================================================================
// Settings fixtures
// ============================================================================

/// Settings tuned for deterministic state machine tests: smoothing off,
/// no dead-zone, scroll cooldown off, documented thresholds.
pub fn test_settings() -> Settings {
    Settings {
        left_pinch_threshold: 0.07,
        right_pinch_threshold: 0.07,
        spread_threshold: 0.10,
        click_cooldown_frames: 8,
        scroll_cooldown_frames: 0,
        drag_activation_frames: 3,
        frame_reduction: 0.0,
        smoothing_factor: 1.0,
        cursor_speed: 1.0,
        scroll_sensitivity: 40.0,
        min_scroll_motion: 0.01,
        frame_skip: 1,
    }
}

// ============================================================================
// Synthetic landmark frames
// ============================================================================

/// A plausible neutral hand: 21 distinct points, wrist low, fingertips
/// spread above. Tests override the three relevant tips.
pub fn base_hand() -> Vec<Landmark> {
    (0..21)
        .map(|i| Landmark::new(0.40 + 0.01 * i as f32, 0.75 - 0.015 * i as f32, 0.01 * (i % 5) as f32))
        .collect()
}

fn hand_with_tips(thumb: Landmark, index: Landmark, middle: Landmark) -> LandmarkSet {
    let mut points = base_hand();
    points[LandmarkIndex::ThumbTip as usize] = thumb;
    points[LandmarkIndex::IndexTip as usize] = index;
    points[LandmarkIndex::MiddleTip as usize] = middle;
    LandmarkSet::new(points)
}

/// Left pinch: thumb and index tips `d` apart, middle tip well away.
pub fn left_pinch_frame(d: f32) -> LandmarkSet {
    hand_with_tips(
        Landmark::new(0.50, 0.50, 0.0),
        Landmark::new(0.50 + d, 0.50, 0.0),
        Landmark::new(0.50, 0.70, 0.0),
    )
}

/// Right pinch: thumb and middle tips `d` apart; index placement does not
/// matter because the right check runs first.
pub fn right_pinch_frame(d: f32) -> LandmarkSet {
    hand_with_tips(
        Landmark::new(0.50, 0.50, 0.0),
        Landmark::new(0.60, 0.50, 0.0),
        Landmark::new(0.50 + d, 0.50, 0.0),
    )
}

/// Spread: index and middle tips far apart, both pinches open, with the
/// index tip at the given normalized height (drives scroll).
pub fn spread_frame(index_y: f32) -> LandmarkSet {
    hand_with_tips(
        Landmark::new(0.50, 0.50, 0.0),
        Landmark::new(0.58, index_y, 0.0),
        Landmark::new(0.42, index_y, 0.0),
    )
}

/// Plain tracking: hand present, no gesture, index tip at the given
/// normalized position. The thumb sits far from both tips so neither pinch
/// fires, and the index-middle gap stays under the spread threshold.
pub fn tracking_frame(index_x: f32, index_y: f32) -> LandmarkSet {
    hand_with_tips(
        Landmark::new(index_x - 0.25, index_y + 0.25, 0.0),
        Landmark::new(index_x, index_y, 0.0),
        Landmark::new(index_x, index_y + 0.05, 0.0),
    )
}

/// A malformed observation with the wrong point count.
pub fn malformed_frame() -> LandmarkSet {
    LandmarkSet::new(base_hand().into_iter().take(20).collect())
}

// ============================================================================
// FrameScript - per-frame sequences for the pipeline
// ============================================================================

/// Builder for a scripted sequence of provider frames.
///
/// # Example
/// ```ignore
/// let script = FrameScript::new()
///     .pinch(2)
///     .lost(1)
///     .tracking(3);
/// let provider = script.into_provider();
/// ```
#[derive(Default)]
pub struct FrameScript {
    frames: Vec<Option<LandmarkSet>>,
}

impl FrameScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `n` left-pinch frames (distance 0.02).
    pub fn pinch(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.frames.push(Some(left_pinch_frame(0.02)));
        }
        self
    }

    /// Append `n` right-pinch frames (distance 0.02).
    pub fn right_pinch(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.frames.push(Some(right_pinch_frame(0.02)));
        }
        self
    }

    /// Append one spread frame with the index tip at `y`.
    pub fn spread_at(mut self, y: f32) -> Self {
        self.frames.push(Some(spread_frame(y)));
        self
    }

    /// Append `n` no-hand frames.
    pub fn lost(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.frames.push(None);
        }
        self
    }

    /// Append `n` plain tracking frames.
    pub fn tracking(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.frames.push(Some(tracking_frame(0.5, 0.5)));
        }
        self
    }

    /// Append one arbitrary frame.
    pub fn frame(mut self, frame: Option<LandmarkSet>) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn into_provider(self) -> ScriptedProvider {
        ScriptedProvider::new(self.frames)
    }
}

// ============================================================================
// Collaborator test doubles
// ============================================================================

/// A landmark provider that replays a fixed script, then reports no hand.
pub struct ScriptedProvider {
    frames: VecDeque<Option<LandmarkSet>>,
    /// When set, the provider faults after the script is exhausted.
    fault_at_end: bool,
}

impl ScriptedProvider {
    pub fn new(frames: Vec<Option<LandmarkSet>>) -> Self {
        Self {
            frames: frames.into(),
            fault_at_end: false,
        }
    }

    /// Fault with a camera error once the script runs out.
    pub fn with_fault_at_end(mut self) -> Self {
        self.fault_at_end = true;
        self
    }
}

impl LandmarkProvider for ScriptedProvider {
    fn next(&mut self) -> anyhow::Result<Option<LandmarkSet>> {
        match self.frames.pop_front() {
            Some(frame) => Ok(frame),
            None if self.fault_at_end => Err(anyhow::anyhow!("camera disconnected")),
            None => Ok(None),
        }
    }
}

/// Every call a `RecordingEmitter` observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitterCall {
    Move { x: i32, y: i32 },
    Click(MouseButton),
    MouseDown,
    MouseUp,
    Scroll { ticks: i32 },
}

/// An action emitter that records calls instead of touching the OS.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    pub calls: Vec<EmitterCall>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls with cursor moves filtered out.
    pub fn discrete_calls(&self) -> Vec<EmitterCall> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, EmitterCall::Move { .. }))
            .cloned()
            .collect()
    }
}

impl ActionEmitter for RecordingEmitter {
    fn move_cursor(&mut self, x: i32, y: i32) {
        self.calls.push(EmitterCall::Move { x, y });
    }

    fn click(&mut self, button: MouseButton) {
        self.calls.push(EmitterCall::Click(button));
    }

    fn mouse_down(&mut self) {
        self.calls.push(EmitterCall::MouseDown);
    }

    fn mouse_up(&mut self) {
        self.calls.push(EmitterCall::MouseUp);
    }

    fn scroll(&mut self, ticks: i32) {
        self.calls.push(EmitterCall::Scroll { ticks });
    }
}
