//! Core types for the gesture interpretation pipeline.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: hand landmarks, per-frame gesture candidates, and the discrete
//! pointer actions the interpreter emits.

use crate::constants::LANDMARK_COUNT;
use serde::{Deserialize, Serialize};

// ============================================================================
// Landmarks
// ============================================================================

/// A single tracked point on the hand skeleton.
///
/// `x` and `y` are normalized to the camera frame (`[0, 1]`); `z` is a
/// signed camera-relative depth, unitless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 3D Euclidean distance to another landmark.
    ///
    /// All three axes participate so depth/rotation does not produce false
    /// pinch readings compared to a 2D-only measure.
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Well-known landmark indices of the 21-point hand model.
///
/// The identity of each index is fixed by the provider: wrist at 0, then
/// four joints per finger from base to tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(usize)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

/// One frame's hand observation: an ordered set of 21 landmarks.
///
/// No landmark set persists across frames; only derived interpreter state
/// does. Construction does not validate the point count - the classifier is
/// the validation gate and rejects malformed sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    pub points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// Whether the set has the expected 21 points.
    pub fn is_complete(&self) -> bool {
        self.points.len() == LANDMARK_COUNT
    }

    /// Landmark at a well-known index, if present.
    pub fn get(&self, index: LandmarkIndex) -> Option<&Landmark> {
        self.points.get(index as usize)
    }

    /// The index fingertip, which drives the cursor and the scroll anchor.
    pub fn index_tip(&self) -> Option<&Landmark> {
        self.get(LandmarkIndex::IndexTip)
    }
}

// ============================================================================
// Gesture Candidates
// ============================================================================

/// Per-frame, stateless gesture classification.
///
/// Tracking (cursor move only) is the default `None` case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    /// No gesture - plain tracking, or no hand at all
    None,
    /// Thumb-tip and index-tip pinched (left-click / drag family)
    LeftPinch,
    /// Thumb-tip and middle-tip pinched (right-click)
    RightPinch,
    /// Index-tip and middle-tip spread apart (scroll mode)
    Spread,
}

/// The pairwise fingertip distances that produced a classification.
///
/// Kept on the candidate for diagnostics and threshold tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchDistances {
    /// Thumb-tip to index-tip
    pub thumb_index: f32,
    /// Thumb-tip to middle-tip
    pub thumb_middle: f32,
    /// Index-tip to middle-tip
    pub index_middle: f32,
}

/// A classified frame: the winning gesture plus its raw distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureCandidate {
    pub kind: GestureKind,
    /// Absent when no hand was observed this frame
    pub distances: Option<PinchDistances>,
}

impl GestureCandidate {
    /// The no-hand candidate.
    pub fn absent() -> Self {
        Self {
            kind: GestureKind::None,
            distances: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.kind == GestureKind::None
    }
}

// ============================================================================
// Pointer Actions
// ============================================================================

/// Pointer button identity for click actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// A committed, debounced pointer action produced by the interpreter.
///
/// At most one of {click, drag-start, drag-continue, scroll} is emitted per
/// frame; `DragEnd` may accompany another action on the frame a pinch is
/// released into a different gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// Debounced left click, decided retrospectively on pinch release
    LeftClick,
    /// Debounced right click
    RightClick,
    /// Mouse button pressed - a held pinch crossed the activation threshold
    DragStart,
    /// Drag still in progress this frame; the button stays down
    DragContinue,
    /// Mouse button released - pinch released or hand lost while dragging
    DragEnd,
    /// Scroll by a number of ticks; positive scrolls up
    Scroll { ticks: i32 },
}

// ============================================================================
// Geometry
// ============================================================================

/// A cursor position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a camera frame or a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
