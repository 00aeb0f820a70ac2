//! Crate-wide constants and default tuning values.
//!
//! Centralizes magic numbers so the tuning surface is visible in one place.
//! Runtime-adjustable values live in [`crate::settings::Settings`]; the
//! defaults here are the documented starting points.

// ============================================================================
// Hand Model
// ============================================================================

/// Number of points in a hand skeleton observation.
///
/// Index identity is fixed: wrist, then four joints per finger
/// (thumb 1-4, index 5-8, middle 9-12, ring 13-16, pinky 17-20).
pub const LANDMARK_COUNT: usize = 21;

// ============================================================================
// Gesture Thresholds (normalized units)
// ============================================================================

/// Thumb-tip to index-tip distance below which a left pinch is detected
pub const DEFAULT_LEFT_PINCH_THRESHOLD: f32 = 0.07;

/// Thumb-tip to middle-tip distance below which a right pinch is detected
pub const DEFAULT_RIGHT_PINCH_THRESHOLD: f32 = 0.07;

/// Index-tip to middle-tip distance above which a spread is detected
pub const DEFAULT_SPREAD_THRESHOLD: f32 = 0.10;

// ============================================================================
// Debouncing & Drag Activation (processed frames)
// ============================================================================

/// Minimum frames between click actions of the same button
pub const DEFAULT_CLICK_COOLDOWN_FRAMES: u32 = 8;

/// Minimum frames between scroll ticks
pub const DEFAULT_SCROLL_COOLDOWN_FRAMES: u32 = 5;

/// Frames a pinch must be held before it becomes a drag instead of a click
pub const DEFAULT_DRAG_ACTIVATION_FRAMES: u32 = 5;

// ============================================================================
// Cursor Mapping
// ============================================================================

/// Edge dead-zone in camera pixels on each side of the frame.
///
/// The full screen stays reachable without the hand visiting the physical
/// frame edges.
pub const DEFAULT_FRAME_REDUCTION: f32 = 100.0;

/// Exponential smoothing factor; 1.0 disables smoothing
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.15;

/// Cursor speed multiplier applied after dead-zone normalization
pub const DEFAULT_CURSOR_SPEED: f32 = 1.0;

// ============================================================================
// Scrolling
// ============================================================================

/// Scroll ticks per unit of normalized vertical fingertip motion
pub const DEFAULT_SCROLL_SENSITIVITY: f32 = 40.0;

/// Minimum normalized vertical motion before a scroll tick is considered.
/// Filters hand micro-jitter while fingers are merely held spread.
pub const DEFAULT_MIN_SCROLL_MOTION: f32 = 0.01;

// ============================================================================
// Orchestrator
// ============================================================================

/// Process every Nth captured frame (1 = every frame)
pub const DEFAULT_FRAME_SKIP: u32 = 1;
