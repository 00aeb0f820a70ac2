//! Tuning parameters with JSON persistence.
//!
//! Every knob the pipeline consumes lives here: gesture thresholds,
//! debounce cooldowns, drag activation, dead-zone, smoothing, and scroll
//! behavior. Values load from a JSON file under the user config directory
//! and fall back field-by-field to the documented defaults, so a partial
//! settings file stays valid across versions.

use crate::constants::*;
use crate::error::{GestureError, GestureResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// All runtime-adjustable tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Thumb-index distance below which a left pinch is detected (normalized)
    pub left_pinch_threshold: f32,
    /// Thumb-middle distance below which a right pinch is detected (normalized)
    pub right_pinch_threshold: f32,
    /// Index-middle distance above which a spread is detected (normalized)
    pub spread_threshold: f32,
    /// Frames between click actions of the same button
    pub click_cooldown_frames: u32,
    /// Frames between scroll ticks
    pub scroll_cooldown_frames: u32,
    /// Frames a pinch must persist before it becomes a drag
    pub drag_activation_frames: u32,
    /// Edge dead-zone in camera pixels on each side
    pub frame_reduction: f32,
    /// Exponential smoothing factor, in (0, 1]; 1 disables smoothing
    pub smoothing_factor: f32,
    /// Cursor speed multiplier
    pub cursor_speed: f32,
    /// Scroll ticks per unit of normalized vertical motion
    pub scroll_sensitivity: f32,
    /// Minimum normalized vertical motion before a scroll tick is considered
    pub min_scroll_motion: f32,
    /// Process every Nth captured frame.
    ///
    /// Counters tick once per processed frame, so a larger value
    /// proportionally lengthens effective cooldowns in wall-clock time.
    /// Accepted trade-off, documented, not a bug.
    pub frame_skip: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left_pinch_threshold: DEFAULT_LEFT_PINCH_THRESHOLD,
            right_pinch_threshold: DEFAULT_RIGHT_PINCH_THRESHOLD,
            spread_threshold: DEFAULT_SPREAD_THRESHOLD,
            click_cooldown_frames: DEFAULT_CLICK_COOLDOWN_FRAMES,
            scroll_cooldown_frames: DEFAULT_SCROLL_COOLDOWN_FRAMES,
            drag_activation_frames: DEFAULT_DRAG_ACTIVATION_FRAMES,
            frame_reduction: DEFAULT_FRAME_REDUCTION,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            cursor_speed: DEFAULT_CURSOR_SPEED,
            scroll_sensitivity: DEFAULT_SCROLL_SENSITIVITY,
            min_scroll_motion: DEFAULT_MIN_SCROLL_MOTION,
            frame_skip: DEFAULT_FRAME_SKIP,
        }
    }
}

impl Settings {
    /// Load settings from the default path, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!(?path, error = %e, "failed to load settings, using defaults");
            Self::default()
        })
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> GestureResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Persist settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> GestureResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(?path, "settings saved");
        Ok(())
    }

    /// Check every value against its documented range.
    pub fn validate(&self) -> GestureResult<()> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(GestureError::InvalidSettings(format!(
                "smoothing_factor must be in (0, 1], got {}",
                self.smoothing_factor
            )));
        }
        if self.left_pinch_threshold <= 0.0
            || self.right_pinch_threshold <= 0.0
            || self.spread_threshold <= 0.0
        {
            return Err(GestureError::InvalidSettings(
                "gesture thresholds must be positive".into(),
            ));
        }
        if self.drag_activation_frames == 0 {
            return Err(GestureError::InvalidSettings(
                "drag_activation_frames must be at least 1".into(),
            ));
        }
        if self.frame_skip == 0 {
            return Err(GestureError::InvalidSettings(
                "frame_skip must be at least 1".into(),
            ));
        }
        if self.frame_reduction < 0.0 {
            return Err(GestureError::InvalidSettings(
                "frame_reduction must not be negative".into(),
            ));
        }
        if self.cursor_speed <= 0.0 {
            return Err(GestureError::InvalidSettings(
                "cursor_speed must be positive".into(),
            ));
        }
        if self.scroll_sensitivity <= 0.0 {
            return Err(GestureError::InvalidSettings(
                "scroll_sensitivity must be positive".into(),
            ));
        }
        if self.min_scroll_motion < 0.0 {
            return Err(GestureError::InvalidSettings(
                "min_scroll_motion must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Default settings file location under the user config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("airmouse").join("settings.json"))
}
