//! Performance monitoring utilities.
//!
//! Tracks per-frame processing time so the gesture loop can be kept inside
//! the camera frame budget, and provides RAII scoped timers for the hot
//! paths (classification, mapping, interpretation).
//!
//! Enable the `profiling` feature for per-scope instrumentation:
//! ```toml
//! [dependencies]
//! airmouse = { features = ["profiling"] }
//! ```
//! The `profile_scope!`/`profile_function!` macros are zero-cost when the
//! feature is disabled.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for a 30 FPS camera feed
pub const TARGET_FRAME_MS: f64 = 33.33;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for warning (2.0 = warn if frame takes 2x target)
const WARN_THRESHOLD: f64 = 2.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use airmouse::profile_scope;
///
/// fn process_frame() {
///     profile_scope!("process_frame");
///     // ... per-frame work ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Profile the current function. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!(concat!(module_path!(), "::", $crate::function_name!()));
    };
}

/// Helper macro to get the enclosing function name.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f" from the function name
        &name[..name.len() - 3]
    }};
}

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Frame Performance Monitor
// ============================================================================

/// Rolling frame-time monitor for the gesture loop.
pub struct PerfMonitor {
    /// Recent frame times in milliseconds
    frame_times: VecDeque<f64>,
    /// When the current frame started
    frame_start: Option<Instant>,
    /// Count of frames that exceeded the warning threshold
    slow_frame_count: u64,
    /// Total frames tracked
    total_frames: u64,
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    /// Create a new performance monitor.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frame_count: 0,
            total_frames: 0,
        }
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame and record timing.
    /// Returns the frame time in milliseconds.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow frame detected"
            );
        }

        Some(ms)
    }

    /// Get the average frame time over recent samples.
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    /// Get the maximum frame time in recent samples.
    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    /// Get the percentage of frames that were slow.
    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frame_count as f64 / self.total_frames as f64) * 100.0
    }

    /// Get estimated FPS based on average frame time.
    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    /// Total frames recorded since creation or reset.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.frame_start = None;
        self.slow_frame_count = 0;
        self.total_frames = 0;
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer with the default threshold (one frame).
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    /// Create a timer for profiling (lower threshold, 1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        #[cfg(feature = "profiling")]
        {
            if is_profiling_enabled() && elapsed_ms > self.threshold_ms {
                trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    threshold_ms = format!("{:.2}", self.threshold_ms),
                    "Slow operation"
                );
            }
        }
    }
}

/// Measure execution time of a closure and return both the result and
/// elapsed time in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
