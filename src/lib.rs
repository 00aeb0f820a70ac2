//! Airmouse - hand-gesture to pointer-action interpretation.
//!
//! The crate turns a stream of per-frame hand-skeleton observations into a
//! smoothed cursor position plus discrete, debounced pointer actions
//! (click, drag, scroll). Camera capture and OS-level pointer injection are
//! external collaborators behind the [`pipeline::LandmarkProvider`] and
//! [`pipeline::ActionEmitter`] traits.
//!
//! Module map:
//! - `types` - landmark, gesture, and event data types
//! - `classifier` - stateless per-frame gesture classification
//! - `mapper` - fingertip to screen-coordinate mapping and smoothing
//! - `interpreter` - the gesture state machine (debounce, drag, scroll)
//! - `pipeline` - the per-frame orchestrator and session loop
//! - `settings` - tuning parameters with JSON persistence
//! - `settings_watcher` - settings file hot-reload
//! - `perf` - frame timing and profiling instrumentation
//! - `logging` - tracing subscriber setup

pub mod classifier;
pub mod constants;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod mapper;
pub mod perf;
pub mod pipeline;
pub mod settings;
pub mod settings_watcher;
pub mod types;

pub use error::{GestureError, GestureResult};
pub use interpreter::GestureInterpreter;
pub use mapper::CursorMapper;
pub use pipeline::{ActionEmitter, LandmarkProvider, Pipeline, StopHandle};
pub use settings::Settings;
pub use types::{ActionEvent, GestureCandidate, GestureKind, LandmarkSet, MouseButton};
