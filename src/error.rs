//! Error types for the gesture pipeline.
//!
//! Provides unified error handling for classification, configuration, and
//! session-level failures. Gesture misdetection is never fatal: the
//! orchestrator downgrades [`GestureError::InvalidLandmarkSet`] to a no-hand
//! frame. Collaborator faults (camera, OS pointer) hard-stop the session.

use thiserror::Error;

pub use crate::constants::LANDMARK_COUNT;

/// Errors that can occur in the gesture pipeline
#[derive(Error, Debug)]
pub enum GestureError {
    /// Malformed landmark set fed to the classifier (wrong point count)
    #[error("invalid landmark set: expected {LANDMARK_COUNT} points, got {count}")]
    InvalidLandmarkSet { count: usize },

    /// Settings value outside its documented range
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// IO error from std::io (settings persistence)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json (settings persistence)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Landmark provider fault (camera-level failure)
    #[error("landmark provider fault: {0}")]
    Provider(#[source] anyhow::Error),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for gesture pipeline operations
pub type GestureResult<T> = Result<T, GestureError>;

impl From<String> for GestureError {
    fn from(s: String) -> Self {
        GestureError::Other(s)
    }
}

impl From<&str> for GestureError {
    fn from(s: &str) -> Self {
        GestureError::Other(s.to_string())
    }
}
