//! Stateless per-frame gesture classification.
//!
//! One landmark set in, one [`GestureCandidate`] out. The classifier holds
//! no state and has no side effects; everything temporal (debouncing, drag
//! activation, scroll deltas) belongs to the interpreter.
//!
//! The threshold checks run in a fixed order that doubles as the tie-break:
//! right pinch first, because the thumb is shared between both pinch
//! gestures and both distances can be small at once near the thumb - the
//! rarer right pinch must not be masked by a simultaneous left reading.

use crate::error::{GestureError, GestureResult};
use crate::profile_scope;
use crate::settings::Settings;
use crate::types::{GestureCandidate, GestureKind, Landmark, LandmarkIndex, LandmarkSet, PinchDistances};

/// Classify one frame's observation into a gesture candidate.
///
/// `None` landmarks are the ordinary no-hand case and classify as tracking
/// with no distances. A landmark set with the wrong point count fails with
/// [`GestureError::InvalidLandmarkSet`]; the caller must not feed such a
/// frame to the state machine.
pub fn classify(landmarks: Option<&LandmarkSet>, settings: &Settings) -> GestureResult<GestureCandidate> {
    profile_scope!("classify");

    let Some(set) = landmarks else {
        return Ok(GestureCandidate::absent());
    };

    if !set.is_complete() {
        return Err(GestureError::InvalidLandmarkSet {
            count: set.points.len(),
        });
    }

    let distances = fingertip_distances(set);
    let kind = if distances.thumb_middle < settings.right_pinch_threshold {
        GestureKind::RightPinch
    } else if distances.thumb_index < settings.left_pinch_threshold {
        GestureKind::LeftPinch
    } else if distances.index_middle > settings.spread_threshold {
        GestureKind::Spread
    } else {
        GestureKind::None
    };

    Ok(GestureCandidate {
        kind,
        distances: Some(distances),
    })
}

/// The three pairwise fingertip distances the thresholds are compared
/// against. Requires a complete set; callers go through [`classify`].
fn fingertip_distances(set: &LandmarkSet) -> PinchDistances {
    let thumb = tip(set, LandmarkIndex::ThumbTip);
    let index = tip(set, LandmarkIndex::IndexTip);
    let middle = tip(set, LandmarkIndex::MiddleTip);

    PinchDistances {
        thumb_index: thumb.distance(&index),
        thumb_middle: thumb.distance(&middle),
        index_middle: index.distance(&middle),
    }
}

fn tip(set: &LandmarkSet, index: LandmarkIndex) -> Landmark {
    // Point count was validated above; a complete set has all 21 indices.
    set.points[index as usize]
}
