//! Feedback projector - live displacement to presentation parameters.
//!
//! Tint boundaries sit at a quarter of the decision thresholds and labels
//! come straight from the classifier's preview, so what the card shows
//! never drifts from what a release would decide.

use super::classifier::preview_label;
use super::config::ThresholdConfig;
use crate::types::{FeedbackState, Tint};

/// Project a displacement onto rotation, tint and visible label.
pub fn project(displacement: f32, config: &ThresholdConfig) -> FeedbackState {
    FeedbackState {
        rotation_degrees: rotation(displacement, config),
        tint: tint(displacement, config),
        visible_label: preview_label(displacement, config),
    }
}

/// Card rotation in degrees, clamped to `maxRotationDegrees` either way.
///
/// A negative limit is read by magnitude; a NaN limit or factor gives 0.
pub fn rotation(displacement: f32, config: &ThresholdConfig) -> f32 {
    let degrees = displacement * config.rotation_factor;
    let limit = config.max_rotation_degrees.abs();
    if degrees.is_nan() || limit.is_nan() {
        return 0.0;
    }
    degrees.clamp(-limit, limit)
}

/// Background wash for a displacement.
pub fn tint(displacement: f32, config: &ThresholdConfig) -> Option<Tint> {
    if displacement > config.dont_know_threshold / 4.0 {
        return Some(Tint::Green);
    }
    if displacement < 0.0 {
        let magnitude = displacement.abs();
        // Purple must be checked first: both hold for large leftward travel
        if magnitude > config.dont_care_threshold / 4.0 {
            return Some(Tint::Purple);
        }
        if magnitude > config.dont_know_threshold / 4.0 {
            return Some(Tint::Red);
        }
    }
    None
}
