//! Decision classifier - maps a horizontal displacement to a decision.
//!
//! Positive displacement is rate-intent, negative is reject-intent. The
//! final resolution is checked in priority order:
//!
//! ```text
//! d >  dontKnow          -> Rate(max(1, rating))
//! d < -dontCare          -> DontCare
//! d < -dontKnow          -> DontKnow
//! otherwise              -> None
//! ```
//!
//! The live preview uses half the "don't know" threshold so the card
//! reacts before the drag would actually commit.

use super::config::{check_stars, ConfigError, ThresholdConfig};
use crate::constants::MAX_STARS;
use crate::types::{Decision, SwipeLabel};

/// Star count previewed for a displacement, in `0..=5`.
///
/// Non-positive (and NaN) displacement previews zero stars.
pub fn preview_rating(displacement: f32, config: &ThresholdConfig) -> u8 {
    if !(displacement > 0.0) {
        return 0;
    }
    let raw = ((displacement / config.rating_range) * MAX_STARS as f32).floor();
    raw.clamp(0.0, MAX_STARS as f32) as u8
}

/// Resolve the final decision for a completed drag.
pub fn resolve(displacement: f32, config: &ThresholdConfig) -> Decision {
    if displacement > config.dont_know_threshold {
        // Clearing the threshold is unambiguous positive intent, never 0 stars
        let stars = preview_rating(displacement, config).max(1);
        Decision::Rate { stars }
    } else if displacement < -config.dont_care_threshold {
        Decision::DontCare
    } else if displacement < -config.dont_know_threshold {
        Decision::DontKnow
    } else {
        Decision::None
    }
}

/// Label previewed while dragging. Returns at most one label.
pub fn preview_label(displacement: f32, config: &ThresholdConfig) -> Option<SwipeLabel> {
    let half_dont_know = config.dont_know_threshold / 2.0;

    if displacement > half_dont_know {
        Some(SwipeLabel::Like)
    } else if displacement < -config.dont_care_threshold {
        Some(SwipeLabel::DontCare)
    } else if displacement < -half_dont_know {
        Some(SwipeLabel::Nope)
    } else {
        None
    }
}

/// Decision for a direct star tap, bypassing the drag machinery.
pub fn classify_tap(stars: u8) -> Result<Decision, ConfigError> {
    let stars = check_stars(stars)?;
    Ok(Decision::Rate { stars })
}
