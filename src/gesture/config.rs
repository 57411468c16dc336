//! Threshold configuration shared by the classifier and the feedback projector.

use crate::constants::{
    DEFAULT_DONT_CARE_THRESHOLD, DEFAULT_DONT_KNOW_THRESHOLD, DEFAULT_MAX_ROTATION_DEGREES,
    DEFAULT_RATING_RANGE, DEFAULT_ROTATION_FACTOR, MAX_STARS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating gesture configuration or discrete input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A threshold is NaN or infinite
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    /// dontKnowThreshold must be positive
    #[error("dontKnowThreshold must be > 0, got {0}")]
    NonPositiveDontKnow(f32),

    /// dontCareThreshold must exceed dontKnowThreshold
    #[error("dontCareThreshold ({dont_care}) must be greater than dontKnowThreshold ({dont_know})")]
    DontCareNotAboveDontKnow { dont_know: f32, dont_care: f32 },

    /// ratingRange must be positive
    #[error("ratingRange must be > 0, got {0}")]
    NonPositiveRatingRange(f32),

    /// Rotation parameters cannot be negative
    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f32 },

    /// A tapped star count outside 1..=5
    #[error("star count must be between 1 and {max}, got {stars}")]
    StarsOutOfRange { stars: u8, max: u8 },
}

/// Process-wide gesture thresholds, read-only after startup.
///
/// Keys use camelCase so a settings file reads the same as the
/// service-side configuration it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThresholdConfig {
    pub dont_know_threshold: f32,
    pub dont_care_threshold: f32,
    pub rating_range: f32,
    pub rotation_factor: f32,
    pub max_rotation_degrees: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            dont_know_threshold: DEFAULT_DONT_KNOW_THRESHOLD,
            dont_care_threshold: DEFAULT_DONT_CARE_THRESHOLD,
            rating_range: DEFAULT_RATING_RANGE,
            rotation_factor: DEFAULT_ROTATION_FACTOR,
            max_rotation_degrees: DEFAULT_MAX_ROTATION_DEGREES,
        }
    }
}

impl ThresholdConfig {
    /// Build a config with the three decision thresholds and default rotation.
    pub fn with_thresholds(dont_know: f32, dont_care: f32, rating_range: f32) -> Self {
        Self {
            dont_know_threshold: dont_know,
            dont_care_threshold: dont_care,
            rating_range,
            ..Self::default()
        }
    }

    /// Check `dontCareThreshold > dontKnowThreshold > 0` and `ratingRange > 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("dontKnowThreshold", self.dont_know_threshold),
            ("dontCareThreshold", self.dont_care_threshold),
            ("ratingRange", self.rating_range),
            ("rotationFactor", self.rotation_factor),
            ("maxRotationDegrees", self.max_rotation_degrees),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        if self.dont_know_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveDontKnow(self.dont_know_threshold));
        }
        if self.dont_care_threshold <= self.dont_know_threshold {
            return Err(ConfigError::DontCareNotAboveDontKnow {
                dont_know: self.dont_know_threshold,
                dont_care: self.dont_care_threshold,
            });
        }
        if self.rating_range <= 0.0 {
            return Err(ConfigError::NonPositiveRatingRange(self.rating_range));
        }
        if self.rotation_factor < 0.0 {
            return Err(ConfigError::Negative {
                name: "rotationFactor",
                value: self.rotation_factor,
            });
        }
        if self.max_rotation_degrees < 0.0 {
            return Err(ConfigError::Negative {
                name: "maxRotationDegrees",
                value: self.max_rotation_degrees,
            });
        }
        Ok(())
    }

    /// Validate and return self, for builder-style startup code.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

/// Check a tapped star count against the rating scale.
pub(crate) fn check_stars(stars: u8) -> Result<u8, ConfigError> {
    if (1..=MAX_STARS).contains(&stars) {
        Ok(stars)
    } else {
        Err(ConfigError::StarsOutOfRange {
            stars,
            max: MAX_STARS,
        })
    }
}
