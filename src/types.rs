//! Core types shared by the gesture core, the decision sink and the card view.

use crate::constants::{MAX_STARS, TINT_DONT_CARE, TINT_LIKE, TINT_NOPE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Decisions
// ============================================================================

/// The single discrete outcome a completed drag or a tap resolves to.
///
/// Serialized with the rating service's status vocabulary so a decision can
/// be logged or replayed exactly as the service records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// No decision; the card snaps back.
    #[default]
    None,
    /// Rated with 1..=5 stars.
    #[serde(rename = "RATED")]
    Rate { stars: u8 },
    /// The user does not know the item.
    DontKnow,
    /// The user is not interested in the item at all.
    DontCare,
}

impl Decision {
    /// Returns true for every decision that should reach the decision sink.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Star count for a rating, if this is one.
    pub fn stars(&self) -> Option<u8> {
        match self {
            Self::Rate { stars } => Some(*stars),
            _ => None,
        }
    }
}

// ============================================================================
// Live Feedback
// ============================================================================

/// Label revealed on the card during a drag. At most one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeLabel {
    Like,
    Nope,
    DontCare,
}

impl SwipeLabel {
    /// Text shown on the card for this label
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Nope => "NOPE",
            Self::DontCare => "DON'T CARE",
        }
    }
}

/// Background wash applied to the card during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tint {
    Green,
    Red,
    Purple,
}

impl Tint {
    /// Color as 0xRRGGBB
    pub fn rgb(&self) -> u32 {
        match self {
            Self::Green => TINT_LIKE,
            Self::Red => TINT_NOPE,
            Self::Purple => TINT_DONT_CARE,
        }
    }
}

/// Presentation parameters derived from the live displacement.
///
/// Recomputed on every move sample and never stored beyond the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackState {
    pub rotation_degrees: f32,
    pub tint: Option<Tint>,
    pub visible_label: Option<SwipeLabel>,
}

impl FeedbackState {
    /// Neutral state: upright card, no wash, no label.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        self.rotation_degrees == 0.0 && self.tint.is_none() && self.visible_label.is_none()
    }
}

// ============================================================================
// Star Display
// ============================================================================

/// Resolves which star count the star row shows.
///
/// A hovered star wins, then a live drag preview, then the committed rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarDisplay {
    pub hovered: u8,
    pub preview: u8,
    pub committed: u8,
}

impl StarDisplay {
    /// Number of stars to draw filled
    pub fn shown(&self) -> u8 {
        let shown = if self.hovered > 0 {
            self.hovered
        } else if self.preview > 0 {
            self.preview
        } else {
            self.committed
        };
        shown.min(MAX_STARS)
    }

    /// Whether the 1-based star `star` is drawn filled
    pub fn is_filled(&self, star: u8) -> bool {
        star <= self.shown()
    }
}

// ============================================================================
// Subjects
// ============================================================================

/// An item waiting to be rated, as returned by the rating service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubject {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RatingSubject {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            image_url: None,
        }
    }
}
