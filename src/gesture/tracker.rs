//! Gesture tracker - explicit state machine for one horizontal drag.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Tracking   (begin)
//! Tracking -> Tracking   (update; arms once travel exceeds the noise floor)
//! Tracking -> Idle       (end - resolves a decision if armed)
//! Tracking -> Idle       (cancel - never resolves a decision)
//! ```
//!
//! Calls that make no sense for the current state (`begin` while tracking,
//! `update`/`end`/`cancel` while idle) are silent no-ops, since pointer
//! event order differs between devices and back-ends.

use super::classifier;
use super::config::ThresholdConfig;
use super::feedback;
use crate::constants::DRAG_NOISE_FLOOR;
use crate::types::{Decision, FeedbackState, SwipeLabel};
use tracing::{debug, trace};

/// One pointer-down-to-pointer-up interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_x: f32,
    pub current_x: f32,
    /// Travel exceeded the noise floor at some point; never un-arms.
    pub is_active_drag: bool,
    pub preview_rating: u8,
}

impl DragSession {
    fn new(x: f32) -> Self {
        Self {
            origin_x: x,
            current_x: x,
            is_active_drag: false,
            preview_rating: 0,
        }
    }

    /// Signed travel from the origin; positive is rate-intent.
    pub fn displacement(&self) -> f32 {
        self.current_x - self.origin_x
    }
}

/// Tracker state. At most one session exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Tracking(DragSession),
}

/// Converts a stream of pointer x-positions into a single decision.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: TrackerState,
    config: ThresholdConfig,
}

impl GestureTracker {
    pub fn new(config: ThresholdConfig) -> Self {
        Self {
            state: TrackerState::Idle,
            config,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// The open session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            TrackerState::Tracking(session) => Some(session),
            TrackerState::Idle => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking(_))
    }

    /// Returns true once the open session has travelled past the noise floor
    pub fn is_active_drag(&self) -> bool {
        self.session().is_some_and(|s| s.is_active_drag)
    }

    /// Current displacement, or 0 when idle
    pub fn displacement(&self) -> f32 {
        self.session().map_or(0.0, DragSession::displacement)
    }

    /// Stars previewed by the open session, 0 when idle or not yet armed
    pub fn preview_rating(&self) -> u8 {
        self.session().map_or(0, |s| s.preview_rating)
    }

    /// Label previewed by the open session, if armed
    pub fn preview_label(&self) -> Option<SwipeLabel> {
        match self.session() {
            Some(session) if session.is_active_drag => {
                classifier::preview_label(session.displacement(), &self.config)
            }
            _ => None,
        }
    }

    /// Live presentation state; neutral unless an armed session is open.
    pub fn feedback(&self) -> FeedbackState {
        match self.session() {
            Some(session) if session.is_active_drag => {
                feedback::project(session.displacement(), &self.config)
            }
            _ => FeedbackState::neutral(),
        }
    }

    /// Open a session at `x`. Returns false (and changes nothing) if one is open.
    pub fn begin(&mut self, x: f32) -> bool {
        if self.is_tracking() {
            trace!(x, "begin ignored: session already open");
            return false;
        }
        debug!(x, "drag session opened");
        self.state = TrackerState::Tracking(DragSession::new(x));
        true
    }

    /// Record a move sample. No-op when idle.
    pub fn update(&mut self, x: f32) {
        let config = self.config;
        let TrackerState::Tracking(session) = &mut self.state else {
            return;
        };

        session.current_x = x;
        let displacement = session.displacement();
        if displacement.abs() > DRAG_NOISE_FLOOR && !session.is_active_drag {
            debug!(displacement, "drag armed");
            session.is_active_drag = true;
        }
        if session.is_active_drag {
            session.preview_rating = classifier::preview_rating(displacement, &config);
        }
        trace!(
            displacement,
            preview_rating = session.preview_rating,
            "drag update"
        );
    }

    /// Close the session and resolve it.
    ///
    /// Returns `Decision::None` when idle or when the session never armed
    /// (a tap). The session is discarded in every case.
    pub fn end(&mut self) -> Decision {
        let TrackerState::Tracking(session) = std::mem::take(&mut self.state) else {
            return Decision::None;
        };

        if !session.is_active_drag {
            debug!("drag session closed as tap");
            return Decision::None;
        }

        let decision = classifier::resolve(session.displacement(), &self.config);
        debug!(
            displacement = session.displacement(),
            ?decision,
            "drag session resolved"
        );
        decision
    }

    /// Discard the session without resolving it. Feedback returns to neutral.
    pub fn cancel(&mut self) {
        if let TrackerState::Tracking(session) = std::mem::take(&mut self.state) {
            debug!(
                displacement = session.displacement(),
                "drag session cancelled"
            );
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}
