//! Swipe controller - glues the gesture tracker to the decision sink.
//!
//! Platform adapters forward raw pointer positions here; the controller
//! owns the tracker, the subject being rated and the sink. Session state is
//! always reset before the sink is called, so a slow or failing sink can
//! never re-trigger or corrupt a gesture.

use crate::gesture::{classify_tap, ConfigError, GestureTracker, ThresholdConfig};
use crate::sink::{DecisionSink, Submission};
use crate::types::{Decision, FeedbackState, RatingSubject, StarDisplay};
use tracing::{debug, warn};

pub struct SwipeController<S: DecisionSink> {
    tracker: GestureTracker,
    sink: S,
    subject: Option<RatingSubject>,
    hovered_star: u8,
    committed_stars: u8,
    last_decision: Option<Decision>,
}

impl<S: DecisionSink> SwipeController<S> {
    pub fn new(config: ThresholdConfig, sink: S) -> Self {
        Self {
            tracker: GestureTracker::new(config),
            sink,
            subject: None,
            hovered_star: 0,
            committed_stars: 0,
            last_decision: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn subject(&self) -> Option<&RatingSubject> {
        self.subject.as_ref()
    }

    /// Load the next subject. Any drag on the previous card is abandoned.
    pub fn set_subject(&mut self, subject: RatingSubject) {
        debug!(subject = %subject.id, name = %subject.name, "subject loaded");
        self.tracker.cancel();
        self.hovered_star = 0;
        self.committed_stars = 0;
        self.subject = Some(subject);
    }

    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    // ------------------------------------------------------------------------
    // Pointer events
    // ------------------------------------------------------------------------

    /// Returns false if a drag was already in progress
    pub fn pointer_down(&mut self, x: f32) -> bool {
        self.tracker.begin(x)
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.tracker.update(x);
    }

    /// Finish the drag and submit whatever it resolved to.
    pub fn pointer_up(&mut self) -> Decision {
        let decision = self.tracker.end();
        self.dispatch(decision)
    }

    /// Pointer left the card: abandon the drag without a decision.
    pub fn pointer_leave(&mut self) {
        self.tracker.cancel();
    }

    // ------------------------------------------------------------------------
    // Discrete controls
    // ------------------------------------------------------------------------

    /// Star tapped directly.
    pub fn tap_star(&mut self, stars: u8) -> Result<Decision, ConfigError> {
        let decision = classify_tap(stars)?;
        Ok(self.dispatch(decision))
    }

    pub fn dont_know(&mut self) -> Decision {
        self.dispatch(Decision::DontKnow)
    }

    pub fn dont_care(&mut self) -> Decision {
        self.dispatch(Decision::DontCare)
    }

    /// Star under the pointer, 0 for none
    pub fn hover_star(&mut self, star: u8) {
        self.hovered_star = star;
    }

    /// Pointer left `star`. Hover events for neighbouring stars may arrive
    /// in either order, so only the star that set the hover clears it.
    pub fn unhover_star(&mut self, star: u8) {
        if self.hovered_star == star {
            self.hovered_star = 0;
        }
    }

    // ------------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------------

    pub fn feedback(&self) -> FeedbackState {
        self.tracker.feedback()
    }

    pub fn displacement(&self) -> f32 {
        if self.tracker.is_active_drag() {
            self.tracker.displacement()
        } else {
            0.0
        }
    }

    pub fn star_display(&self) -> StarDisplay {
        StarDisplay {
            hovered: self.hovered_star,
            preview: self.tracker.preview_rating(),
            committed: self.committed_stars,
        }
    }

    fn dispatch(&mut self, decision: Decision) -> Decision {
        if !decision.is_actionable() {
            return decision;
        }

        let Some(subject) = self.subject.take() else {
            warn!(?decision, "No subject loaded, decision dropped");
            return decision;
        };

        self.last_decision = Some(decision);
        if let Some(stars) = decision.stars() {
            self.committed_stars = stars;
        }
        if let Some(submission) = Submission::new(subject.id, decision) {
            self.sink.submit(submission);
        }
        decision
    }
}
