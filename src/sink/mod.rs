//! Decision sink - where resolved decisions go.
//!
//! The gesture core hands each actionable decision over exactly once and
//! forgets it. Transport, auth and failure handling belong to the sink.
//!
//! ## Modules
//!
//! - `error` - Sink error type
//! - `http` - Rating service client (fire-and-forget worker threads)

mod error;
pub mod http;

pub use error::{SinkError, SinkResult};
pub use http::HttpDecisionSink;

use crate::types::Decision;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// An actionable decision about one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    subject: Uuid,
    decision: Decision,
}

impl Submission {
    /// Returns None for `Decision::None`, which is never submitted.
    pub fn new(subject: Uuid, decision: Decision) -> Option<Self> {
        decision
            .is_actionable()
            .then_some(Self { subject, decision })
    }

    pub fn subject(&self) -> Uuid {
        self.subject
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Service endpoint this submission is posted to. `Decision::None` has none.
    pub fn endpoint(&self) -> Option<Endpoint> {
        let id = self.subject;
        let (path, stars) = match self.decision {
            Decision::Rate { stars } => (format!("/api/items/{id}/rate"), Some(stars)),
            Decision::DontKnow => (format!("/api/items/{id}/dont-know"), None),
            Decision::DontCare => (format!("/api/items/{id}/dont-care"), None),
            Decision::None => return None,
        };
        Some(Endpoint { path, stars })
    }
}

/// A POST target on the rating service. Ratings carry the star count as a
/// bare JSON integer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub stars: Option<u8>,
}

/// Receives resolved decisions. Calls must not block the caller.
pub trait DecisionSink {
    fn submit(&self, submission: Submission);
}

impl<T: DecisionSink + ?Sized> DecisionSink for Arc<T> {
    fn submit(&self, submission: Submission) {
        (**self).submit(submission)
    }
}

/// Keeps every submission in memory. Used offline and in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    submissions: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything submitted so far, in order
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.lock().is_empty()
    }

    /// Decisions only, in order
    pub fn decisions(&self) -> Vec<Decision> {
        self.submissions.lock().iter().map(Submission::decision).collect()
    }
}

impl DecisionSink for RecordingSink {
    fn submit(&self, submission: Submission) {
        tracing::debug!(subject = %submission.subject(), decision = ?submission.decision(), "decision recorded");
        self.submissions.lock().push(submission);
    }
}
