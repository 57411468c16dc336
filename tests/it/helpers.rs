//! Test helpers and builders for reducing boilerplate in tests.
//!
//! - `DragScript` - Builder that replays a pointer sequence through a tracker
//! - `scenario_config()` - The 100 / 200 / 200 thresholds used by most tests
//! - `recording_controller()` - Controller wired to an in-memory sink

use heartrate::gesture::{GestureTracker, ThresholdConfig};
use heartrate::input::SwipeController;
use heartrate::sink::RecordingSink;
use heartrate::types::{Decision, RatingSubject};
use uuid::Uuid;

/// dontKnow = 100, dontCare = 200, ratingRange = 200
pub fn scenario_config() -> ThresholdConfig {
    ThresholdConfig::with_thresholds(100.0, 200.0, 200.0)
}

/// A controller with a loaded subject and a recording sink.
pub fn recording_controller() -> SwipeController<RecordingSink> {
    let mut controller = SwipeController::new(scenario_config(), RecordingSink::new());
    controller.set_subject(RatingSubject::new(Uuid::new_v4(), "Test item"));
    controller
}

/// How a scripted drag finishes
#[derive(Debug, Clone, Copy)]
pub enum Finish {
    Release,
    Leave,
}

/// Replays `begin(origin)`, `update(x)`* and a finish through a tracker.
///
/// # Example
/// ```ignore
/// let decision = DragScript::from(0.0).to(150.0).release();
/// assert_eq!(decision, Decision::Rate { stars: 3 });
/// ```
pub struct DragScript {
    config: ThresholdConfig,
    origin: f32,
    moves: Vec<f32>,
}

impl DragScript {
    pub fn from(origin: f32) -> Self {
        Self {
            config: scenario_config(),
            origin,
            moves: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: ThresholdConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a move sample at absolute position `x`.
    pub fn to(mut self, x: f32) -> Self {
        self.moves.push(x);
        self
    }

    /// Run the script on a fresh tracker and return it with the decision.
    pub fn run(self, finish: Finish) -> (GestureTracker, Decision) {
        let mut tracker = GestureTracker::new(self.config);
        tracker.begin(self.origin);
        for x in self.moves {
            tracker.update(x);
        }
        let decision = match finish {
            Finish::Release => tracker.end(),
            Finish::Leave => {
                tracker.cancel();
                Decision::None
            }
        };
        (tracker, decision)
    }

    pub fn release(self) -> Decision {
        self.run(Finish::Release).1
    }
}
