//! Swipe gesture core for rating cards.
//!
//! Turns a continuous horizontal drag into exactly one discrete decision
//! (rate N stars, don't know, doesn't care, or nothing) and projects the
//! live drag onto visual feedback.
//!
//! ## Modules
//!
//! - `config` - Threshold configuration and validation
//! - `tracker` - Drag session state machine (begin/update/end/cancel)
//! - `classifier` - Final and preview decision rules
//! - `feedback` - Rotation, tint and label projection
//!
//! Nothing here touches rendering or the network; the `input` module
//! drives this core from platform events and forwards decisions on.

pub mod classifier;
pub mod config;
pub mod feedback;
pub mod tracker;

pub use classifier::{classify_tap, preview_label, preview_rating, resolve};
pub use config::{ConfigError, ThresholdConfig};
pub use feedback::project;
pub use tracker::{DragSession, GestureTracker, TrackerState};
