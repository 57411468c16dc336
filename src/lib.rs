//! HeartRate swipe-to-rate client.
//!
//! The interesting part is the `gesture` core: a free-standing state machine
//! that turns a horizontal drag into exactly one rating decision. Everything
//! else adapts it to gpui (`app`, `input`) and to the rating service (`sink`).

pub mod app;
pub mod constants;
pub mod gesture;
pub mod input;
pub mod perf;
pub mod settings;
pub mod sink;
pub mod types;
