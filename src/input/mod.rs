//! Pointer input handling for the rating card.
//!
//! ## Architecture
//!
//! Gesture state lives in `gesture::GestureTracker`, an explicit state
//! machine with no knowledge of gpui. This module is the adapter between
//! the two:
//!
//! - `controller` - Platform-neutral controller: tracker + subject + sink
//! - `pointer` - gpui mouse event handlers that forward x-positions
//!
//! Only a single pointer is tracked; a second button press while a drag is
//! open is ignored.

mod controller;
mod pointer;

pub use controller::SwipeController;
