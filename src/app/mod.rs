//! Application module - the gpui shell around the swipe controller.
//!
//! - `state` - The RatingCard view struct and next-item polling
//! - `card` - Rendering (tint, label, star row, skip buttons)
//!
//! Pointer handlers live in `input::pointer`.

mod card;
mod state;

pub use state::RatingCard;
