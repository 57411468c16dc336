//! Mouse event handlers - forward gpui pointer events to the controller.
//!
//! Mouse move is called very frequently during a drag, so the handler
//! exits early when no session is open.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::RatingCard;
use crate::profile_scope;
use gpui::*;
use tracing::{info, warn};

impl RatingCard {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.controller.pointer_down(f32::from(event.position.x)) {
            cx.notify();
        }
    }

    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        if !self.controller.tracker().is_tracking() {
            return;
        }

        // Button released somewhere we never saw the mouse up
        if event.pressed_button != Some(MouseButton::Left) {
            self.controller.pointer_leave();
            cx.notify();
            return;
        }

        self.controller.pointer_move(f32::from(event.position.x));
        cx.notify();
    }

    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let decision = self.controller.pointer_up();
        if decision.is_actionable() {
            info!(?decision, "Swipe resolved");
        }
        cx.notify();
    }

    /// Leaving the card cancels an open drag.
    pub fn handle_hover(&mut self, hovered: &bool, _window: &mut Window, cx: &mut Context<Self>) {
        if !*hovered && self.controller.tracker().is_tracking() {
            self.controller.pointer_leave();
            cx.notify();
        }
    }

    pub fn handle_star_click(&mut self, stars: u8, cx: &mut Context<Self>) {
        match self.controller.tap_star(stars) {
            Ok(decision) => info!(?decision, "Star tapped"),
            Err(e) => warn!("Ignoring star tap: {}", e),
        }
        cx.notify();
    }

    pub fn handle_star_hover(&mut self, stars: u8, hovered: bool, cx: &mut Context<Self>) {
        if hovered {
            self.controller.hover_star(stars);
        } else {
            self.controller.unhover_star(stars);
        }
        cx.notify();
    }

    pub fn handle_dont_know(&mut self, cx: &mut Context<Self>) {
        self.controller.dont_know();
        cx.notify();
    }

    pub fn handle_dont_care(&mut self, cx: &mut Context<Self>) {
        self.controller.dont_care();
        cx.notify();
    }
}
