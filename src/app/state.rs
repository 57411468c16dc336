//! RatingCard view state.

use crate::constants::NEXT_ITEM_POLL_MS;
use crate::gesture::ThresholdConfig;
use crate::input::SwipeController;
use crate::sink::DecisionSink;
use crate::types::RatingSubject;
use gpui::Context;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// The swipe-to-rate card view.
///
/// Holds no gesture logic of its own; pointer events are forwarded to the
/// controller (see `input::pointer`) and rendering reads back from it.
pub struct RatingCard {
    pub(crate) controller: SwipeController<Arc<dyn DecisionSink>>,
    /// Next subjects delivered by the sink's worker threads
    pub(crate) next_items: Option<Receiver<RatingSubject>>,
}

impl RatingCard {
    pub fn new(config: ThresholdConfig, sink: Arc<dyn DecisionSink>) -> Self {
        Self {
            controller: SwipeController::new(config, sink),
            next_items: None,
        }
    }

    pub fn with_subject(mut self, subject: Option<RatingSubject>) -> Self {
        if let Some(subject) = subject {
            self.controller.set_subject(subject);
        }
        self
    }

    pub fn with_next_items(mut self, rx: Receiver<RatingSubject>) -> Self {
        self.next_items = Some(rx);
        self
    }

    /// Wake the view whenever a worker delivers the next subject.
    ///
    /// Stops once the channel disconnects or the view is released.
    pub fn watch_next_items(&self, cx: &mut Context<Self>) {
        if self.next_items.is_none() {
            return;
        }
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(NEXT_ITEM_POLL_MS))
                    .await;
                let open = this.update(cx, |card, cx| {
                    if card.poll_next_item() {
                        cx.notify();
                    }
                    card.next_items.is_some()
                })?;
                if !open {
                    return anyhow::Ok(());
                }
            }
        })
        .detach();
    }

    pub fn controller(&self) -> &SwipeController<Arc<dyn DecisionSink>> {
        &self.controller
    }

    /// Pull a delivered subject, if any. Returns true when one was loaded.
    pub fn poll_next_item(&mut self) -> bool {
        let Some(rx) = &self.next_items else {
            return false;
        };
        let mut latest = None;
        loop {
            match rx.try_recv() {
                Ok(subject) => latest = Some(subject),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.next_items = None;
                    break;
                }
            }
        }
        match latest {
            Some(subject) => {
                self.controller.set_subject(subject);
                true
            }
            None => false,
        }
    }
}
