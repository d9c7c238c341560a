//! Dispatcher for middleware and background task action dispatch
//!
//! Actions dispatched here are queued and re-enter the middleware chain from
//! the beginning once the store drains its queue. Queued actions are processed
//! strictly in the order they were sent.
//!
//! Background tasks hold a clone, so results of async work arrive on the same
//! queue as everything else.

use crate::actions::Action;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end of its queue
    pub fn channel() -> (Self, Receiver<Action>) {
        let (action_tx, action_rx) = mpsc::channel();
        (Self { action_tx }, action_rx)
    }

    /// Queue an action for the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
