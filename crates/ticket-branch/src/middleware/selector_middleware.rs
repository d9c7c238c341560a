//! Selector Middleware
//!
//! Same release-then-notify order as the prompt: when an input closes the
//! selector, `Selector(Released)` is dispatched before the choice reaches the
//! workflow.

use crate::actions::{Action, FlowAction, SelectorAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use tb_flow::FlowInput;

pub struct SelectorMiddleware;

impl SelectorMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SelectorMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for SelectorMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Selector(SelectorAction::Input(input)) = action else {
            return true;
        };

        let Some(selector) = state.open_selector() else {
            return false;
        };

        let mut closing = selector.clone();
        if let Some(outcome) = closing.handle(*input) {
            log::debug!("SelectorMiddleware: selector closed with {:?}", outcome);
            dispatcher.dispatch(Action::Selector(SelectorAction::Released));
            dispatcher.dispatch(Action::Flow(FlowAction::Input {
                run: state.flow.run,
                input: FlowInput::BaseSelected(outcome),
            }));
        }

        // Reducer applies the same input (highlight moves, latch)
        true
    }
}
