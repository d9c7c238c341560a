//! Prompt Middleware
//!
//! Turns the first `Finish` of an open prompt into two actions, in order:
//! 1. `Prompt(Released)` drops the prompt and its view
//! 2. `Flow(Input)` hands the outcome to the workflow
//!
//! By the time the workflow sees the outcome the prompt is gone, so it may
//! open the next prompt right away. A `Finish` on a closed or missing prompt
//! is consumed without effect.

use crate::actions::{Action, FlowAction, PromptAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use tb_flow::FlowInput;

pub struct PromptMiddleware;

impl PromptMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for PromptMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Prompt(PromptAction::Finish(trigger)) = action else {
            return true;
        };

        let Some(prompt) = state.open_prompt() else {
            log::debug!("PromptMiddleware: no open prompt for {:?}", trigger);
            return false;
        };

        // The reducer latches the real prompt; compute the outcome on a copy
        let mut closing = prompt.clone();
        let Some(outcome) = closing.finish_styled(*trigger, state.config.prompt_style) else {
            return false;
        };

        log::debug!(
            "PromptMiddleware: prompt {:?} closed with {:?}",
            prompt.id,
            outcome
        );
        dispatcher.dispatch(Action::Prompt(PromptAction::Released));
        dispatcher.dispatch(Action::Flow(FlowAction::Input {
            run: state.flow.run,
            input: FlowInput::PromptClosed {
                id: prompt.id,
                outcome,
            },
        }));

        // Let the reducer latch the prompt
        true
    }
}
