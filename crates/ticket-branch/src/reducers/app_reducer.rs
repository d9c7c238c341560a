use crate::actions::{Action, GlobalAction};
use crate::reducers::{flow_reducer, prompt_reducer, selector_reducer, status_bar_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(_) => {
            // Key presses and focus changes are translated by middleware
        }
        Action::Prompt(action) => {
            state.prompt = prompt_reducer::reduce_prompt(state.prompt.take(), action);
        }
        Action::Selector(action) => {
            state.selector = selector_reducer::reduce_selector(state.selector.take(), action);
        }
        Action::Flow(action) => {
            state.flow = flow_reducer::reduce_flow(state.flow, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, action);
        }
    }

    state
}
