//! Workflow actions
//!
//! Every workflow run gets a new `run` number. Inputs carry the run they
//! belong to, so results of an abandoned run cannot leak into the next one.

use tb_flow::{FlowInput, FlowOutcome, FlowState};

#[derive(Debug, Clone)]
pub enum FlowAction {
    /// Start a new run (ignored while one is active)
    Start,
    /// A run was started
    Started { run: u64 },
    /// Feed an input into the state machine of `run`
    Input { run: u64, input: FlowInput },
    /// The state machine of `run` moved to `state`
    StateChanged { run: u64, state: FlowState },
    /// `run` reached a terminal state
    Finished { run: u64, outcome: FlowOutcome },
}
