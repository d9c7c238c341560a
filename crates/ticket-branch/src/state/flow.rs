//! Workflow status as seen by the UI

use tb_flow::{FlowOutcome, FlowState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStatus {
    /// Current run number, 0 before the first run
    pub run: u64,
    pub state: FlowState,
    /// How the previous run ended
    pub last_outcome: Option<FlowOutcome>,
}

impl Default for FlowStatus {
    fn default() -> Self {
        Self {
            run: 0,
            state: FlowState::Idle,
            last_outcome: None,
        }
    }
}

impl FlowStatus {
    pub fn is_fetching(&self) -> bool {
        self.state == FlowState::ResolveTitle
    }
}
