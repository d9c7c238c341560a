//! Flow Reducer
//!
//! Mirrors the workflow state for rendering. Updates from an older run are
//! dropped.

use crate::actions::FlowAction;
use crate::state::FlowStatus;
use tb_flow::FlowState;

pub fn reduce_flow(mut status: FlowStatus, action: &FlowAction) -> FlowStatus {
    match action {
        FlowAction::Started { run } => {
            status.run = *run;
            status.state = FlowState::Idle;
        }
        FlowAction::StateChanged { run, state } if *run == status.run => {
            status.state = *state;
        }
        FlowAction::Finished { run, outcome } if *run == status.run => {
            status.last_outcome = Some(outcome.clone());
        }
        FlowAction::Start
        | FlowAction::Input { .. }
        | FlowAction::StateChanged { .. }
        | FlowAction::Finished { .. } => {}
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_flow::FlowOutcome;

    #[test]
    fn test_updates_from_old_runs_are_dropped() {
        let status = reduce_flow(FlowStatus::default(), &FlowAction::Started { run: 2 });
        let status = reduce_flow(
            status,
            &FlowAction::StateChanged {
                run: 1,
                state: FlowState::Done,
            },
        );
        assert_eq!(status.state, FlowState::Idle);

        let status = reduce_flow(
            status,
            &FlowAction::Finished {
                run: 2,
                outcome: FlowOutcome::Cancelled,
            },
        );
        assert_eq!(status.last_outcome, Some(FlowOutcome::Cancelled));
    }
}
