//! Prompt actions
//!
//! `Finish` is the only way a prompt closes. The prompt middleware turns the
//! first `Finish` into `Released` followed by the outcome for the workflow;
//! the reducer latches the prompt so later `Finish` actions have no effect.

use tb_flow::{PromptEdit, PromptId, PromptTrigger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Show a prompt seeded with `default`
    Open {
        id: PromptId,
        label: String,
        default: String,
    },
    /// Edit the buffer
    Edit(PromptEdit),
    /// Close the prompt (Enter, Esc, Ctrl-C, focus loss)
    Finish(PromptTrigger),
    /// Drop the prompt state and its view
    Released,
}
