//! Prompt Reducer

use crate::actions::PromptAction;
use tb_flow::PromptState;

pub fn reduce_prompt(prompt: Option<PromptState>, action: &PromptAction) -> Option<PromptState> {
    match action {
        PromptAction::Open { id, label, default } => {
            if prompt.as_ref().is_some_and(|p| !p.is_closed()) {
                log::warn!("Replacing open prompt with {:?}", id);
            }
            Some(PromptState::open(*id, label.clone(), default.clone()))
        }
        PromptAction::Edit(edit) => prompt.map(|mut p| {
            p.apply(edit.clone());
            p
        }),
        PromptAction::Finish(trigger) => prompt.map(|mut p| {
            // Latch only; the outcome was already taken by the middleware
            p.finish(*trigger);
            p
        }),
        PromptAction::Released => None,
    }
}
