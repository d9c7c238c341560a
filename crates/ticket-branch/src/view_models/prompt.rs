//! Prompt View Model

use tb_flow::PromptState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptViewModel {
    pub title: String,
    pub value: String,
    /// Cursor position in characters from the start of `value`
    pub cursor_column: u16,
    pub confirm_hint: &'static str,
    pub cancel_hint: &'static str,
}

impl PromptViewModel {
    pub fn from_state(prompt: &PromptState) -> Self {
        Self {
            title: prompt.label.clone(),
            value: prompt.buffer.clone(),
            cursor_column: u16::try_from(prompt.cursor_column()).unwrap_or(u16::MAX),
            confirm_hint: "Enter",
            cancel_hint: "Esc",
        }
    }
}
