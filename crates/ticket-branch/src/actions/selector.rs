//! Base branch selector actions

use tb_flow::SelectorInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    Open { title: String, options: Vec<String> },
    Input(SelectorInput),
    /// Drop the selector state and its view
    Released,
}
