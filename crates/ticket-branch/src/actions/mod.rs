//! Actions module
//!
//! Actions are tagged by the part of the application they target:
//! - `Global`: raw terminal input and application lifetime
//! - `Prompt` / `Selector`: the overlay that is currently asking the user
//! - `Flow`: the branch creation workflow
//! - `StatusBar`: notifications

pub mod flow;
pub mod global;
pub mod prompt;
pub mod selector;
pub mod status_bar;

pub use flow::FlowAction;
pub use global::GlobalAction;
pub use prompt::PromptAction;
pub use selector::SelectorAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (key presses, focus, quit)
    Global(GlobalAction),
    /// Text prompt overlay
    Prompt(PromptAction),
    /// Base branch selector overlay
    Selector(SelectorAction),
    /// Branch creation workflow
    Flow(FlowAction),
    /// Status bar notifications
    StatusBar(StatusBarAction),
}
