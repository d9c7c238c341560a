pub mod prompt;
pub mod status_bar;

pub use prompt::PromptViewModel;
pub use status_bar::StatusBarViewModel;
