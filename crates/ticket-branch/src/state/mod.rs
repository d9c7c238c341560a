mod app;
mod flow;
mod status_bar;

pub use app::AppState;
pub use flow::FlowStatus;
pub use status_bar::{StatusBarState, StatusMessage};
