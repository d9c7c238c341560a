pub mod app_reducer;
pub mod flow_reducer;
pub mod prompt_reducer;
pub mod selector_reducer;
pub mod status_bar_reducer;
