use crate::state::AppState;
use crate::view_models::StatusBarViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use tb_config::PromptStyle;

pub mod main_view;
pub mod prompt_view;
pub mod selector_view;
pub mod status_bar;

/// Render the entire application UI
///
/// The main screen and status bar are always drawn; an open prompt or
/// selector is drawn on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let inline_prompt = state
        .prompt
        .as_ref()
        .filter(|_| state.config.prompt_style == PromptStyle::Inline);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(u16::from(inline_prompt.is_some())),
            Constraint::Length(1),
        ])
        .split(area);

    main_view::render(state, chunks[0], f);

    let status = StatusBarViewModel::from_state(state, chrono::Local::now());
    f.render_widget(status_bar::StatusBarWidget(&status), chunks[2]);

    match (&state.prompt, inline_prompt) {
        (Some(prompt), Some(_)) => prompt_view::render_inline(prompt, chunks[1], f),
        (Some(prompt), None) => prompt_view::render_modal(prompt, area, f),
        (None, _) => {}
    }

    if let Some(selector) = &state.selector {
        selector_view::render(selector, area, f);
    }
}
