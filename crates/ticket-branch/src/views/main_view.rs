use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tb_flow::{FlowOutcome, FlowState};

fn state_line(state: FlowState, fetching: bool) -> Line<'static> {
    let text = match state {
        FlowState::Idle => "Ready",
        FlowState::CheckEnvironment => "Checking repository…",
        FlowState::AwaitTicket => "Waiting for a ticket",
        FlowState::ResolveTitle if fetching => "Fetching ticket title…",
        FlowState::ResolveTitle => "Resolving ticket",
        FlowState::AwaitBranchName => "Waiting for a branch name",
        FlowState::AwaitBaseBranch => "Waiting for a base branch",
        FlowState::ValidateBase => "Checking base branch…",
        FlowState::ValidateExisting => "Checking for an existing branch…",
        FlowState::Execute => "Creating branch…",
        FlowState::Done => "Done",
        FlowState::Cancelled => "Cancelled",
        FlowState::Failed => "Failed",
    };
    Line::from(Span::styled(text, Style::default().fg(Color::Cyan).bold()))
}

fn outcome_line(outcome: &FlowOutcome) -> Line<'static> {
    let (text, color) = match outcome {
        FlowOutcome::Created { branch, base } => {
            (format!("Created {} from {}", branch, base), Color::Green)
        }
        FlowOutcome::CreatedLocally { branch, base } => (
            format!("Created {} from {} (not pushed)", branch, base),
            Color::Yellow,
        ),
        FlowOutcome::Switched { branch } => (format!("Switched to {}", branch), Color::Green),
        FlowOutcome::Cancelled => ("Cancelled".to_string(), Color::DarkGray),
        FlowOutcome::Failed { error } => (error.clone(), Color::Red),
    };
    Line::from(Span::styled(text, Style::default().fg(color)))
}

fn key_hint(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow).bold()),
        Span::styled(description, Style::default().fg(Color::Gray)),
    ])
}

/// Render the main screen
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(" ticket-branch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let mut text = vec![
        Line::from(""),
        state_line(state.flow.state, state.flow.is_fetching()),
        Line::from(""),
    ];
    if let Some(outcome) = &state.flow.last_outcome {
        text.push(outcome_line(outcome));
        text.push(Line::from(""));
    }
    text.push(Line::from(Span::styled(
        "Controls:",
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));
    text.push(key_hint("  n       ", "- Create a branch from a ticket"));
    text.push(key_hint("  q       ", "- Quit"));
    text.push(key_hint("  Ctrl+C  ", "- Cancel the open prompt / quit"));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
