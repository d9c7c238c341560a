//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::AppState;
use chrono::{DateTime, Local};
use ratatui::style::{Color, Modifier, Style};
use tb_flow::Severity;

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Emoji/icon for the status
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Foreground style (color based on severity)
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for the timestamp
    pub metadata_style: Style,
}

fn emoji(level: Severity) -> &'static str {
    match level {
        Severity::Info => "ℹ️",
        Severity::Warning => "⚠️",
        Severity::Error => "🚨",
    }
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState, now: DateTime<Local>) -> Self {
        let metadata_style = Style::default().fg(Color::DarkGray);

        match state.status_bar.visible(now) {
            Some(msg) => {
                let fg = match msg.level {
                    Severity::Info => Color::Cyan,
                    Severity::Warning => Color::Yellow,
                    Severity::Error => Color::Red,
                };
                Self {
                    emoji: emoji(msg.level),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    bg_color: Color::Reset,
                    metadata_style,
                }
            }
            None => Self {
                emoji: "🌿",
                message: "n: new branch  q: quit".to_string(),
                timestamp: String::new(),
                message_style: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                bg_color: Color::Reset,
                metadata_style,
            },
        }
    }
}
