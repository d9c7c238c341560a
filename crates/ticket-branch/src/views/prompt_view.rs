//! Prompt View
//!
//! Two presentations of the same prompt state: a centered floating popup or a
//! single input line above the status bar.

use crate::view_models::PromptViewModel;
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tb_flow::PromptState;

/// Popup area: 60% of the width clamped to 40..=80 columns and to the screen
pub fn modal_area(area: Rect) -> Rect {
    let width = ((u32::from(area.width) * 60 / 100) as u16)
        .clamp(40, 80)
        .min(area.width);
    let height = 5.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the prompt as a centered floating window
pub fn render_modal(prompt: &PromptState, area: Rect, f: &mut Frame) {
    let vm = PromptViewModel::from_state(prompt);
    let popup_area = modal_area(area);

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::raw(" "),
        Span::styled(vm.confirm_hint, Style::default().fg(Color::Yellow).bold()),
        Span::styled(" confirm  ", Style::default().fg(Color::Gray)),
        Span::styled(vm.cancel_hint, Style::default().fg(Color::Yellow).bold()),
        Span::styled(" cancel ", Style::default().fg(Color::Gray)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 2,
    });
    if inner.height == 0 || inner.width == 0 {
        return;
    }
    render_input(&vm, inner, f);
}

/// Render the prompt as `Label: value` on a single line
pub fn render_inline(prompt: &PromptState, area: Rect, f: &mut Frame) {
    let vm = PromptViewModel::from_state(prompt);
    let label = format!("{}: ", vm.title);
    let label_width = u16::try_from(label.chars().count()).unwrap_or(area.width);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(Color::Cyan).bold())),
        area,
    );

    let input_area = Rect {
        x: area.x + label_width.min(area.width),
        width: area.width.saturating_sub(label_width),
        ..area
    };
    if input_area.width > 0 {
        render_input(&vm, input_area, f);
    }
}

/// Input text scrolled so the cursor stays visible, plus the terminal cursor
fn render_input(vm: &PromptViewModel, area: Rect, f: &mut Frame) {
    let visible = area.width.saturating_sub(1);
    let offset = vm.cursor_column.saturating_sub(visible);
    let text: String = vm.value.chars().skip(usize::from(offset)).collect();

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::White),
        ))),
        area,
    );
    f.set_cursor_position(Position::new(
        area.x + (vm.cursor_column - offset),
        area.y,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_width_is_clamped() {
        assert_eq!(modal_area(Rect::new(0, 0, 200, 40)).width, 80);
        assert_eq!(modal_area(Rect::new(0, 0, 100, 40)).width, 60);
        assert_eq!(modal_area(Rect::new(0, 0, 50, 40)).width, 40);
        assert_eq!(modal_area(Rect::new(0, 0, 30, 40)).width, 30);
    }

    #[test]
    fn test_modal_is_centered() {
        let area = modal_area(Rect::new(0, 0, 100, 21));
        assert_eq!((area.x, area.y, area.height), (20, 8, 5));
    }
}
