//! Base branch selector popup

use crate::views::prompt_view::modal_area;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tb_flow::SelectorState;

pub fn render(selector: &SelectorState, area: Rect, f: &mut Frame) {
    let base = modal_area(area);
    let height = u16::try_from(selector.options.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);
    let popup_area = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..base
    };

    f.render_widget(Clear, popup_area);

    let lines: Vec<Line> = selector
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == selector.highlighted {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(format!(" {} ", option), style),
            ])
        })
        .collect();

    let footer_hint = Line::from(vec![
        Span::styled(" 1-9/Enter", Style::default().fg(Color::Yellow).bold()),
        Span::styled(" select  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow).bold()),
        Span::styled(" back ", Style::default().fg(Color::Gray)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", selector.title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}
