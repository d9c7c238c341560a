//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 2 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let mut x = area.x + 1;
        let right = area.x + area.width;

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            let (next_x, _) =
                buf.set_stringn(x, area.y, &ts_str, usize::from(right - x), vm.metadata_style);
            x = next_x;
        }

        // emoji usually renders two cells wide
        let (next_x, _) = buf.set_stringn(
            x,
            area.y,
            format!("{} ", vm.emoji),
            usize::from(right.saturating_sub(x)),
            vm.message_style,
        );
        x = next_x;

        let available = usize::from(right.saturating_sub(x + 1));
        if vm.message.chars().count() > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_stringn(x, area.y, format!("{}…", truncated), available, vm.message_style);
        } else {
            buf.set_stringn(x, area.y, &vm.message, available, vm.message_style);
        }
    }
}
