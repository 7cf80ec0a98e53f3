//! Chat header: title, active badge, and the (inert) share and settings actions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{IconSet, Theme};

/// Header above the message list.
pub struct ChatHeader<'a> {
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> ChatHeader<'a> {
    /// Create a new header widget.
    pub fn new(theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self { theme, icons }
    }
}

impl Widget for ChatHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let title_row = Rect::new(area.x, area.y, area.width, 1);

        let title = Line::from(vec![
            Span::styled(
                " Current Chat ",
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} Active", self.icons.active()),
                Style::default().fg(self.theme.success),
            ),
        ]);
        Paragraph::new(title).render(title_row, buf);

        let actions = Line::from(vec![
            Span::styled(
                format!("{} Share", self.icons.share()),
                Style::default().fg(self.theme.subtext),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} ", self.icons.settings()),
                Style::default().fg(self.theme.subtext),
            ),
        ]);
        Paragraph::new(actions)
            .alignment(Alignment::Right)
            .render(title_row, buf);

        if area.height > 1 {
            let divider = Rect::new(area.x, area.y + 1, area.width, 1);
            Paragraph::new("─".repeat(usize::from(area.width)))
                .style(Style::default().fg(self.theme.border))
                .render(divider, buf);
        }
    }
}
