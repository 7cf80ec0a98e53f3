//! Model badge and disclaimer under the input.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::Theme;

pub const MODEL_NAME: &str = "Shmaude Sonnet 4";
pub const DISCLAIMER: &str = "Shmaude may produce inaccurate information. Verify important content.";

/// Footer line: `AI Shmaude Sonnet 4 · <disclaimer>`.
pub struct ModelFooter<'a> {
    theme: &'a Theme,
}

impl<'a> ModelFooter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ModelFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let badge = " AI ";
        let model = format!(" {MODEL_NAME}");
        let separator = " · ";
        let used = visual_width(badge) + visual_width(&model) + visual_width(separator);
        let room = usize::from(area.width).saturating_sub(used);

        let mut spans = vec![
            Span::styled(
                badge,
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                model,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if room > 0 {
            spans.push(Span::styled(separator, Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                truncate_to_width(DISCLAIMER, room),
                Style::default().fg(self.theme.muted),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
