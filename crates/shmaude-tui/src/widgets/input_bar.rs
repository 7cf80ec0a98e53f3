//! Input box widget.
//!
//! Grows with its content up to a fixed number of rows, then scrolls to keep
//! the cursor visible. Text is broken at cell boundaries so the cursor maps
//! onto exactly one cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use shmaude_engine::Composer;

use crate::layout::InputParts;
use crate::text::{hard_wrap, hard_wrap_cursor, truncate_to_width};
use crate::theme::{BorderSet, IconSet, Theme};

/// Hint shown while the composer is empty.
pub const INPUT_PLACEHOLDER: &str = "Message Shmaude...";

/// Bordered input with attach and send controls.
pub struct InputBar<'a> {
    composer: &'a Composer,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
    send_enabled: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(
        composer: &'a Composer,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            composer,
            theme,
            icons,
            borders,
            send_enabled: false,
        }
    }

    /// Whether the send control is live.
    #[must_use]
    pub fn send_enabled(mut self, enabled: bool) -> Self {
        self.send_enabled = enabled;
        self
    }

    fn render_text(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = usize::from(area.width);
        let height = usize::from(area.height);

        if self.composer.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                truncate_to_width(INPUT_PLACEHOLDER, width),
                Style::default().fg(self.theme.muted),
            );
            self.render_cursor(area.x, area.y, buf);
            return;
        }

        let rows = hard_wrap(self.composer.text(), width);
        let (cursor_row, cursor_col) =
            hard_wrap_cursor(self.composer.text(), width, self.composer.cursor());
        let first = (cursor_row + 1).saturating_sub(height);

        let style = Style::default().fg(self.theme.text);
        for (offset, row) in rows.iter().skip(first).take(height).enumerate() {
            // `offset < height <= u16::MAX`
            let y = area.y + u16::try_from(offset).unwrap_or(0);
            buf.set_stringn(area.x, y, row, width, style);
        }

        let cursor_y = area.y + u16::try_from(cursor_row - first).unwrap_or(0);
        let cursor_x = area.x + u16::try_from(cursor_col).unwrap_or(0);
        self.render_cursor(cursor_x, cursor_y, buf);
    }

    fn render_cursor(&self, x: u16, y: u16, buf: &mut Buffer) {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_style(
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::REVERSED),
            );
        }
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.border_focused))
            .render(area, buf);

        let parts = InputParts::compute(area);
        self.render_text(parts.text, buf);

        buf.set_string(
            parts.attach.x,
            parts.attach.y,
            self.icons.attach(),
            Style::default().fg(self.theme.muted),
        );

        let send_style = if self.send_enabled {
            Style::default()
                .fg(self.theme.base)
                .bg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::DIM)
        };
        buf.set_string(
            parts.send.x,
            parts.send.y,
            format!("[{}]", self.icons.send()),
            send_style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    fn render(composer: &Composer, send_enabled: bool, height: u16) -> Buffer {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let borders = BorderSet::new(IconMode::Ascii);
        let area = Rect::new(0, 0, 40, height);
        let mut buf = Buffer::empty(area);
        InputBar::new(composer, &theme, &icons, &borders)
            .send_enabled(send_enabled)
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_empty_shows_placeholder_and_disabled_send() {
        let composer = Composer::new();
        let buf = render(&composer, false, 3);
        let out = buffer_to_string(&buf);
        assert!(out.contains("Message Shmaude..."));
        assert!(out.contains("@ [^]"));

        let send = InputParts::compute(buf.area).send;
        let cell = &buf[(send.x, send.y)];
        assert!(cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_enabled_send_is_not_dimmed() {
        let mut composer = Composer::new();
        composer.set_text("hello");
        let buf = render(&composer, true, 3);
        let send = InputParts::compute(buf.area).send;
        let cell = &buf[(send.x + 1, send.y)];
        assert!(!cell.modifier.contains(Modifier::DIM));
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cursor_cell_is_reversed() {
        let mut composer = Composer::new();
        composer.set_text("hello");
        composer.move_home();
        let buf = render(&composer, true, 3);
        let text = InputParts::compute(buf.area).text;

        let cell = &buf[(text.x, text.y)];
        assert_eq!(cell.symbol(), "h");
        assert!(cell.modifier.contains(Modifier::REVERSED));
        assert!(!buf[(text.x + 1, text.y)]
            .modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn test_multiline_scrolls_to_cursor() {
        let mut composer = Composer::new();
        composer.set_text("one\ntwo\nthree\nfour");
        // Room for two text rows only.
        let buf = render(&composer, true, 4);
        let out = buffer_to_string(&buf);
        assert!(out.contains("three"));
        assert!(out.contains("four"));
        assert!(!out.contains("one"));
    }
}
