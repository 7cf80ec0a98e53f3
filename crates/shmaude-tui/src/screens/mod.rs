//! Screen definitions for the shmaude TUI.

pub mod chat;

use crate::app::App;
use crate::layout::{centered_fixed, MIN_HEIGHT, MIN_WIDTH};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the whole frame: the chat screen, or a notice when the terminal is
/// too small, plus the help overlay when open.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(&app.theme, area, buf);
        return;
    }

    chat::ChatScreen.render(app, area, buf);

    if app.show_help {
        render_help_overlay(&app.theme, area, buf);
    }
}

/// Render the help overlay.
pub fn render_help_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Enter                 Send message
  Shift+Enter           New line
  Alt+Enter / Ctrl+J    New line
  Left/Right Home/End   Move cursor
  Backspace / Delete    Erase text
  Up / Down             Scroll one line
  PgUp / PgDn           Scroll a page
  Ctrl+End              Jump to newest
  Ctrl+T                Toggle dark mode
  Ctrl+N                New conversation
  F1 / Esc              Close this help
  Ctrl+C / Ctrl+Q       Quit

  [Press any key to close]
";

    let width = 46.min(area.width.saturating_sub(4));
    let height = 17.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().fg(theme.text).bg(theme.base));

    Paragraph::new(help_text).block(block).render(overlay_area, buf);
}

/// Render the notice shown below the minimum terminal size.
pub fn render_too_small(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Need {MIN_WIDTH}x{MIN_HEIGHT}, have {}x{}", area.width, area.height),
            Style::default().fg(theme.muted),
        ),
    ];
    let notice = centered_fixed(area.width, 2, area);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(notice, buf);
}
