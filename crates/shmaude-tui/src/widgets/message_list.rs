//! Message list and welcome panel.
//!
//! ```text
//!   S   Shmaude · 14:02  Analyzed input and formulated response.
//!      You said: "hello"
//!      ⧉ Copy  ▲  ▼  ⟳ Regenerate
//!
//!   RT  You · 14:02
//!      hello
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use shmaude_engine::{Message, Sender};

use crate::layout::centered_fixed;
use crate::text::{truncate_to_width, visual_width, wrap_text};
use crate::theme::{IconSet, Theme};

/// Left indent of message bodies, aligned past the avatar.
const BODY_INDENT: &str = "     ";

/// Horizontal padding on each side of the list.
const SIDE_PADDING: u16 = 2;

/// Ticks each typing dot stays lit.
const TICKS_PER_DOT: u64 = 3;

/// Scrollable list of messages.
pub struct MessageList<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
    icons: &'a IconSet,
    tick: u64,
    scroll: usize,
}

impl<'a> MessageList<'a> {
    /// Create a new message list widget.
    pub fn new(messages: &'a [Message], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            messages,
            theme,
            icons,
            tick: 0,
            scroll: 0,
        }
    }

    /// Animation tick for the typing indicator.
    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Lines scrolled up from the newest message.
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Largest useful scroll offset for the list drawn in `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        let content = content_area(area);
        self.lines(usize::from(content.width))
            .len()
            .saturating_sub(usize::from(content.height))
    }

    /// Build every display line for the given content width.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(self.header_line(message, width));
            if message.is_placeholder() {
                lines.push(self.typing_line());
            } else {
                let body_width = width.saturating_sub(BODY_INDENT.len()).max(1);
                let style = Style::default().fg(self.theme.text);
                for row in wrap_text(&message.text, body_width) {
                    lines.push(Line::styled(format!("{BODY_INDENT}{row}"), style));
                }
            }
            if message.has_actions() {
                lines.push(self.actions_line());
            }
        }
        lines
    }

    fn header_line(&self, message: &Message, width: usize) -> Line<'static> {
        let accent = match message.sender {
            Sender::User => self.theme.user,
            Sender::Assistant => self.theme.assistant,
        };
        let avatar = format!("{:^4}", message.sender.avatar());
        let meta = format!(" {} · {}", message.sender.display_name(), message.time_label());
        let used = visual_width(&avatar) + visual_width(&meta);

        let mut spans = vec![
            Span::styled(
                avatar,
                Style::default()
                    .fg(self.theme.base)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                meta,
                Style::default()
                    .fg(self.theme.subtext)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(thinking) = message.visible_thinking() {
            let room = width.saturating_sub(used + 2);
            if room > 0 {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    truncate_to_width(thinking, room),
                    Style::default()
                        .fg(self.theme.muted)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
        }

        Line::from(spans)
    }

    fn typing_line(&self) -> Line<'static> {
        let (filled, empty) = self.icons.typing_dots();
        let lit = (self.tick / TICKS_PER_DOT) % 3;
        let mut spans = vec![Span::raw(BODY_INDENT)];
        for dot in 0..3 {
            if dot > 0 {
                spans.push(Span::raw(" "));
            }
            let (symbol, color) = if dot == lit {
                (filled, self.theme.assistant)
            } else {
                (empty, self.theme.muted)
            };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        Line::from(spans)
    }

    fn actions_line(&self) -> Line<'static> {
        let style = Style::default().fg(self.theme.muted);
        Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(format!("{} Copy", self.icons.copy()), style),
            Span::raw("  "),
            Span::styled(self.icons.like(), style),
            Span::raw("  "),
            Span::styled(self.icons.dislike(), style),
            Span::raw("  "),
            Span::styled(format!("{} Regenerate", self.icons.regenerate()), style),
        ])
    }
}

impl Widget for MessageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = content_area(area);
        if content.width == 0 || content.height == 0 {
            return;
        }

        let lines = self.lines(usize::from(content.width));
        let height = usize::from(content.height);
        let max_scroll = lines.len().saturating_sub(height);
        let top = max_scroll - self.scroll.min(max_scroll);

        Paragraph::new(lines)
            .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0))
            .render(content, buf);
    }
}

/// Inner area of the list after side padding.
fn content_area(area: Rect) -> Rect {
    Rect::new(
        area.x + SIDE_PADDING.min(area.width),
        area.y,
        area.width.saturating_sub(SIDE_PADDING * 2),
        area.height,
    )
}

/// Panel shown instead of the list while the conversation is empty.
pub struct WelcomePanel<'a> {
    theme: &'a Theme,
}

impl<'a> WelcomePanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for WelcomePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                " S ",
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                "Welcome to Shmaude",
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Your AI assistant with refined design.",
                Style::default().fg(self.theme.subtext),
            ),
            Line::styled(
                "How may I assist you today?",
                Style::default().fg(self.theme.subtext),
            ),
        ];
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let panel = centered_fixed(area.width, height, area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(panel, buf);
    }
}
