//! Sidebar widget: brand, new conversation button, recent chats, theme
//! toggle and profile card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::layout::{sidebar_content, SidebarLayout};
use crate::text::truncate_to_width;
use crate::theme::{IconSet, Theme};

/// Static entries of the "Recent Chats" list. The first one is active.
const RECENT_CHATS: [&str; 2] = ["Current Chat", "Research Assistant"];

const PROFILE_AVATAR: &str = "RT";
const PROFILE_NAME: &str = "Rhamsez Thevenin";
const PROFILE_PLAN: &str = "Premium";

/// Sidebar panel.
pub struct Sidebar<'a> {
    theme: &'a Theme,
    icons: &'a IconSet,
    dark: bool,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            theme,
            icons,
            dark: false,
        }
    }

    /// Set the state shown by the theme toggle.
    #[must_use]
    pub fn dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    fn brand(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                " S ",
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Shmaude",
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn theme_toggle(&self) -> Line<'static> {
        let thumb = self.icons.active();
        let (track, icon) = if self.dark {
            (format!("(  {thumb})"), self.icons.moon())
        } else {
            (format!("({thumb}  )"), self.icons.sun())
        };
        let track_color = if self.dark {
            self.theme.primary
        } else {
            self.theme.muted
        };
        Line::from(vec![
            Span::styled(track, Style::default().fg(track_color)),
            Span::raw(" "),
            Span::styled(icon.to_string(), Style::default().fg(self.theme.assistant)),
            Span::styled(" Dark Mode", Style::default().fg(self.theme.text)),
        ])
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);

        let parts = SidebarLayout::compute(sidebar_content(area));
        let width = usize::from(parts.brand.width);

        Paragraph::new(self.brand()).render(parts.brand, buf);

        let button = truncate_to_width(
            &format!(" {} New conversation", self.icons.new_chat()),
            width,
        );
        Paragraph::new(button)
            .style(
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .render(parts.new_chat, buf);

        Paragraph::new("RECENT CHATS")
            .style(
                Style::default()
                    .fg(self.theme.muted)
                    .add_modifier(Modifier::BOLD),
            )
            .render(parts.recent_title, buf);

        let icons = [self.icons.chat(), self.icons.search()];
        let items: Vec<Line<'static>> = RECENT_CHATS
            .iter()
            .zip(icons)
            .enumerate()
            .map(|(i, (title, icon))| {
                let label = truncate_to_width(&format!(" {icon} {title}"), width);
                if i == 0 {
                    Line::styled(
                        format!("{label:<width$}"),
                        Style::default().fg(self.theme.text).bg(self.theme.overlay),
                    )
                } else {
                    Line::styled(label, Style::default().fg(self.theme.subtext))
                }
            })
            .collect();
        Paragraph::new(items).render(parts.recent_items, buf);

        Paragraph::new(self.theme_toggle()).render(parts.theme_toggle, buf);

        Paragraph::new("─".repeat(width))
            .style(Style::default().fg(self.theme.border))
            .render(parts.divider, buf);

        let profile = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {PROFILE_AVATAR} "),
                    Style::default()
                        .fg(self.theme.base)
                        .bg(self.theme.user)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {PROFILE_NAME}"),
                    Style::default()
                        .fg(self.theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::styled(
                format!("     {PROFILE_PLAN}"),
                Style::default().fg(self.theme.muted),
            ),
        ];
        Paragraph::new(profile).render(parts.profile, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::IconMode;

    fn render(dark: bool) -> String {
        let theme = Theme::for_mode(dark);
        let icons = IconSet::new(IconMode::Unicode);
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&theme, &icons).dark(dark).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_sidebar_static_content() {
        let out = render(false);
        assert!(out.contains("Shmaude"));
        assert!(out.contains("+ New conversation"));
        assert!(out.contains("RECENT CHATS"));
        assert!(out.contains("◆ Current Chat"));
        assert!(out.contains("Research Assistant"));
        assert!(out.contains("Rhamsez Thevenin"));
        assert!(out.contains("Premium"));
    }

    #[test]
    fn test_toggle_reflects_theme() {
        let light = render(false);
        assert!(light.contains("(●  ) ☀ Dark Mode"));

        let dark = render(true);
        assert!(dark.contains("(  ●) ☾ Dark Mode"));
    }
}
