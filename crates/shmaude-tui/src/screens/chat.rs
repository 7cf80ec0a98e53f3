//! The chat screen: sidebar, header, messages, input and footer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};

use crate::app::App;
use crate::layout::ShellLayout;
use crate::screens::Screen;
use crate::widgets::{ChatHeader, InputBar, MessageList, ModelFooter, Sidebar, WelcomePanel};

/// The single chat screen.
pub struct ChatScreen;

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Some(layout) = ShellLayout::compute(area, app.session.composer()) else {
            return;
        };

        Block::default()
            .style(Style::default().fg(app.theme.text).bg(app.theme.base))
            .render(area, buf);

        Sidebar::new(&app.theme, &app.icons)
            .dark(app.is_dark())
            .render(layout.sidebar, buf);

        ChatHeader::new(&app.theme, &app.icons).render(layout.header, buf);

        let messages = app.session.messages();
        if messages.is_empty() {
            WelcomePanel::new(&app.theme).render(layout.messages, buf);
        } else {
            MessageList::new(messages, &app.theme, &app.icons)
                .tick(app.tick)
                .scroll(app.scroll)
                .render(layout.messages, buf);
        }

        InputBar::new(app.session.composer(), &app.theme, &app.icons, &app.borders)
            .send_enabled(app.session.can_send())
            .render(layout.input, buf);

        ModelFooter::new(&app.theme).render(layout.footer, buf);
    }
}
