//! Application state and update logic for the shmaude TUI.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use shmaude_engine::{
    ChatSession, Config, MemoryStore, PreferenceStore, SubmitOutcome, ThemeController,
};
use tracing::{debug, info};

use crate::event::{key_to_action, Action, Event};
use crate::layout::{ClickTarget, ShellLayout};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::widgets::MessageList;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Conversation, composer and reply lifecycle.
    pub session: ChatSession,
    /// Persisted dark-mode flag.
    pub theme_pref: ThemeController,
    /// Palette matching the current flag.
    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,
    /// Animation counter, advanced on every tick.
    pub tick: u64,
    /// Lines scrolled up from the newest message.
    pub scroll: usize,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    /// Last known terminal size `(width, height)`.
    pub terminal_size: (u16, u16),
}

impl App {
    /// Create the app from configuration and a preference store.
    pub fn new(config: &Config, store: Box<dyn PreferenceStore>) -> Self {
        let icon_mode = IconMode::from_config(config.icons);
        Self::with_parts(
            ChatSession::new(config),
            ThemeController::load(store),
            icon_mode,
        )
    }

    /// App with in-memory storage, ASCII icons and a 100x30 terminal.
    pub fn new_for_test() -> Self {
        Self::with_parts(
            ChatSession::new(&Config::default()),
            ThemeController::load(Box::new(MemoryStore::new())),
            IconMode::Ascii,
        )
    }

    fn with_parts(session: ChatSession, theme_pref: ThemeController, icon_mode: IconMode) -> Self {
        let theme = Theme::for_mode(theme_pref.is_dark());
        Self {
            session,
            theme_pref,
            theme,
            icons: IconSet::new(icon_mode),
            borders: BorderSet::new(icon_mode),
            tick: 0,
            scroll: 0,
            show_help: false,
            should_quit: false,
            terminal_size: (100, 30),
        }
    }

    /// Whether the dark palette is active.
    pub fn is_dark(&self) -> bool {
        self.theme_pref.is_dark()
    }

    /// Layout for the current terminal size and composer.
    pub fn layout(&self) -> Option<ShellLayout> {
        let (width, height) = self.terminal_size;
        ShellLayout::compute(Rect::new(0, 0, width, height), self.session.composer())
    }

    /// Largest scroll offset for the current message list.
    pub fn max_scroll(&self) -> usize {
        self.layout().map_or(0, |layout| {
            MessageList::new(self.session.messages(), &self.theme, &self.icons)
                .max_scroll(layout.messages)
        })
    }

    /// Dispatch one terminal event, then apply any replies that finished.
    ///
    /// Replies are drained after every event, not only on ticks: a steady
    /// stream of mouse or key events starves the tick timer.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Tick => self.tick(),
            Event::Resize(width, height) => self.resize(width, height),
        }
        self.sync_replies();
    }

    /// Advance animations and apply completed replies.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.sync_replies();
    }

    /// Apply completed replies and jump to the newest message if any landed.
    pub fn sync_replies(&mut self) {
        if self.session.poll_replies() > 0 {
            self.scroll = 0;
        }
    }

    /// Record a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_action(key_to_action(key));
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.toggle_theme(),
            Action::NewConversation => self.new_conversation(),
            Action::Submit => self.submit(),
            Action::InsertNewline => self.session.composer_mut().insert_newline(),
            Action::Insert(ch) => self.session.composer_mut().insert(ch),
            Action::Backspace => self.session.composer_mut().backspace(),
            Action::Delete => self.session.composer_mut().delete(),
            Action::Left => self.session.composer_mut().move_left(),
            Action::Right => self.session.composer_mut().move_right(),
            Action::Home => self.session.composer_mut().move_home(),
            Action::End => self.session.composer_mut().move_end(),
            Action::ScrollUp => self.scroll_up(1),
            Action::ScrollDown => self.scroll_down(1),
            Action::PageUp => self.scroll_up(self.page_size()),
            Action::PageDown => self.scroll_down(self.page_size()),
            Action::ScrollToBottom => self.scroll = 0,
            Action::Back | Action::Help | Action::None => {}
        }
    }

    /// Handle a mouse event: wheel scrolling and clicks on controls.
    ///
    /// While help is open, a wheel notch or click only closes it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let closes_help = matches!(
            mouse.kind,
            MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown
                | MouseEventKind::Down(MouseButton::Left)
        );
        if self.show_help && closes_help {
            self.show_help = false;
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self
                    .layout()
                    .and_then(|layout| layout.hit_test(mouse.column, mouse.row));
                match target {
                    Some(ClickTarget::NewConversation) => self.new_conversation(),
                    Some(ClickTarget::ThemeToggle) => self.toggle_theme(),
                    Some(ClickTarget::Send) => self.submit(),
                    None => {}
                }
            }
            _ => {}
        }
    }

    /// Insert pasted text into the composer. A paste over the help overlay
    /// only closes it.
    pub fn handle_paste(&mut self, text: &str) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.session.composer_mut().insert_str(&normalized);
    }

    /// Submit the composer contents.
    pub fn submit(&mut self) {
        match self.session.submit() {
            SubmitOutcome::Sent { placeholder, .. } => {
                debug!(placeholder = %placeholder, "message sent");
                self.scroll = 0;
            }
            SubmitOutcome::Busy => debug!("send ignored while a reply is pending"),
            SubmitOutcome::Empty => {}
        }
    }

    /// Flip between light and dark palettes.
    pub fn toggle_theme(&mut self) {
        let dark = self.theme_pref.toggle();
        self.theme = Theme::for_mode(dark);
        info!(dark, "theme toggled");
    }

    /// Clear the conversation and cancel any reply in flight.
    pub fn new_conversation(&mut self) {
        self.session.reset();
        self.scroll = 0;
    }

    /// Abort outstanding work before exit.
    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    fn page_size(&self) -> usize {
        self.layout()
            .map_or(1, |layout| usize::from(layout.messages.height.saturating_sub(1)).max(1))
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}
