//! Event handling for the shmaude TUI.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Text pasted into the terminal (bracketed paste).
    Paste(String),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that polls the terminal on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Crossterm polling blocks, so it gets its own thread.
        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::Paste(text)) => Some(Event::Paste(text)),
                    Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                }
            } else {
                Some(Event::Tick)
            };
            if let Some(e) = event {
                if tx_clone.send(e).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    Back,
    ToggleTheme,
    NewConversation,
    Submit,
    InsertNewline,
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToBottom,
    None,
}

/// Convert a key event to an action.
///
/// Plain `Enter` always submits. Terminals rarely report `Shift+Enter`, so
/// `Alt+Enter` and `Ctrl+J` insert a newline as well.
pub fn key_to_action(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c' | 'q') => Action::Quit,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('n') => Action::NewConversation,
            KeyCode::Char('j') => Action::InsertNewline,
            KeyCode::End => Action::ScrollToBottom,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter if shift || alt => Action::InsertNewline,
        KeyCode::Enter => Action::Submit,
        KeyCode::F(1) => Action::Help,
        KeyCode::Esc => Action::Back,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Home => Action::Home,
        KeyCode::End => Action::End,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Char(c) if !alt => Action::Insert(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_enter_submits() {
        assert_eq!(key_to_action(key(KeyCode::Enter)), Action::Submit);
    }

    #[test]
    fn test_newline_chords() {
        assert_eq!(
            key_to_action(with(KeyCode::Enter, KeyModifiers::SHIFT)),
            Action::InsertNewline
        );
        assert_eq!(
            key_to_action(with(KeyCode::Enter, KeyModifiers::ALT)),
            Action::InsertNewline
        );
        assert_eq!(
            key_to_action(with(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Action::InsertNewline
        );
    }

    #[test]
    fn test_control_chords() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(key_to_action(with(KeyCode::Char('c'), ctrl)), Action::Quit);
        assert_eq!(key_to_action(with(KeyCode::Char('q'), ctrl)), Action::Quit);
        assert_eq!(
            key_to_action(with(KeyCode::Char('t'), ctrl)),
            Action::ToggleTheme
        );
        assert_eq!(
            key_to_action(with(KeyCode::Char('n'), ctrl)),
            Action::NewConversation
        );
        assert_eq!(key_to_action(with(KeyCode::Char('x'), ctrl)), Action::None);
    }

    #[test]
    fn test_plain_letters_are_text() {
        // Plain letters never trigger actions.
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Insert('q'));
        assert_eq!(
            key_to_action(with(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Action::Insert('Q')
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_action(key(KeyCode::F(1))), Action::Help);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Back);
        assert_eq!(key_to_action(key(KeyCode::PageUp)), Action::PageUp);
        assert_eq!(key_to_action(key(KeyCode::PageDown)), Action::PageDown);
        assert_eq!(key_to_action(key(KeyCode::Home)), Action::Home);
        assert_eq!(
            key_to_action(with(KeyCode::End, KeyModifiers::CONTROL)),
            Action::ScrollToBottom
        );
    }
}
