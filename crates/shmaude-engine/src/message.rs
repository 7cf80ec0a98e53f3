//! Message types for the conversation.
//!
//! A [`Message`] is immutable once built. Placeholders are ordinary assistant
//! messages whose body is [`TYPING_SENTINEL`].

use chrono::{DateTime, Local};
use std::fmt;

/// Body of an assistant message whose reply is still being generated.
pub const TYPING_SENTINEL: &str = "...";

/// Annotation shown on a placeholder while the reply is pending.
pub const THINKING_PENDING: &str = "Crafting the perfect response...";

/// Annotation shown on a finalized reply.
pub const THINKING_DONE: &str = "Analyzed input and formulated response.";

/// Unique message identifier. Larger ids were allocated later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for [`MessageId`]s.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator starting at id 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next);
        self.next += 1;
        id
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The person typing.
    User,
    /// The simulated assistant.
    Assistant,
}

impl Sender {
    /// Display name shown in the message header.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Shmaude",
        }
    }

    /// Avatar initials.
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "RT",
            Self::Assistant => "S",
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Identifier, unique within a session.
    pub id: MessageId,
    /// Message body.
    pub text: String,
    /// Author.
    pub sender: Sender,
    /// Short annotation describing what the assistant did.
    pub thinking: Option<String>,
    /// Creation time.
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Create a user message stamped with the current time.
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            thinking: None,
            timestamp: Local::now(),
        }
    }

    /// Create an assistant placeholder rendered as a typing indicator.
    pub fn placeholder(id: MessageId) -> Self {
        Self {
            id,
            text: TYPING_SENTINEL.to_string(),
            sender: Sender::Assistant,
            thinking: Some(THINKING_PENDING.to_string()),
            timestamp: Local::now(),
        }
    }

    /// Create the finalized assistant reply for `prompt`.
    pub fn reply(id: MessageId, prompt: &str) -> Self {
        Self {
            id,
            text: echo_reply(prompt),
            sender: Sender::Assistant,
            thinking: Some(THINKING_DONE.to_string()),
            timestamp: Local::now(),
        }
    }

    /// Whether this message is a pending reply placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.sender == Sender::Assistant && self.text == TYPING_SENTINEL
    }

    /// Thinking annotation, only for assistant messages.
    pub fn visible_thinking(&self) -> Option<&str> {
        match self.sender {
            Sender::Assistant => self.thinking.as_deref(),
            Sender::User => None,
        }
    }

    /// Whether the copy/like/dislike/regenerate row applies.
    pub fn has_actions(&self) -> bool {
        self.sender == Sender::Assistant && !self.is_placeholder()
    }

    /// Creation time as `HH:MM`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Canned reply text that echoes the user's input.
pub fn echo_reply(prompt: &str) -> String {
    format!("You said: \"{prompt}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(b > a);
        assert_eq!(a.get(), 1);
        assert_eq!(b.to_string(), "#2");
    }

    #[test]
    fn test_echo_reply() {
        assert_eq!(echo_reply("hello"), "You said: \"hello\"");
    }

    #[test]
    fn test_placeholder_detection() {
        let mut ids = IdAllocator::new();
        let placeholder = Message::placeholder(ids.next_id());
        assert!(placeholder.is_placeholder());
        assert!(!placeholder.has_actions());
        assert_eq!(placeholder.visible_thinking(), Some(THINKING_PENDING));

        // A user literally typing "..." is not a placeholder.
        let user = Message::user(ids.next_id(), TYPING_SENTINEL);
        assert!(!user.is_placeholder());
    }

    #[test]
    fn test_thinking_hidden_for_user() {
        let mut ids = IdAllocator::new();
        let mut user = Message::user(ids.next_id(), "hi");
        user.thinking = Some("should not show".into());
        assert_eq!(user.visible_thinking(), None);
        assert!(!user.has_actions());
    }

    #[test]
    fn test_reply_has_actions() {
        let mut ids = IdAllocator::new();
        let reply = Message::reply(ids.next_id(), "hi");
        assert_eq!(reply.text, "You said: \"hi\"");
        assert!(reply.has_actions());
        assert_eq!(reply.visible_thinking(), Some(THINKING_DONE));
    }

    #[test]
    fn test_time_label_format() {
        let mut ids = IdAllocator::new();
        let msg = Message::user(ids.next_id(), "hi");
        let label = msg.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.display_name(), "You");
        assert_eq!(Sender::Assistant.display_name(), "Shmaude");
        assert_eq!(Sender::User.avatar(), "RT");
        assert_eq!(Sender::Assistant.avatar(), "S");
    }
}
