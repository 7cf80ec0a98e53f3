//! In-memory conversation store.

use tracing::debug;

use crate::message::{Message, MessageId};

/// Ordered sequence of messages driving the message list.
///
/// Mutated only through [`append`](Self::append), [`replace`](Self::replace)
/// and [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the end.
    pub fn append(&mut self, message: Message) {
        debug!(id = %message.id, sender = ?message.sender, "append message");
        self.messages.push(message);
    }

    /// Substitute the message with `id` in place.
    ///
    /// Returns `false` without changing anything if `id` is not present.
    pub fn replace(&mut self, id: MessageId, message: Message) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(slot) => {
                debug!(old = %id, new = %message.id, "replace message");
                *slot = message;
                true
            }
            None => {
                debug!(id = %id, "replace target not found");
                false
            }
        }
    }

    /// Read-only view of all messages in insertion order.
    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    /// Look up a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{IdAllocator, Sender};

    #[test]
    fn test_append_preserves_order() {
        let mut ids = IdAllocator::new();
        let mut conv = Conversation::new();
        conv.append(Message::user(ids.next_id(), "one"));
        conv.append(Message::user(ids.next_id(), "two"));

        let texts: Vec<&str> = conv.list().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_replace_in_place() {
        let mut ids = IdAllocator::new();
        let mut conv = Conversation::new();
        conv.append(Message::user(ids.next_id(), "hi"));
        let placeholder = Message::placeholder(ids.next_id());
        let placeholder_id = placeholder.id;
        conv.append(placeholder);
        conv.append(Message::user(ids.next_id(), "after"));

        let reply = Message::reply(ids.next_id(), "hi");
        let reply_id = reply.id;
        assert!(conv.replace(placeholder_id, reply));

        assert_eq!(conv.len(), 3);
        assert_eq!(conv.list()[1].id, reply_id);
        assert_eq!(conv.list()[1].sender, Sender::Assistant);
        assert_eq!(conv.list()[2].text, "after");
        assert!(conv.get(placeholder_id).is_none());
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut ids = IdAllocator::new();
        let mut conv = Conversation::new();
        conv.append(Message::user(ids.next_id(), "hi"));

        let missing = ids.next_id();
        let replaced = conv.replace(missing, Message::reply(ids.next_id(), "hi"));

        assert!(!replaced);
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.list()[0].text, "hi");
    }

    #[test]
    fn test_clear() {
        let mut ids = IdAllocator::new();
        let mut conv = Conversation::new();
        conv.append(Message::user(ids.next_id(), "hi"));
        conv.clear();
        assert!(conv.is_empty());
    }
}
