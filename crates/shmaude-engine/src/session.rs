//! Chat session: the single owner of conversation state.
//!
//! The UI reads snapshots through the accessors and mutates only through the
//! operations here, so every state transition happens in one place.

use std::time::Duration;

use tracing::{debug, info};

use crate::composer::Composer;
use crate::config::Config;
use crate::conversation::Conversation;
use crate::message::{IdAllocator, Message, MessageId};
use crate::reply::{ReplyPhase, ReplySimulator};

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A user message and its placeholder were appended.
    Sent {
        /// Id of the appended user message.
        user: MessageId,
        /// Id of the placeholder awaiting the reply.
        placeholder: MessageId,
    },
    /// Pending text was empty or whitespace only.
    Empty,
    /// A reply is still in flight; nothing changed.
    Busy,
}

/// Conversation, composer and reply simulator behind one owner.
#[derive(Debug)]
pub struct ChatSession {
    ids: IdAllocator,
    conversation: Conversation,
    composer: Composer,
    replies: ReplySimulator,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::with_delay(crate::reply::DEFAULT_REPLY_DELAY)
    }
}

impl ChatSession {
    /// Create a session using the configured reply delay.
    pub fn new(config: &Config) -> Self {
        Self::with_delay(config.reply_delay())
    }

    /// Create a session with an explicit reply delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            ids: IdAllocator::new(),
            conversation: Conversation::new(),
            composer: Composer::new(),
            replies: ReplySimulator::new(delay),
        }
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        self.conversation.list()
    }

    /// The conversation store.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Pending input.
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Pending input, for editing.
    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    /// Whether a simulated reply is in flight.
    pub fn is_pending(&self) -> bool {
        self.replies.is_pending()
    }

    /// Reply lifecycle phase.
    pub fn reply_phase(&self) -> ReplyPhase {
        self.replies.phase()
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        self.composer.can_submit() && !self.is_pending()
    }

    /// Submit the pending text.
    ///
    /// On success appends the user message followed by a placeholder and
    /// schedules the reply. Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.composer.can_submit() {
            return SubmitOutcome::Empty;
        }
        if self.replies.is_pending() {
            debug!("submit rejected while a reply is pending");
            return SubmitOutcome::Busy;
        }

        let Some(user) = self.composer.submit(&mut self.ids) else {
            return SubmitOutcome::Empty;
        };
        let user_id = user.id;
        let prompt = user.text.clone();
        self.conversation.append(user);

        let placeholder = Message::placeholder(self.ids.next_id());
        let placeholder_id = placeholder.id;
        self.conversation.append(placeholder);
        self.replies.schedule(placeholder_id, prompt);

        SubmitOutcome::Sent {
            user: user_id,
            placeholder: placeholder_id,
        }
    }

    /// Apply any completed replies. Returns how many placeholders resolved.
    pub fn poll_replies(&mut self) -> usize {
        let mut resolved = 0;
        while let Some(ready) = self.replies.try_next() {
            let reply = Message::reply(self.ids.next_id(), &ready.prompt);
            if self.conversation.replace(ready.placeholder_id, reply) {
                resolved += 1;
            }
        }
        resolved
    }

    /// Abort any reply in flight, leaving the conversation as it is.
    pub fn shutdown(&mut self) {
        if let Some(id) = self.replies.cancel() {
            debug!(placeholder = %id, "cancelled reply on shutdown");
        }
    }

    /// Start a new conversation, cancelling any reply in flight.
    pub fn reset(&mut self) {
        if let Some(id) = self.replies.cancel() {
            debug!(placeholder = %id, "cancelled reply on reset");
        }
        self.conversation.clear();
        info!("conversation reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Sender, THINKING_DONE, THINKING_PENDING};

    const DELAY: Duration = Duration::from_millis(1500);

    fn session() -> ChatSession {
        ChatSession::with_delay(DELAY)
    }

    async fn wait_past_delay() {
        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_user_then_placeholder() {
        let mut s = session();
        s.composer_mut().set_text("hi");

        let outcome = s.submit();
        let SubmitOutcome::Sent { user, placeholder } = outcome else {
            panic!("expected Sent, got {outcome:?}");
        };

        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.messages()[0].id, user);
        assert_eq!(s.messages()[0].sender, Sender::User);
        assert_eq!(s.messages()[0].text, "hi");
        assert_eq!(s.messages()[1].id, placeholder);
        assert!(s.messages()[1].is_placeholder());
        assert_eq!(s.messages()[1].thinking.as_deref(), Some(THINKING_PENDING));
    }

    #[tokio::test(start_paused = true)]
    async fn test_composer_cleared_immediately() {
        let mut s = session();
        s.composer_mut().set_text("hi");
        s.submit();

        assert!(s.composer().is_empty());
        assert!(s.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submit_leaves_conversation_unchanged() {
        let mut s = session();
        assert_eq!(s.submit(), SubmitOutcome::Empty);

        s.composer_mut().set_text("   \n ");
        assert_eq!(s.submit(), SubmitOutcome::Empty);
        assert!(s.messages().is_empty());
        assert!(!s.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_replaces_placeholder() {
        let mut s = session();
        s.composer_mut().set_text("hi");
        let SubmitOutcome::Sent { placeholder, .. } = s.submit() else {
            panic!("expected Sent");
        };

        // Before the delay nothing changes.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(s.poll_replies(), 0);
        assert!(s.messages()[1].is_placeholder());

        wait_past_delay().await;
        assert_eq!(s.poll_replies(), 1);

        assert_eq!(s.messages().len(), 2);
        let reply = &s.messages()[1];
        assert_ne!(reply.id, placeholder);
        assert!(reply.id > placeholder);
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, "You said: \"hi\"");
        assert_eq!(reply.thinking.as_deref(), Some(THINKING_DONE));
        assert!(s.conversation().get(placeholder).is_none());
        assert!(!s.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_echoes_hello() {
        let mut s = session();
        s.composer_mut().set_text("hello");
        s.submit();
        wait_past_delay().await;
        s.poll_replies();

        assert_eq!(s.messages()[1].text, "You said: \"hello\"");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_pending_is_rejected() {
        let mut s = session();
        s.composer_mut().set_text("first");
        s.submit();

        s.composer_mut().set_text("second");
        assert!(!s.can_send());
        assert_eq!(s.submit(), SubmitOutcome::Busy);
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.composer().text(), "second");

        wait_past_delay().await;
        s.poll_replies();
        assert!(s.can_send());
        assert!(matches!(s.submit(), SubmitOutcome::Sent { .. }));
        assert_eq!(s.messages().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_reply() {
        let mut s = session();
        s.composer_mut().set_text("hi");
        s.submit();

        s.reset();
        assert!(s.messages().is_empty());
        assert!(!s.is_pending());

        wait_past_delay().await;
        assert_eq!(s.poll_replies(), 0);
        assert!(s.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_length_two_throughout() {
        let mut s = session();
        assert!(s.messages().is_empty());

        s.composer_mut().set_text("hi");
        s.submit();
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.reply_phase(), ReplyPhase::Pending(s.messages()[1].id));

        wait_past_delay().await;
        s.poll_replies();
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.messages()[0].text, "hi");
        assert_eq!(s.messages()[1].text, "You said: \"hi\"");
        assert_eq!(s.reply_phase(), ReplyPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_keeps_messages_but_drops_reply() {
        let mut s = session();
        s.composer_mut().set_text("hi");
        s.submit();

        s.shutdown();
        assert!(!s.is_pending());
        assert_eq!(s.messages().len(), 2);

        wait_past_delay().await;
        assert_eq!(s.poll_replies(), 0);
        assert!(s.messages()[1].is_placeholder());
    }
}
