//! Simulated assistant replies.
//!
//! Each submission schedules one completion as a tokio task keyed by the
//! placeholder id. The task only sleeps and then reports back over a channel;
//! the owner drains the channel with [`ReplySimulator::try_next`] and does all
//! conversation mutation itself.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::message::MessageId;

/// Default delay before a simulated reply resolves.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Notification that the reply for a placeholder is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyReady {
    /// Placeholder to replace.
    pub placeholder_id: MessageId,
    /// Original user text the reply answers.
    pub prompt: String,
}

/// Where the simulator is in the reply lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPhase {
    /// No reply in flight.
    Idle,
    /// Waiting for the completion of this placeholder.
    Pending(MessageId),
}

#[derive(Debug)]
struct PendingReply {
    placeholder_id: MessageId,
    handle: JoinHandle<()>,
}

/// Schedules and cancels delayed reply completions.
///
/// Dropping the simulator aborts any scheduled completion.
#[derive(Debug)]
pub struct ReplySimulator {
    delay: Duration,
    pending: Option<PendingReply>,
    tx: mpsc::UnboundedSender<ReplyReady>,
    rx: mpsc::UnboundedReceiver<ReplyReady>,
}

impl Default for ReplySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ReplySimulator {
    /// Create a simulator that resolves replies after `delay`.
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            pending: None,
            tx,
            rx,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ReplyPhase {
        match &self.pending {
            Some(p) => ReplyPhase::Pending(p.placeholder_id),
            None => ReplyPhase::Idle,
        }
    }

    /// Whether a reply is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule the completion for `placeholder_id`.
    ///
    /// Must be called from within a tokio runtime. A previously scheduled
    /// completion is cancelled first, so at most one is ever in flight.
    pub fn schedule(&mut self, placeholder_id: MessageId, prompt: String) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner was torn down.
            let _ = tx.send(ReplyReady {
                placeholder_id,
                prompt,
            });
        });

        debug!(placeholder = %placeholder_id, delay_ms = delay.as_millis(), "reply scheduled");
        self.pending = Some(PendingReply {
            placeholder_id,
            handle,
        });
    }

    /// Abort the in-flight completion, returning its placeholder id.
    pub fn cancel(&mut self) -> Option<MessageId> {
        let pending = self.pending.take()?;
        pending.handle.abort();
        debug!(placeholder = %pending.placeholder_id, "reply cancelled");
        Some(pending.placeholder_id)
    }

    /// Next completed reply, if any.
    ///
    /// Completions for placeholders that are no longer pending (cancelled
    /// after the task already fired) are discarded.
    pub fn try_next(&mut self) -> Option<ReplyReady> {
        while let Ok(ready) = self.rx.try_recv() {
            let current = self.pending.as_ref().map(|p| p.placeholder_id);
            if current == Some(ready.placeholder_id) {
                self.pending = None;
                debug!(placeholder = %ready.placeholder_id, "reply ready");
                return Some(ready);
            }
            debug!(placeholder = %ready.placeholder_id, "discarding stale reply");
        }
        None
    }
}

impl Drop for ReplySimulator {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}
