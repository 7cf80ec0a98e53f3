//! shmaude-engine: Headless state for the shmaude chat mockup
//!
//! This crate owns everything that is not drawing:
//! - Messages and the in-memory conversation store
//! - The composer (pending input and submission)
//! - The simulated reply lifecycle with cancellable completions
//! - The persisted dark-mode preference and configuration

pub mod composer;
pub mod config;
pub mod conversation;
pub mod message;
pub mod preferences;
pub mod reply;
pub mod session;

// Re-export commonly used types
pub use composer::Composer;
pub use config::{resolve_data_dir, Config, ConfigError, IconStyle};
pub use conversation::Conversation;
pub use message::{echo_reply, IdAllocator, Message, MessageId, Sender, TYPING_SENTINEL};
pub use preferences::{
    JsonFileStore, MemoryStore, PreferenceStore, StoreError, ThemeController, DARK_MODE_KEY,
};
pub use reply::{ReplyPhase, ReplyReady, ReplySimulator, DEFAULT_REPLY_DELAY};
pub use session::{ChatSession, SubmitOutcome};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
