//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`Sidebar`] - Brand, new conversation button, recent chats, theme toggle, profile
//! - [`ChatHeader`] - Title bar above the messages
//! - [`MessageList`] / [`WelcomePanel`] - Conversation view or empty-state panel
//! - [`InputBar`] - Auto-growing input with attach and send controls
//! - [`ModelFooter`] - Model badge and disclaimer

mod footer;
mod header;
mod input_bar;
mod message_list;
mod sidebar;

pub use footer::{ModelFooter, DISCLAIMER, MODEL_NAME};
pub use header::ChatHeader;
pub use input_bar::{InputBar, INPUT_PLACEHOLDER};
pub use message_list::{MessageList, WelcomePanel};
pub use sidebar::Sidebar;
