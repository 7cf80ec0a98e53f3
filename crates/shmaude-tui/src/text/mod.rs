//! Text rendering utilities.
//!
//! - [`wrap_text`] - Word wrapping for message bodies
//! - [`hard_wrap`] - Character wrapping for the editable input
//! - [`truncate_to_width`], [`visual_width`] - Unicode-aware width handling

mod width;
mod wrap;

pub use width::{char_width, truncate_to_width, visual_width};
pub use wrap::{hard_wrap, hard_wrap_cursor, wrap_text};
