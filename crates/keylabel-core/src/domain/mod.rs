//! Domain types for shortcut label resolution.
//!
//! Pure data and string handling with no I/O and no async.  Everything here
//! can be tested without a runtime or a layout source.

/// The identifier → label mapping a layout source yields.
pub mod layout_map;

/// Splitting, joining and classifying shortcut tokens.
pub mod shortcut;

pub use layout_map::LayoutMap;
pub use shortcut::{classify_token, join_tokens, split_tokens, TokenKind};
