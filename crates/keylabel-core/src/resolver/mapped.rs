//! Per-token resolution against a live layout map.

use tracing::trace;

use crate::domain::layout_map::LayoutMap;
use crate::domain::shortcut::{classify_token, join_tokens, split_tokens, TokenKind};

/// Replaces every token found in `map` with its upper-cased label.
///
/// Tokens are looked up verbatim.  A token with no entry (modifiers, arrows,
/// unknown names, or a physical key the layout does not report) is kept
/// unchanged.
pub fn apply_layout_map(shortcut: &str, map: &LayoutMap) -> String {
    join_tokens(split_tokens(shortcut).map(|token| match map.get(token) {
        Some(label) => label.to_uppercase(),
        None => {
            if let TokenKind::Physical(key) = classify_token(token) {
                trace!("layout map has no label for {key}; keeping identifier");
            }
            token.to_owned()
        }
    }))
}
