//! Shortcut string tokenization.
//!
//! A shortcut string is an ordered list of tokens separated by single spaces,
//! e.g. `"Cmd KeyA"`.  Splitting is exact: consecutive spaces produce empty
//! tokens and the empty string is a single empty token.  This is what keeps
//! the resolver's output the same length and order as its input, even for
//! degenerate input.

use crate::keymap::physical::PhysicalKey;

/// Token separator.
pub const TOKEN_SEPARATOR: char = ' ';

/// What a single shortcut token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A writing-system physical key whose label depends on the layout.
    Physical(PhysicalKey),
    /// Anything else (`"Cmd"`, `"ArrowDown"`, `"NotAKey"`, `""`).
    Opaque,
}

/// Splits a shortcut string into its tokens.
pub fn split_tokens(shortcut: &str) -> impl Iterator<Item = &str> {
    shortcut.split(TOKEN_SEPARATOR)
}

/// Joins resolved tokens back into a shortcut string.
pub fn join_tokens<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push(TOKEN_SEPARATOR);
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Classifies a token.  Used for diagnostics only; resolution never depends
/// on it.
pub fn classify_token(token: &str) -> TokenKind {
    PhysicalKey::from_code(token).map_or(TokenKind::Opaque, TokenKind::Physical)
}
