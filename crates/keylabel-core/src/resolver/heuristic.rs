//! Layout-free fallback transform.

/// Identifier prefixes removed by the heuristic, in application order.
const STRIPPED_PREFIXES: [&str; 2] = ["Key", "Digit"];

/// Removes every literal occurrence of `"Key"` and then of `"Digit"` from the
/// whole string.
///
/// This is a plain substring strip, not a per-token lookup: `"KeyA"` becomes
/// `"A"` and `"Digit0"` becomes `"0"`, but `"Equal"` stays `"Equal"` (only a
/// live layout map can symbolise punctuation), and an opaque token that merely
/// contains `"Key"` loses it too (`"HotKeys"` → `"Hots"`).  Spaces are never
/// touched, so the token count is preserved.
pub fn strip_physical_prefixes(shortcut: &str) -> String {
    STRIPPED_PREFIXES
        .iter()
        .fold(shortcut.to_owned(), |acc, prefix| acc.replace(prefix, ""))
}
