//! # keylabel-core
//!
//! Turns machine-level shortcut codes (as reported by low-level keyboard
//! capture, e.g. `"KeyA"`, `"Digit0"`, `"Equal"`) into the labels a user sees
//! printed on their own keyboard (`"A"`, `"0"`, `"="`, or a locale glyph).
//!
//! # Architecture overview (for beginners)
//!
//! A shortcut hint such as `"Cmd KeyA"` names *physical key positions*, not
//! characters.  On a French AZERTY keyboard the key at position `KeyA` is
//! printed with a "Q", so showing "A" to that user would be wrong.  When the
//! hosting environment can tell us the active layout we use it; when it
//! cannot, we fall back to a cheap textual heuristic.
//!
//! - **`keymap`** – The writing-system physical keys whose label depends on the
//!   layout, plus the US QWERTY reference labels.
//!
//! - **`domain`** – Pure types: the [`LayoutMap`] (identifier → label) and the
//!   shortcut token helpers.
//!
//! - **`resolver`** – The [`ShortcutLabelResolver`] and the
//!   [`KeyboardLayoutSource`] capability it consumes.
//!
//! - **`source`** – Concrete layout sources: an in-memory map and a JSON file
//!   read on every query.

pub mod domain;
pub mod keymap;
pub mod resolver;
pub mod source;

// Re-export the most-used types at the crate root so callers can write
// `keylabel_core::ShortcutLabelResolver` instead of the full module path.
pub use domain::layout_map::LayoutMap;
pub use domain::shortcut::{classify_token, join_tokens, split_tokens, TokenKind};
pub use keymap::physical::{KeyCategory, PhysicalKey};
pub use resolver::{
    apply_layout_map, resolve_shortcut, strip_physical_prefixes, KeyboardLayoutSource,
    LayoutErrorPolicy, LayoutSourceError, ResolveError, ResolverOptions, ShortcutLabelResolver,
};
pub use source::{JsonFileLayoutSource, StaticLayoutSource};
