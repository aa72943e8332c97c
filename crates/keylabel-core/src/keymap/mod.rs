//! Physical-key tables.
//!
//! The canonical key representation is the physical-key identifier string
//! (`"KeyA"`, `"Digit0"`, `"Equal"`), which names a key position independent of
//! the layout.  [`physical::PhysicalKey`] enumerates the positions whose label
//! varies between layouts; [`us_qwerty`] gives their US reference labels.

pub mod physical;
pub mod us_qwerty;

pub use physical::{KeyCategory, PhysicalKey};
pub use us_qwerty::us_qwerty_label;
