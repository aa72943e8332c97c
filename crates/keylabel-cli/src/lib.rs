//! keylabel-cli library crate.
//!
//! The `keylabel` binary is thin plumbing around `keylabel-core`:
//!
//! ```text
//! argv + config.toml
//!         ↓
//! [keylabel-cli]
//!   ├── config/  TOML schema and platform config path
//!   └── app/     layout source selection, one resolution
//!         ↓
//! keylabel-core::ShortcutLabelResolver
//! ```
//!
//! Both modules are exposed as a library so they can be tested without
//! spawning the binary.

pub mod app;
pub mod config;
