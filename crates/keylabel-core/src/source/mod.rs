//! Concrete [`KeyboardLayoutSource`](crate::resolver::KeyboardLayoutSource)
//! implementations.
//!
//! | Type                     | Backing                              |
//! |--------------------------|--------------------------------------|
//! | [`StaticLayoutSource`]   | An in-memory layout map              |
//! | [`JsonFileLayoutSource`] | A JSON file, re-read on every query  |
//!
//! Hosts with a native keyboard API (a browser's `navigator.keyboard`, an OS
//! input-source query) implement the trait themselves; these two cover tests,
//! fixed deployments and layouts exported by an external tool.

mod json_file;
mod static_map;

pub use json_file::JsonFileLayoutSource;
pub use static_map::StaticLayoutSource;
