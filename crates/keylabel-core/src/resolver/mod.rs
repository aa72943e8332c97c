//! ShortcutLabelResolver: turns a shortcut string into the labels the user
//! sees on their keyboard.
//!
//! # The two branches
//!
//! ```text
//! layout source present ──► layout_map().await ──► per-token lookup, upper-cased
//! layout source absent  ──► strip "Key" and "Digit" across the whole string
//! ```
//!
//! The resolver holds no per-call state.  The layout source is supplied by the
//! caller on every call, so it can be swapped between calls (tests, or a host
//! whose keyboard API appears or disappears at runtime).  A present source is
//! queried exactly once per call and its answer is never cached.
//!
//! # Retrieval failures
//!
//! A layout source may fail or hang.  By default a failure propagates to the
//! caller as [`ResolveError`] and no timeout is applied, so a hanging source
//! hangs the call.  [`ResolverOptions`] can opt into a timeout and into the
//! best-effort [`LayoutErrorPolicy::FallBackToHeuristic`] path.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::layout_map::LayoutMap;

mod heuristic;
mod mapped;

pub use heuristic::strip_physical_prefixes;
pub use mapped::apply_layout_map;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors a [`KeyboardLayoutSource`] may report.
#[derive(Debug, Error)]
pub enum LayoutSourceError {
    /// The host refused or could not provide a layout (permission denied,
    /// API missing at runtime, and similar).
    #[error("keyboard layout unavailable: {0}")]
    Unavailable(String),

    /// A file-backed source could not read its file.
    #[error("I/O error reading layout map at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file-backed source read malformed JSON.
    #[error("failed to parse layout map at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by [`ShortcutLabelResolver::resolve`].
///
/// Only produced under [`LayoutErrorPolicy::Propagate`]; unrecognised tokens
/// are never an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("layout retrieval failed: {0}")]
    Layout(#[from] LayoutSourceError),

    #[error("layout retrieval timed out after {0:?}")]
    LayoutTimeout(Duration),
}

// ── Capability ────────────────────────────────────────────────────────────────

/// A host capability that reports the active keyboard layout.
///
/// Implementations may suspend (permission prompts, I/O).  The resolver calls
/// [`layout_map`](Self::layout_map) at most once per resolution.
#[async_trait]
pub trait KeyboardLayoutSource: Send + Sync {
    /// Returns the current physical-key identifier → label mapping.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutSourceError`] when the layout cannot be obtained.
    async fn layout_map(&self) -> Result<LayoutMap, LayoutSourceError>;
}

// ── Options ───────────────────────────────────────────────────────────────────

/// What to do when a present layout source fails or times out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutErrorPolicy {
    /// Return the failure to the caller.
    #[default]
    #[serde(rename = "propagate")]
    Propagate,
    /// Log the failure and resolve with the layout-free heuristic instead.
    #[serde(rename = "heuristic")]
    FallBackToHeuristic,
}

/// Tuning for [`ShortcutLabelResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    pub on_layout_error: LayoutErrorPolicy,
    /// Upper bound on a single layout retrieval.  `None` waits indefinitely.
    ///
    /// Requires a Tokio runtime with the time driver enabled when set.
    pub layout_timeout: Option<Duration>,
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Resolves shortcut strings into human-readable labels.
#[derive(Debug, Clone, Default)]
pub struct ShortcutLabelResolver {
    options: ResolverOptions,
}

impl ShortcutLabelResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolves `shortcut` (space-separated physical-key identifiers and
    /// opaque tokens) into a space-separated label string with the same token
    /// count and order.
    ///
    /// With `layout_source` present, the source is queried once and every
    /// token found in its map is replaced by the upper-cased label; other
    /// tokens are kept verbatim.  With it absent, [`strip_physical_prefixes`]
    /// is applied to the whole string.
    ///
    /// # Errors
    ///
    /// Under [`LayoutErrorPolicy::Propagate`], returns
    /// [`ResolveError::Layout`] if the source fails and
    /// [`ResolveError::LayoutTimeout`] if the configured timeout elapses.
    /// Never fails when `layout_source` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keylabel_core::ShortcutLabelResolver;
    ///
    /// let resolver = ShortcutLabelResolver::default();
    /// let label = tokio_test::block_on(resolver.resolve("Cmd KeyA Digit0", None)).unwrap();
    /// assert_eq!(label, "Cmd A 0");
    /// ```
    pub async fn resolve(
        &self,
        shortcut: &str,
        layout_source: Option<&dyn KeyboardLayoutSource>,
    ) -> Result<String, ResolveError> {
        let Some(source) = layout_source else {
            debug!("no keyboard layout source; applying heuristic to {shortcut:?}");
            return Ok(strip_physical_prefixes(shortcut));
        };

        match self.fetch_layout_map(source).await {
            Ok(map) => {
                let resolved = apply_layout_map(shortcut, &map);
                debug!(
                    layout_entries = map.len(),
                    "resolved {shortcut:?} to {resolved:?} against live layout"
                );
                Ok(resolved)
            }
            Err(e) => match self.options.on_layout_error {
                LayoutErrorPolicy::Propagate => Err(e),
                LayoutErrorPolicy::FallBackToHeuristic => {
                    warn!("{e}; falling back to heuristic labels");
                    Ok(strip_physical_prefixes(shortcut))
                }
            },
        }
    }

    /// Performs the single layout query for one resolution, honouring the
    /// configured timeout.
    async fn fetch_layout_map(
        &self,
        source: &dyn KeyboardLayoutSource,
    ) -> Result<LayoutMap, ResolveError> {
        let retrieval = source.layout_map();
        let map = match self.options.layout_timeout {
            Some(limit) => tokio::time::timeout(limit, retrieval)
                .await
                .map_err(|_| ResolveError::LayoutTimeout(limit))??,
            None => retrieval.await?,
        };
        Ok(map)
    }
}

/// Resolves `shortcut` with default options.
///
/// See [`ShortcutLabelResolver::resolve`].
///
/// # Errors
///
/// Propagates any layout retrieval failure.
pub async fn resolve_shortcut(
    shortcut: &str,
    layout_source: Option<&dyn KeyboardLayoutSource>,
) -> Result<String, ResolveError> {
    ShortcutLabelResolver::default()
        .resolve(shortcut, layout_source)
        .await
}
