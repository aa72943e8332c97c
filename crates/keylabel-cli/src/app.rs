//! Picks a layout source and runs one resolution.

use std::path::PathBuf;

use keylabel_core::{
    JsonFileLayoutSource, KeyboardLayoutSource, ResolveError, ResolverOptions,
    ShortcutLabelResolver, StaticLayoutSource,
};
use tracing::info;

use crate::config::{BuiltinLayout, LayoutConfig};

/// The layout source selected from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutChoice {
    /// No live layout; the heuristic applies.
    None,
    Builtin(BuiltinLayout),
    File(PathBuf),
}

/// Layout-related command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOverrides {
    pub no_layout: bool,
    pub layout_file: Option<PathBuf>,
    pub us_layout: bool,
}

impl LayoutChoice {
    /// Picks the layout source.
    ///
    /// Precedence: `--no-layout`, `--layout-file`, `--us-layout`, then the
    /// config file's `map_file`, then its `builtin`, else none.
    pub fn select(overrides: &LayoutOverrides, config: &LayoutConfig) -> Self {
        if overrides.no_layout {
            return LayoutChoice::None;
        }
        if let Some(path) = &overrides.layout_file {
            return LayoutChoice::File(path.clone());
        }
        if overrides.us_layout {
            return LayoutChoice::Builtin(BuiltinLayout::UsQwerty);
        }
        if let Some(path) = &config.map_file {
            return LayoutChoice::File(path.clone());
        }
        match config.builtin {
            Some(builtin) => LayoutChoice::Builtin(builtin),
            None => LayoutChoice::None,
        }
    }

    /// Builds the source for this choice; `None` for [`LayoutChoice::None`].
    pub fn into_source(self) -> Option<Box<dyn KeyboardLayoutSource>> {
        match self {
            LayoutChoice::None => None,
            LayoutChoice::Builtin(BuiltinLayout::UsQwerty) => {
                Some(Box::new(StaticLayoutSource::us_qwerty()))
            }
            LayoutChoice::File(path) => Some(Box::new(JsonFileLayoutSource::new(path))),
        }
    }
}

/// Resolves `shortcut` with the chosen layout and options.
///
/// # Errors
///
/// Returns the resolver's error when the layout query fails under the
/// propagate policy.
pub async fn run_resolve(
    shortcut: &str,
    choice: LayoutChoice,
    options: ResolverOptions,
) -> Result<String, ResolveError> {
    info!("resolving {shortcut:?} with layout {choice:?}");
    let source = choice.into_source();
    ShortcutLabelResolver::new(options)
        .resolve(shortcut, source.as_deref())
        .await
}
