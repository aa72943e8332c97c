//! TOML-based configuration for the `keylabel` command.
//!
//! Read from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\KeyLabel\config.toml`
//! - Linux:    `~/.config/keylabel/config.toml`
//! - macOS:    `~/Library/Application Support/KeyLabel/config.toml`
//!
//! or from an explicit path given with `--config`.  Example:
//!
//! ```toml
//! log_level = "warn"
//!
//! [resolver]
//! on_layout_error = "heuristic"
//! layout_timeout_ms = 250
//!
//! [layout]
//! map_file = "/home/me/.config/keylabel/azerty.json"
//! ```
//!
//! Every field has a serde default, so a missing default file, an empty file,
//! or a file written for an older version all load cleanly.  A path passed
//! with `--config` must exist.

use std::path::{Path, PathBuf};
use std::time::Duration;

use keylabel_core::{LayoutErrorPolicy, ResolverOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Resolver behaviour on layout retrieval problems.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfig {
    /// `"propagate"` (default) or `"heuristic"`.
    #[serde(default)]
    pub on_layout_error: LayoutErrorPolicy,
    /// Timeout for a single layout query in milliseconds.  Absent = no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_timeout_ms: Option<u64>,
}

/// Where the live layout comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// JSON layout map file; takes precedence over `builtin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<BuiltinLayout>,
}

/// Layouts shipped with the binary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BuiltinLayout {
    #[serde(rename = "us")]
    UsQwerty,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            resolver: ResolverConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Converts the on-disk settings into resolver options.
    pub fn to_options(&self) -> ResolverOptions {
        ResolverOptions {
            on_layout_error: self.on_layout_error,
            layout_timeout: self.layout_timeout_ms.map(Duration::from_millis),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(platform_config_dir()
        .ok_or(ConfigError::NoPlatformConfigDir)?
        .join("config.toml"))
}

/// Loads the config at `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Loads the config at an explicitly requested `path`.
///
/// Unlike [`load_config_from`], a missing file is an error: a path the user
/// typed must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read (including "not
/// found"), and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Loads the config from the platform default location.
///
/// A platform without a resolvable config directory gets the defaults.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match config_file_path() {
        Ok(path) => load_config_from(&path),
        Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
        Err(e) => Err(e),
    }
}

/// Resolves the platform config directory including the `KeyLabel` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("KeyLabel"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("keylabel"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("KeyLabel")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}
