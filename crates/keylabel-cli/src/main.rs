//! `keylabel` — prints the labels a user sees on their keyboard for a
//! shortcut written in physical-key identifiers.
//!
//! # Usage
//!
//! ```text
//! keylabel [OPTIONS] <SHORTCUT>
//!
//! $ keylabel "Cmd KeyA Digit0 Equal"
//! Cmd A 0 Equal
//! $ keylabel --us-layout "Cmd KeyA Digit0 Equal"
//! Cmd A 0 =
//! $ keylabel --layout-file azerty.json "Cmd KeyQ"
//! Cmd A
//! ```
//!
//! The resolved label goes to stdout; logs go to stderr.
//!
//! # Environment variable overrides
//!
//! | Variable                   | Flag                |
//! |----------------------------|---------------------|
//! | `KEYLABEL_CONFIG`          | `--config`          |
//! | `KEYLABEL_LAYOUT_FILE`     | `--layout-file`     |
//! | `KEYLABEL_ON_LAYOUT_ERROR` | `--on-layout-error` |
//! | `KEYLABEL_TIMEOUT_MS`      | `--timeout-ms`      |
//!
//! `RUST_LOG` overrides the configured log level.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use keylabel_core::{LayoutErrorPolicy, ResolverOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use keylabel_cli::app::{run_resolve, LayoutChoice, LayoutOverrides};
use keylabel_cli::config::{load_config, load_config_file, AppConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Layout failure policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Propagate,
    Heuristic,
}

impl From<PolicyArg> for LayoutErrorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Propagate => LayoutErrorPolicy::Propagate,
            PolicyArg::Heuristic => LayoutErrorPolicy::FallBackToHeuristic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "keylabel",
    about = "Resolve physical-key shortcut codes into human-readable labels",
    version
)]
struct Cli {
    /// Space-separated shortcut, e.g. "Cmd KeyA Digit0".
    shortcut: String,

    /// Config file to use instead of the platform default.
    #[arg(long, env = "KEYLABEL_CONFIG")]
    config: Option<PathBuf>,

    /// JSON layout map (`{"KeyA": "q", ...}`) to resolve against.
    ///
    /// Any combination of layout flags parses; `LayoutChoice::select` picks
    /// the winner.
    #[arg(long, env = "KEYLABEL_LAYOUT_FILE")]
    layout_file: Option<PathBuf>,

    /// Resolve against the built-in US QWERTY layout.
    #[arg(long)]
    us_layout: bool,

    /// Ignore any configured layout and apply the heuristic.
    #[arg(long)]
    no_layout: bool,

    /// What to do when the layout cannot be read.
    #[arg(long, value_enum, env = "KEYLABEL_ON_LAYOUT_ERROR")]
    on_layout_error: Option<PolicyArg>,

    /// Give up on the layout after this many milliseconds.
    #[arg(long, env = "KEYLABEL_TIMEOUT_MS")]
    timeout_ms: Option<u64>,
}

impl Cli {
    fn layout_overrides(&self) -> LayoutOverrides {
        LayoutOverrides {
            no_layout: self.no_layout,
            layout_file: self.layout_file.clone(),
            us_layout: self.us_layout,
        }
    }

    /// Applies flag overrides on top of the config file's resolver settings.
    fn resolver_options(&self, config: &AppConfig) -> ResolverOptions {
        let mut options = config.resolver.to_options();
        if let Some(policy) = self.on_layout_error {
            options.on_layout_error = policy.into();
        }
        if let Some(ms) = self.timeout_ms {
            options.layout_timeout = Some(Duration::from_millis(ms));
        }
        options
    }

    fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => load_config().context("failed to load config"),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Logs go to stderr so stdout carries only the label.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let options = cli.resolver_options(&config);
    let choice = LayoutChoice::select(&cli.layout_overrides(), &config.layout);
    debug!("resolver options: {options:?}");

    let label = run_resolve(&cli.shortcut, choice, options)
        .await
        .context("could not resolve shortcut labels")?;

    println!("{label}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
