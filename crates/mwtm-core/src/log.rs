//! Diagnostic output on stderr.
//!
//! Events are emitted with `tracing` and printed by a `tracing-subscriber`
//! formatter writing one short line per event to stderr. Stdout is never
//! used for diagnostics.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Warn.as_str().into(),
        }
    }
}

impl LogConfig {
    /// Parsed minimum level. Unknown names fall back to warn.
    pub fn level(&self) -> Level {
        Level::parse(&self.level).unwrap_or(Level::Warn)
    }

    /// Rewrites `level` to its canonical lower-case name.
    pub fn validate(&mut self) {
        self.level = self.level().as_str().into();
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

/// Picks the effective level: `--verbose` wins over the config file.
pub fn effective_level(config: &LogConfig, verbose: bool) -> Level {
    if verbose { Level::Debug } else { config.level() }
}

/// Installs the global stderr subscriber. Call once, early in `main`.
///
/// `RUST_LOG` directives, when set, take precedence over `level`.
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
