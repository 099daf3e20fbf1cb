//! CLI argument definitions for the Scout application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Society Scout, a rule-based chatbot for discovering university events.
#[derive(Parser, Debug)]
#[command(name = "scout", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Path to the events JSON file.
    #[arg(short = 'e', long = "events")]
    pub events: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Skip the startup banner.
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SCOUT_CONFIG env var > ./scout.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SCOUT_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("scout.toml")
    }

    /// Resolve the events file path.
    ///
    /// Priority: --events flag > SCOUT_EVENTS env var > config file value.
    pub fn resolve_events_path(&self, config_value: &str) -> PathBuf {
        if let Some(ref p) = self.events {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SCOUT_EVENTS") {
            return PathBuf::from(p);
        }
        PathBuf::from(config_value)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_value: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_value.to_string())
    }
}
