//! Responder configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Controller, Mode};
use tracing::{debug, info, instrument};

/// Settings for a headless session.
///
/// Every field is optional in the file:
///
/// ```toml
/// seed = 42
/// defender = true
/// debug_form = false
/// log_filter = "tictactoe_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ResponderConfig {
    /// Seed for the responder's random draws; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Start on the defender side (the responder moves first).
    #[serde(default)]
    defender: bool,

    /// Start in debug form (the responder stays silent).
    #[serde(default)]
    debug_form: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            defender: false,
            debug_form: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ResponderConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.initial_mode(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Mode the first game starts in.
    pub fn initial_mode(&self) -> Mode {
        match (self.defender, self.debug_form) {
            (false, false) => Mode::Attacker,
            (true, false) => Mode::Defender,
            (false, true) => Mode::DebugAttacker,
            (true, true) => Mode::DebugDefender,
        }
    }

    /// Creates a controller with the first game already running.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn build_controller(&self) -> Controller {
        let mut controller = match self.seed {
            Some(seed) => Controller::seeded(seed),
            None => Controller::from_entropy(),
        };
        controller.new_game(self.initial_mode().into());
        controller
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
