//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_core::{Mode, Theme};
use tracing::{debug, info, instrument};

use crate::session::ThinkingDelay;

/// Startup preferences for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mode the first game starts in.
    #[serde(default)]
    mode: Mode,

    /// Initial theme.
    #[serde(default)]
    theme: Theme,

    /// Lower bound (inclusive) of the AI thinking delay, in milliseconds.
    #[serde(default = "default_ai_delay_min_ms")]
    ai_delay_min_ms: u64,

    /// Upper bound (exclusive) of the AI thinking delay, in milliseconds.
    #[serde(default = "default_ai_delay_max_ms")]
    ai_delay_max_ms: u64,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_ai_delay_min_ms() -> u64 {
    450
}

fn default_ai_delay_max_ms() -> u64 {
    700
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_duel.log")
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(mode = ?config.mode, theme = ?config.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file settings.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        theme: Option<Theme>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Checks that the delay bounds form a non-empty range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_delay_min_ms >= self.ai_delay_max_ms {
            return Err(ConfigError::new(format!(
                "ai_delay_min_ms ({}) must be below ai_delay_max_ms ({})",
                self.ai_delay_min_ms, self.ai_delay_max_ms
            )));
        }
        Ok(())
    }

    /// Delay range for the automated player.
    pub fn thinking_delay(&self) -> ThinkingDelay {
        ThinkingDelay::new(
            Duration::from_millis(self.ai_delay_min_ms),
            Duration::from_millis(self.ai_delay_max_ms),
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            theme: Theme::default(),
            ai_delay_min_ms: default_ai_delay_min_ms(),
            ai_delay_max_ms: default_ai_delay_max_ms(),
            log_file: default_log_file(),
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
