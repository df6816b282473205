//! Layered settings: `config/default.toml`, an optional file named by
//! `TOXSHARE_CONFIG`, then `TOXSHARE__SECTION__KEY` environment variables.

use crate::types::Currency;
use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_PATH: &str = "config/default";
pub const CONFIG_PATH_VAR: &str = "TOXSHARE_CONFIG";
pub const ENV_PREFIX: &str = "TOXSHARE";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration could not be loaded: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid log filter directive {directive:?}: {reason}")]
    InvalidLogLevel { directive: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub notifications: NotificationSettings,
    pub subscriptions: SubscriptionSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Start every session with the fixed demo notifications.
    pub seed_mock_data: bool,
    /// Emit one "you have N unread" banner when the store is set up.
    pub announce_unread_on_setup: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubscriptionSettings {
    pub currency: Currency,
    pub seed_mock_data: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            seed_mock_data: true,
            announce_unread_on_setup: true,
        }
    }
}

impl Default for SubscriptionSettings {
    fn default() -> Self {
        Self {
            currency: Currency::EUR,
            seed_mock_data: true,
        }
    }
}

impl Settings {
    /// Load settings from every layer, reading the process environment.
    /// Missing files are not an error, a missing `TOXSHARE_CONFIG` target is.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(env::vars().collect())
    }

    /// Same layering as [`Settings::load`], with `vars` standing in for the
    /// process environment.
    pub fn load_from(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_PATH).required(false));

        if let Some(path) = vars.get(CONFIG_PATH_VAR) {
            tracing::debug!(path = %path, "loading configuration override file");
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML document, without touching the file
    /// system or the environment.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log.level).map_err(|e| ConfigError::InvalidLogLevel {
            directive: self.log.level.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
