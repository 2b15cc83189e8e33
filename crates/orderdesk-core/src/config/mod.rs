//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod features;
pub mod logging;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::features::{CheckoutFlags, FeatureConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for overrides (`ORDERDESK__SECTION__KEY`).
pub const ENV_PREFIX: &str = "ORDERDESK";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Event bus settings.
    #[serde(default)]
    pub events: EventsConfig,
    /// Feature flags.
    #[serde(default)]
    pub features: FeatureConfig,
}

/// Event bus configuration.
///
/// Publication runs inside the request that stored the order, so the
/// whole budget must fit under `server.request_timeout_seconds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Maximum time a single listener may run before it is abandoned.
    #[serde(default = "default_listener_timeout")]
    pub listener_timeout_seconds: u64,
    /// Maximum time one publication may spend across all listeners.
    #[serde(default = "default_publish_budget")]
    pub publish_budget_seconds: u64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            listener_timeout_seconds: default_listener_timeout(),
            publish_budget_seconds: default_publish_budget(),
        }
    }
}

/// Location of the layered configuration sources.
///
/// Kept around after startup so that refreshable sections can be
/// re-read from the same files and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Directory containing `default.toml` and the environment overlays.
    pub dir: PathBuf,
    /// Environment overlay name (`development`, `test`, `production`, ...).
    pub env: String,
}

/// Deserialization target for reloading only the `[features]` section.
#[derive(Debug, Deserialize)]
struct FeaturesOnly {
    #[serde(default)]
    features: FeatureConfig,
}

impl ConfigSource {
    /// Create a source for an explicit directory and environment.
    pub fn new(dir: impl AsRef<Path>, env: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            env: env.into(),
        }
    }

    /// Resolve the source from `ORDERDESK_CONFIG_DIR` and `ORDERDESK_ENV`.
    pub fn from_env() -> Self {
        let dir = std::env::var("ORDERDESK_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        let env = std::env::var("ORDERDESK_ENV").unwrap_or_else(|_| "development".to_string());
        Self::new(dir, env)
    }

    fn build(&self) -> Result<config::Config, AppError> {
        let default_path = self.dir.join("default");
        let env_path = self.dir.join(&self.env);

        config::Config::builder()
            .add_source(config::File::with_name(&default_path.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_path.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))
    }

    /// Load and merge the full application configuration, then validate it.
    pub fn load(&self) -> Result<AppConfig, AppError> {
        let config: AppConfig = self
            .build()?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Re-read only the `[features]` section.
    pub fn load_features(&self) -> Result<FeatureConfig, AppError> {
        self.build()?
            .try_deserialize::<FeaturesOnly>()
            .map(|f| f.features)
            .map_err(|e| AppError::configuration(format!("Failed to deserialize features: {e}")))
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `ORDERDESK__`.
    pub fn load(source: &ConfigSource) -> Result<Self, AppError> {
        source.load()
    }

    /// Check cross-section constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        let events = &self.events;
        if events.listener_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "events.listener_timeout_seconds must be greater than 0",
            ));
        }
        if events.listener_timeout_seconds > events.publish_budget_seconds {
            return Err(AppError::configuration(format!(
                "events.listener_timeout_seconds ({}) exceeds events.publish_budget_seconds ({})",
                events.listener_timeout_seconds, events.publish_budget_seconds
            )));
        }
        if events.publish_budget_seconds >= self.server.request_timeout_seconds {
            return Err(AppError::configuration(format!(
                "events.publish_budget_seconds ({}) must be below server.request_timeout_seconds ({})",
                events.publish_budget_seconds, self.server.request_timeout_seconds
            )));
        }
        Ok(())
    }
}

fn default_listener_timeout() -> u64 {
    5
}

fn default_publish_budget() -> u64 {
    10
}
