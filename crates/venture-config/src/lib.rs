//! # venture-config
//!
//! Layered configuration loading for Venture using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `OPENROUTER_API_KEY` (the credential only)
//! 2. Environment variables (`VENTURE_*` prefix, `__` as separator)
//! 3. Project-level `./venture.toml`
//! 4. User-level `~/.config/venture/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VENTURE_GATEWAY__TEMPERATURE` -> `gateway.temperature`,
//! `VENTURE_SERVER__BIND` -> `server.bind`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use venture_config::VentureConfig;
//!
//! let config = VentureConfig::load_with_dotenv().expect("config");
//!
//! if config.openrouter.is_configured() {
//!     println!("model: {}", config.openrouter.model);
//! }
//! ```

mod dotenv;
mod error;
mod gateway;
mod openrouter;
mod server;

pub use dotenv::{DOTENV_FILE, DotenvStatus};
pub use error::ConfigError;
pub use gateway::GatewayConfig;
pub use openrouter::{DEFAULT_API_URL, DEFAULT_APP_TITLE, DEFAULT_MODEL, OpenRouterConfig};
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the OpenRouter credential.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Project-local config file, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "venture.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VentureConfig {
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl VentureConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory first, then [`Self::load`].
    ///
    /// Variables already present in the process environment are not
    /// overwritten by the `.env` file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Prefixed environment variables
        figment = figment.merge(Env::prefixed("VENTURE_").split("__"));

        // Layer 4: The conventional credential variable
        figment.merge(
            Env::raw()
                .only(&[API_KEY_ENV])
                .map(|_| "openrouter.api_key".into()),
        )
    }

    /// Reject values the completion endpoint would refuse anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let temperature = self.gateway.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidValue {
                field: "gateway.temperature".into(),
                reason: format!("{temperature} is outside 0.0..=2.0"),
            });
        }
        for (field, value) in [
            ("gateway.idea_max_tokens", self.gateway.idea_max_tokens),
            ("gateway.validation_max_tokens", self.gateway.validation_max_tokens),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must be greater than zero".into(),
                });
            }
        }
        if self.openrouter.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "openrouter.api_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("venture").join("config.toml"))
    }
}
