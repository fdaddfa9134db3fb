//! Layered application settings.
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file, then
//! `MARQUEE__*` environment variables (`MARQUEE__GEMINI__TEXT_MODEL`,
//! `MARQUEE__DECODE_POLICY`, ...). Plain `GEMINI_*` variables are honored
//! last for the Gemini section.

use derive_getters::Getters;
use marquee_core::DecodePolicy;
use marquee_error::{ConfigError, MarqueeResult};
use marquee_models::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "MARQUEE";

/// How log lines are written to stderr.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct MarqueeConfig {
    /// How to treat model output that does not match its schema
    decode_policy: DecodePolicy,
    /// Log output format
    log_format: LogFormat,
    /// Gemini connection settings
    gemini: GeminiConfig,
}

impl MarqueeConfig {
    /// Default location of the config file, `<config_dir>/marquee/marquee.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("marquee").join("marquee.toml"))
    }

    /// Load configuration from `path` (or the default location) and the
    /// process environment.
    ///
    /// An explicitly named file must exist; the default file is optional.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> MarqueeResult<Self> {
        let environment = ::config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true);
        let mut loaded = Self::load_with(path, environment)?;
        loaded.gemini.apply_env_overrides();
        Ok(loaded)
    }

    /// Load configuration from `path` and an explicit environment source.
    pub fn load_with(
        path: Option<&Path>,
        environment: ::config::Environment,
    ) -> MarqueeResult<Self> {
        let mut builder = ::config::Config::builder();

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Reading config file");
                builder = builder.add_source(::config::File::from(path).required(true));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    tracing::debug!(path = %default.display(), "Checking default config file");
                    builder = builder.add_source(::config::File::from(default).required(false));
                }
            }
        }

        let settings = builder
            .add_source(environment)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        tracing::debug!(
            text_model = %loaded.gemini.text_model(),
            decode_policy = %loaded.decode_policy,
            has_api_key = loaded.gemini.has_api_key(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Render the effective configuration as TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> MarqueeResult<String> {
        let redacted = Self {
            gemini: self.gemini.redacted(),
            ..self.clone()
        };
        Ok(toml::to_string_pretty(&redacted)
            .map_err(|e| ConfigError::new(format!("Failed to serialize configuration: {}", e)))?)
    }
}
