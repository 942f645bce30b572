//! Runtime configuration shared by every collaborator of a [`crate::TideGauge`].
//!
//! A `Config` is built once at start-up, either through [`Config::builder`] or
//! from the environment with [`Config::from_env`], and then handed around by
//! reference.

use crate::types::product::ProductThresholds;
use bon::Builder;
use std::env;
use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
/// Nominatim's usage policy asks for a User-Agent naming the application.
pub const NOMINATIM_USER_AGENT: &str = "OceanTechHackathon/1.0";
pub const NOAA_STATIONS_URL: &str =
    "https://api.tidesandcurrents.noaa.gov/mdapi/prod/webapi/stations.json";
pub const NOAA_DATA_URL: &str = "https://api.tidesandcurrents.noaa.gov/api/prod/datagetter";

const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
const MODEL_VAR: &str = "ANTHROPIC_MODEL";
const MAX_TOKENS_VAR: &str = "TIDEGAUGE_MAX_TOKENS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    MissingVar(&'static str),

    #[error("Environment variable '{name}' has invalid value '{value}'")]
    InvalidVar {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Endpoints, credentials, product thresholds and timeouts.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tidegauge::Config;
///
/// let config = Config::builder()
///     .anthropic_api_key("sk-test")
///     .data_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.max_tokens, 1024);
/// assert_eq!(config.thresholds.fine_max_days, 31);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Config {
    /// Only needed by the assistant.
    #[builder(into)]
    pub anthropic_api_key: Option<String>,
    #[builder(into, default = DEFAULT_MODEL.to_owned())]
    pub anthropic_model: String,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
    #[builder(into, default = ANTHROPIC_MESSAGES_URL.to_owned())]
    pub anthropic_url: String,
    #[builder(into, default = NOMINATIM_URL.to_owned())]
    pub nominatim_url: String,
    #[builder(into, default = NOMINATIM_USER_AGENT.to_owned())]
    pub nominatim_user_agent: String,
    #[builder(into, default = NOAA_STATIONS_URL.to_owned())]
    pub noaa_stations_url: String,
    #[builder(into, default = NOAA_DATA_URL.to_owned())]
    pub noaa_data_url: String,
    #[builder(default)]
    pub thresholds: ProductThresholds,
    #[builder(default = Duration::from_secs(10))]
    pub geocoding_timeout: Duration,
    #[builder(default = Duration::from_secs(15))]
    pub stations_timeout: Duration,
    #[builder(default = Duration::from_secs(30))]
    pub data_timeout: Duration,
    #[builder(default = Duration::from_secs(60))]
    pub assistant_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    /// Reads configuration from the process environment, loading a `.env`
    /// file first if one exists.
    ///
    /// Recognised variables: `ANTHROPIC_API_KEY`, `ANTHROPIC_MODEL` and
    /// `TIDEGAUGE_MAX_TOKENS`. Everything else uses the builder defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let max_tokens = non_blank(MAX_TOKENS_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|source| ConfigError::InvalidVar {
                        name: MAX_TOKENS_VAR,
                        value,
                        source,
                    })
            })
            .transpose()?;

        Ok(Config::builder()
            .maybe_anthropic_api_key(non_blank(API_KEY_VAR))
            .maybe_anthropic_model(non_blank(MODEL_VAR))
            .maybe_max_tokens(max_tokens)
            .build())
    }

    /// The API key, or [`ConfigError::MissingVar`] if none was configured.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.anthropic_api_key
            .as_deref()
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.anthropic_model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.nominatim_user_agent, "OceanTechHackathon/1.0");
        assert_eq!(config.thresholds, ProductThresholds::default());
        assert_eq!(config.geocoding_timeout, Duration::from_secs(10));
        assert_eq!(config.stations_timeout, Duration::from_secs(15));
        assert_eq!(config.data_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-abc"),
            ("ANTHROPIC_MODEL", "claude-haiku"),
            ("TIDEGAUGE_MAX_TOKENS", " 256 "),
        ]))
        .unwrap();
        assert_eq!(config.require_api_key().unwrap(), "sk-abc");
        assert_eq!(config.anthropic_model, "claude-haiku");
        assert_eq!(config.max_tokens, 256);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "   "),
            ("ANTHROPIC_MODEL", ""),
        ]))
        .unwrap();
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.anthropic_model, DEFAULT_MODEL);
        assert!(matches!(
            config.require_api_key(),
            Err(ConfigError::MissingVar("ANTHROPIC_API_KEY"))
        ));
    }

    #[test]
    fn test_invalid_max_tokens() {
        let err = Config::from_lookup(lookup_from(&[("TIDEGAUGE_MAX_TOKENS", "lots")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidVar { name, value, .. } => {
                assert_eq!(name, "TIDEGAUGE_MAX_TOKENS");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
