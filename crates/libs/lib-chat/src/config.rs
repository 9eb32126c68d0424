//! # Relay Configuration
//!
//! Settings for the hosted conversational-AI provider. Values come from a key
//! lookup so the same parsing serves the process environment on native targets
//! and compile-time variables in the wasm build.
//!
//! | Key | Default |
//! |---|---|
//! | `GEMINI_API_KEY` | none (relay answers with the missing-credential reply) |
//! | `GEMINI_MODEL` | `gemini-2.5-flash` |
//! | `AI_TEMPERATURE` | `0.7` |
//! | `GEMINI_ENDPOINT` | `https://generativelanguage.googleapis.com/v1beta` |

use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const TEMPERATURE_ENV: &str = "AI_TEMPERATURE";
pub const ENDPOINT_ENV: &str = "GEMINI_ENDPOINT";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const TEMPERATURE_RANGE: (f32, f32) = (0.0, 2.0);

#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    /// Provider API key; `None` disables the relay
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl RelayConfig {
    /// Build a config from a key lookup. Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let temperature = match get(TEMPERATURE_ENV) {
            Some(raw) => parse_temperature(&raw)?,
            None => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            api_key: get(API_KEY_ENV),
            model: get(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            endpoint: get(ENDPOINT_ENV)
                .map(|endpoint| endpoint.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }

    /// Build a config from the process environment, loading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Whether a non-blank credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

fn parse_temperature(raw: &str) -> Result<f32, ConfigError> {
    let value = raw.parse::<f32>().map_err(|_| ConfigError::NotANumber {
        key: TEMPERATURE_ENV,
        value: raw.to_string(),
    })?;

    let (min, max) = TEMPERATURE_RANGE;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            key: TEMPERATURE_ENV,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
