//! Chat relay construction from build-time settings
//!
//! Values come from `option_env!`, filled in by `build.rs` from the build
//! environment or a `.env` file.

use lib_chat::config::{API_KEY_ENV, ENDPOINT_ENV, MODEL_ENV, TEMPERATURE_ENV};
use lib_chat::{GeminiRelay, RelayConfig};

fn baked(key: &str) -> Option<String> {
    let value = match key {
        API_KEY_ENV => option_env!("GEMINI_API_KEY"),
        MODEL_ENV => option_env!("GEMINI_MODEL"),
        TEMPERATURE_ENV => option_env!("AI_TEMPERATURE"),
        ENDPOINT_ENV => option_env!("GEMINI_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Relay settings baked into this build
///
/// An unusable temperature is logged and replaced by the default rather than
/// taking the whole widget down.
pub fn relay_config() -> RelayConfig {
    match RelayConfig::from_lookup(baked) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid chat relay setting: {}; using default temperature", e);
            RelayConfig::from_lookup(|key| if key == TEMPERATURE_ENV { None } else { baked(key) })
                .unwrap_or_default()
        }
    }
}

pub fn build_relay() -> GeminiRelay {
    let config = relay_config();
    if !config.has_credential() {
        log::warn!("GEMINI_API_KEY was not set at build time; chat replies will point to WhatsApp");
    }
    GeminiRelay::gemini(config)
}
