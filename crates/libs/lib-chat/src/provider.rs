//! # Provider Traits
//!
//! The seam between the relay and a hosted conversational-AI service: create a
//! session once, then send it messages. Futures are not required to be `Send`
//! because the relay runs on the browser's single UI thread.

use async_trait::async_trait;

use crate::config::RelayConfig;
use crate::error::ProviderError;
use crate::prompt::system_prompt;

/// Parameters a session is created with
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOptions {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
}

impl SessionOptions {
    /// Options for the Renewal assistant under the given config
    pub fn for_config(config: &RelayConfig) -> Self {
        Self {
            model: config.model.clone(),
            system_prompt: system_prompt(),
            temperature: config.temperature,
        }
    }
}

/// A hosted provider that can open conversation sessions
#[async_trait(?Send)]
pub trait ChatProvider {
    type Session: ChatSession;

    async fn create_session(&self, options: &SessionOptions) -> Result<Self::Session, ProviderError>;
}

/// A conversation whose history the provider side retains
#[async_trait(?Send)]
pub trait ChatSession {
    /// Send one user message. `Ok(None)` means the provider answered without text.
    async fn send_message(&self, text: &str) -> Result<Option<String>, ProviderError>;
}
