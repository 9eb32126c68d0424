//! # Gemini Provider
//!
//! [`ChatProvider`] backed by the Gemini `generateContent` REST endpoint.
//!
//! The endpoint is stateless, so a [`GeminiSession`] keeps the conversation
//! history itself and resends it with every request, together with the system
//! instruction and temperature the session was created with. A turn is only
//! committed to history once the provider has answered it with text.
//!
//! ```text
//! POST {endpoint}/models/{model}:generateContent
//! x-goog-api-key: <key>
//!
//! {
//!   "systemInstruction": { "parts": [{ "text": "You are \"Ren\"..." }] },
//!   "contents": [{ "role": "user", "parts": [{ "text": "sepatu saya kuning" }] }],
//!   "generationConfig": { "temperature": 0.7 }
//! }
//! ```

use std::cell::RefCell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;
use crate::error::ProviderError;
use crate::provider::{ChatProvider, ChatSession, SessionOptions};

const API_KEY_HEADER: &str = "x-goog-api-key";
const ROLE_USER: &str = "user";
const ROLE_MODEL: &str = "model";

// region: --- Wire types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            parts: vec![Part::text(text)],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ROLE_MODEL.to_string(),
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub system_instruction: SystemInstruction,
    pub contents: &'a [Content],
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate as sent, or `None` when it is missing or blank
    pub fn reply_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

// endregion: --- Wire types

// region: --- Provider

/// Creates Gemini sessions from a [`RelayConfig`]
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiProvider {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ChatProvider for GeminiProvider {
    type Session = GeminiSession;

    async fn create_session(&self, options: &SessionOptions) -> Result<GeminiSession, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::MissingCredential("Gemini API key is not set".to_string()))?;

        tracing::debug!(model = %options.model, temperature = options.temperature, "Creating Gemini chat session");

        Ok(GeminiSession {
            client: self.client.clone(),
            url: format!("{}/models/{}:generateContent", self.endpoint, options.model),
            api_key: api_key.to_string(),
            system_prompt: options.system_prompt.clone(),
            temperature: options.temperature,
            history: RefCell::new(Vec::new()),
        })
    }
}

/// One Gemini conversation with client-held history
#[derive(Debug)]
pub struct GeminiSession {
    client: reqwest::Client,
    url: String,
    api_key: String,
    system_prompt: String,
    temperature: f32,
    history: RefCell<Vec<Content>>,
}

impl GeminiSession {
    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    fn request_body<'a>(&self, contents: &'a [Content]) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(self.system_prompt.clone())],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

#[async_trait(?Send)]
impl ChatSession for GeminiSession {
    async fn send_message(&self, text: &str) -> Result<Option<String>, ProviderError> {
        // Never hold the history borrow across the await.
        let mut contents = self.history.borrow().clone();
        contents.push(Content::user(text));

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(&contents))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
        let reply = parsed.reply_text();

        if let Some(reply) = &reply {
            let mut history = self.history.borrow_mut();
            history.push(Content::user(text));
            history.push(Content::model(reply.clone()));
        }

        Ok(reply)
    }
}

// endregion: --- Provider
