//! # Chat Library
//!
//! The chat side of the Renewal site: a relay that forwards visitor questions to
//! a hosted conversational-AI provider, and the widget state machine that shows
//! the conversation.
//!
//! ## Modules
//!
//! - [`relay`] - [`ConversationRelay`], scripted fallback replies, [`Responder`]
//! - [`provider`] - [`ChatProvider`] / [`ChatSession`] traits and [`SessionOptions`]
//! - [`gemini`] - Gemini `generateContent` implementation of the provider traits
//! - [`prompt`] - System prompt built from the service catalog
//! - [`widget`] - [`ChatWidgetState`] and [`guarded_reply`]
//! - [`config`] - [`RelayConfig`] from env-style keys
//! - [`error`] - [`ProviderError`] and [`ConfigError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_chat::{ChatWidgetState, GeminiRelay, RelayConfig};
//!
//! # async fn run() -> Result<(), lib_chat::ConfigError> {
//! let relay = GeminiRelay::gemini(RelayConfig::from_env()?);
//! let mut widget = ChatWidgetState::new();
//!
//! widget.set_draft("Sepatu suede saya berjamur, paket apa yang cocok?");
//! widget.submit_draft(&relay).await;
//!
//! println!("{}", widget.transcript().last().map(|m| m.text.as_str()).unwrap_or(""));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod relay;
pub mod widget;

pub use config::RelayConfig;
pub use error::{ConfigError, ProviderError};
pub use gemini::{GeminiProvider, GeminiSession};
pub use provider::{ChatProvider, ChatSession, SessionOptions};
pub use relay::{ConversationRelay, GeminiRelay, RelayState, Responder};
pub use widget::{guarded_reply, ChatWidgetState};
