//! # Chat Data Transfer Objects
//!
//! A chat turn as shown in the widget transcript. Turns are created once and
//! never edited; the transcript only ever appends them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Id of the seeded assistant greeting.
pub const GREETING_ID: &str = "welcome";

/// Text of the seeded assistant greeting.
pub const GREETING_TEXT: &str = "Halo! Saya Ren, spesialis perawatan sepatu Anda. Ada yang bisa saya bantu terkait kondisi sepatu Anda hari ini?";

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn is_user(&self) -> bool {
        matches!(self, ChatRole::User)
    }
}

/// A single chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    /// The assistant welcome every transcript starts with.
    pub fn greeting() -> Self {
        Self {
            id: GREETING_ID.to_string(),
            role: ChatRole::Assistant,
            text: GREETING_TEXT.to_string(),
            timestamp: Utc::now(),
        }
    }
}
