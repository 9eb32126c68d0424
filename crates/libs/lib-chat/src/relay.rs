//! # Conversation Relay
//!
//! Turns widget text into provider calls and provider replies into widget text.
//! [`ConversationRelay::send`] never fails: every failure is logged and replaced
//! by one of the scripted replies below, so the widget always has something to
//! append.
//!
//! ## Session lifecycle (per page load)
//!
//! ```text
//! Uninitialized --first send--> SessionActive
//!               \-create fails-> SessionFailed   (terminal until reload)
//! ```
//!
//! The session slot sits behind an async mutex held for the whole creation
//! attempt, so overlapping sends wait for the first one instead of opening a
//! second session.

use std::rc::Rc;

use async_trait::async_trait;
use futures::lock::Mutex;

use crate::config::RelayConfig;
use crate::gemini::GeminiProvider;
use crate::provider::{ChatProvider, ChatSession, SessionOptions};

pub const MISSING_CREDENTIAL_REPLY: &str = "Maaf, fitur Chat AI belum aktif (API Key belum disetting di server). Silakan hubungi admin via WhatsApp.";
pub const SESSION_UNAVAILABLE_REPLY: &str = "Maaf, sistem AI sedang tidak dapat diakses saat ini.";
pub const EMPTY_REPLY: &str = "Maaf, koneksi internet sedang gangguan. Silakan coba lagi.";
pub const SEND_FAILED_REPLY: &str = "Maaf, saya sedang tidak bisa memproses permintaan Anda saat ini.";

/// Anything that answers user text with display text
#[async_trait(?Send)]
pub trait Responder {
    async fn respond(&self, text: &str) -> String;
}

/// Observable relay state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayState {
    Uninitialized,
    SessionActive,
    SessionFailed,
}

enum SessionSlot<S> {
    Empty,
    Active(Rc<S>),
    Failed,
}

pub struct ConversationRelay<P: ChatProvider> {
    config: RelayConfig,
    provider: P,
    slot: Mutex<SessionSlot<P::Session>>,
}

/// The relay the site ships with
pub type GeminiRelay = ConversationRelay<GeminiProvider>;

impl GeminiRelay {
    pub fn gemini(config: RelayConfig) -> Self {
        let provider = GeminiProvider::new(&config);
        Self::new(config, provider)
    }
}

impl<P: ChatProvider> ConversationRelay<P> {
    pub fn new(config: RelayConfig, provider: P) -> Self {
        Self {
            config,
            provider,
            slot: Mutex::new(SessionSlot::Empty),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub async fn state(&self) -> RelayState {
        match &*self.slot.lock().await {
            SessionSlot::Empty => RelayState::Uninitialized,
            SessionSlot::Active(_) => RelayState::SessionActive,
            SessionSlot::Failed => RelayState::SessionFailed,
        }
    }

    /// Send user text and return the text to display.
    pub async fn send(&self, text: &str) -> String {
        if !self.config.has_credential() {
            tracing::warn!("Chat API key is missing; replying with the contact-support message");
            return MISSING_CREDENTIAL_REPLY.to_string();
        }

        let Some(session) = self.ensure_session().await else {
            return SESSION_UNAVAILABLE_REPLY.to_string();
        };

        match session.send_message(text).await {
            Ok(Some(reply)) => reply,
            Ok(None) => {
                tracing::warn!("Provider returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat provider call failed");
                SEND_FAILED_REPLY.to_string()
            }
        }
    }

    /// Return the live session, creating it on first use. `None` once creation has failed.
    async fn ensure_session(&self) -> Option<Rc<P::Session>> {
        let mut slot = self.slot.lock().await;
        match &*slot {
            SessionSlot::Active(session) => return Some(Rc::clone(session)),
            SessionSlot::Failed => return None,
            SessionSlot::Empty => {}
        }

        let options = SessionOptions::for_config(&self.config);
        match self.provider.create_session(&options).await {
            Ok(session) => {
                tracing::info!(model = %options.model, "Chat session created");
                let session = Rc::new(session);
                *slot = SessionSlot::Active(Rc::clone(&session));
                Some(session)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create chat session; relay disabled until reload");
                *slot = SessionSlot::Failed;
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl<P: ChatProvider> Responder for ConversationRelay<P> {
    async fn respond(&self, text: &str) -> String {
        self.send(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    type Scripted = Result<Option<String>, ProviderError>;

    struct FakeSession {
        sends: Rc<Cell<usize>>,
        replies: RefCell<VecDeque<Scripted>>,
    }

    #[async_trait(?Send)]
    impl ChatSession for FakeSession {
        async fn send_message(&self, _text: &str) -> Result<Option<String>, ProviderError> {
            self.sends.set(self.sends.get() + 1);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(Some("default".to_string())))
        }
    }

    struct FakeProvider {
        creates: Rc<Cell<usize>>,
        sends: Rc<Cell<usize>>,
        fail_create: bool,
        replies: RefCell<Option<VecDeque<Scripted>>>,
        last_options: RefCell<Option<SessionOptions>>,
    }

    impl FakeProvider {
        fn new(replies: Vec<Scripted>) -> Self {
            Self {
                creates: Rc::new(Cell::new(0)),
                sends: Rc::new(Cell::new(0)),
                fail_create: false,
                replies: RefCell::new(Some(replies.into())),
                last_options: RefCell::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail_create: true,
                ..Self::new(Vec::new())
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatProvider for FakeProvider {
        type Session = FakeSession;

        async fn create_session(&self, options: &SessionOptions) -> Result<FakeSession, ProviderError> {
            self.creates.set(self.creates.get() + 1);
            *self.last_options.borrow_mut() = Some(options.clone());
            if self.fail_create {
                return Err(ProviderError::Transport("unreachable".to_string()));
            }
            Ok(FakeSession {
                sends: Rc::clone(&self.sends),
                replies: RefCell::new(self.replies.borrow_mut().take().unwrap_or_default()),
            })
        }
    }

    fn keyed() -> RelayConfig {
        RelayConfig::default().with_api_key("secret")
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_calls() {
        let provider = FakeProvider::new(Vec::new());
        let creates = Rc::clone(&provider.creates);
        let sends = Rc::clone(&provider.sends);
        let relay = ConversationRelay::new(RelayConfig::default(), provider);

        for _ in 0..3 {
            assert_eq!(relay.send("anything").await, MISSING_CREDENTIAL_REPLY);
        }
        assert_eq!(creates.get(), 0);
        assert_eq!(sends.get(), 0);
        assert_eq!(relay.state().await, RelayState::Uninitialized);
    }

    #[tokio::test]
    async fn test_session_created_once_and_reused() {
        let provider = FakeProvider::new(vec![Ok(Some("satu".to_string())), Ok(Some("dua".to_string()))]);
        let creates = Rc::clone(&provider.creates);
        let relay = ConversationRelay::new(keyed(), provider);

        assert_eq!(relay.send("a").await, "satu");
        assert_eq!(relay.send("b").await, "dua");
        assert_eq!(creates.get(), 1);
        assert_eq!(relay.state().await, RelayState::SessionActive);
    }

    #[tokio::test]
    async fn test_session_options_carry_prompt_and_temperature() {
        let provider = FakeProvider::new(Vec::new());
        let relay = ConversationRelay::new(keyed(), provider);

        relay.send("halo").await;

        let options = relay.provider.last_options.borrow().clone().unwrap();
        assert_eq!(options.temperature, 0.7);
        assert_eq!(options.model, "gemini-2.5-flash");
        assert!(options.system_prompt.contains("The Deep Clean"));
    }

    #[tokio::test]
    async fn test_failed_creation_is_permanent() {
        let provider = FakeProvider::failing();
        let creates = Rc::clone(&provider.creates);
        let relay = ConversationRelay::new(keyed(), provider);

        assert_eq!(relay.send("a").await, SESSION_UNAVAILABLE_REPLY);
        assert_eq!(relay.send("b").await, SESSION_UNAVAILABLE_REPLY);
        assert_eq!(creates.get(), 1);
        assert_eq!(relay.state().await, RelayState::SessionFailed);
    }

    #[tokio::test]
    async fn test_empty_reply_substituted() {
        let relay = ConversationRelay::new(keyed(), FakeProvider::new(vec![Ok(None)]));
        assert_eq!(relay.send("a").await, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_send_failure_is_one_shot() {
        let provider = FakeProvider::new(vec![
            Err(ProviderError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
            Ok(Some("pulih".to_string())),
        ]);
        let relay = ConversationRelay::new(keyed(), provider);

        assert_eq!(relay.send("a").await, SEND_FAILED_REPLY);
        assert_eq!(relay.send("b").await, "pulih");
        assert_eq!(relay.state().await, RelayState::SessionActive);
    }

    #[tokio::test]
    async fn test_concurrent_first_sends_create_one_session() {
        let provider = FakeProvider::new(Vec::new());
        let creates = Rc::clone(&provider.creates);
        let relay = ConversationRelay::new(keyed(), provider);

        let (a, b) = futures::join!(relay.send("a"), relay.send("b"));

        assert_eq!(a, "default");
        assert_eq!(b, "default");
        assert_eq!(creates.get(), 1);
    }

    #[tokio::test]
    async fn test_responder_delegates_to_send() {
        let relay = ConversationRelay::new(RelayConfig::default(), FakeProvider::new(Vec::new()));
        assert_eq!(relay.respond("x").await, MISSING_CREDENTIAL_REPLY);
    }
}
