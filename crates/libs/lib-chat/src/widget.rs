//! # Chat Widget State
//!
//! UI-independent state machine behind the floating chat widget. The Leptos
//! component keeps one [`ChatWidgetState`] in a signal and drives it through
//! [`ChatWidgetState::begin_submit`] and [`ChatWidgetState::complete_submit`];
//! hosts without a reactive layer can use [`ChatWidgetState::submit_draft`].
//!
//! The `pending` flag serialises submissions, so every reply lands directly
//! after the user turn that triggered it.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use shared::dto::chat::ChatMessage;

use crate::relay::Responder;

/// Appended when the responder panics instead of answering
pub const WIDGET_FALLBACK_REPLY: &str = "Maaf, terjadi kesalahan. Silakan coba lagi.";

#[derive(Clone, Debug, PartialEq)]
pub struct ChatWidgetState {
    pub open: bool,
    pub pending: bool,
    pub draft: String,
    transcript: Vec<ChatMessage>,
}

impl Default for ChatWidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidgetState {
    /// Closed, idle, empty draft, transcript seeded with the greeting
    pub fn new() -> Self {
        Self {
            open: false,
            pending: false,
            draft: String::new(),
            transcript: vec![ChatMessage::greeting()],
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Whether a submit would currently do anything
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Start a submission: append the user turn, clear the draft and mark pending.
    ///
    /// Returns the text to hand to the responder, or `None` when the draft is
    /// blank or a reply is still outstanding.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.transcript.push(ChatMessage::user(text.clone()));
        self.pending = true;
        Some(text)
    }

    /// Finish a submission with whatever the responder produced
    pub fn complete_submit(&mut self, reply: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(reply));
        self.pending = false;
    }

    /// Run a whole submit cycle against `responder`
    pub async fn submit_draft<R>(&mut self, responder: &R) -> bool
    where
        R: Responder + ?Sized,
    {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let reply = guarded_reply(responder, &text).await;
        self.complete_submit(reply);
        true
    }
}

/// Ask `responder` for a reply, substituting [`WIDGET_FALLBACK_REPLY`] if it panics.
///
/// Only effective where panics unwind. `wasm32-unknown-unknown` builds abort on
/// panic, so in the browser this guard never fires and the relay's own
/// error-to-reply mapping is the only protection.
pub async fn guarded_reply<R>(responder: &R, text: &str) -> String
where
    R: Responder + ?Sized,
{
    match AssertUnwindSafe(responder.respond(text)).catch_unwind().await {
        Ok(reply) => reply,
        Err(_) => {
            tracing::error!("Chat responder panicked; showing fallback reply");
            WIDGET_FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::dto::chat::{ChatRole, GREETING_ID};
    use std::cell::Cell;

    struct Echo {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl Responder for Echo {
        async fn respond(&self, text: &str) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("echo: {}", text)
        }
    }

    struct Panicky;

    #[async_trait(?Send)]
    impl Responder for Panicky {
        async fn respond(&self, _text: &str) -> String {
            panic!("relay threw anyway")
        }
    }

    fn echo() -> Echo {
        Echo { calls: Cell::new(0) }
    }

    #[test]
    fn test_initial_state() {
        let state = ChatWidgetState::new();
        assert!(!state.open);
        assert!(!state.pending);
        assert!(state.draft.is_empty());
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript()[0].id, GREETING_ID);
    }

    #[test]
    fn test_toggle_open_leaves_transcript_alone() {
        let mut state = ChatWidgetState::new();
        state.toggle_open();
        assert!(state.open);
        state.toggle_open();
        assert!(!state.open);
        assert_eq!(state.transcript().len(), 1);
    }

    #[test]
    fn test_begin_submit_ignores_blank_draft() {
        let mut state = ChatWidgetState::new();
        state.set_draft("   \n\t");
        assert_eq!(state.begin_submit(), None);
        assert!(!state.pending);
        assert_eq!(state.transcript().len(), 1);
    }

    #[test]
    fn test_begin_submit_blocked_while_pending() {
        let mut state = ChatWidgetState::new();
        state.set_draft("pertama");
        assert_eq!(state.begin_submit().as_deref(), Some("pertama"));

        state.set_draft("kedua");
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.draft, "kedua");
        assert_eq!(state.transcript().len(), 2);

        state.complete_submit("balasan");
        assert!(!state.pending);
        assert_eq!(state.begin_submit().as_deref(), Some("kedua"));
    }

    #[tokio::test]
    async fn test_submit_cycle() {
        let responder = echo();
        let mut state = ChatWidgetState::new();
        state.toggle_open();
        state.set_draft("sepatu saya kuning karena lama");

        assert!(state.submit_draft(&responder).await);

        let transcript = state.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, ChatRole::User);
        assert_eq!(transcript[1].text, "sepatu saya kuning karena lama");
        assert_eq!(transcript[2].role, ChatRole::Assistant);
        assert_eq!(transcript[2].text, "echo: sepatu saya kuning karena lama");
        assert!(!state.pending);
        assert!(state.draft.is_empty());
    }

    #[tokio::test]
    async fn test_blank_submit_dispatches_nothing() {
        let responder = echo();
        let mut state = ChatWidgetState::new();

        assert!(!state.submit_draft(&responder).await);
        assert_eq!(responder.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_transcript_grows_by_two_per_cycle() {
        let responder = echo();
        let mut state = ChatWidgetState::new();

        for n in 1..=4 {
            state.set_draft(format!("pesan {}", n));
            state.submit_draft(&responder).await;
            assert_eq!(state.transcript().len(), 1 + 2 * n);
        }

        for (index, message) in state.transcript().iter().enumerate().skip(1) {
            let expected = if index % 2 == 1 { ChatRole::User } else { ChatRole::Assistant };
            assert_eq!(message.role, expected);
        }
        assert_eq!(responder.calls.get(), 4);
    }

    #[tokio::test]
    async fn test_panicking_responder_yields_fallback() {
        let mut state = ChatWidgetState::new();
        state.set_draft("halo");

        assert!(state.submit_draft(&Panicky).await);

        assert_eq!(state.transcript()[2].text, WIDGET_FALLBACK_REPLY);
        assert!(!state.pending);
    }
}
