//! Chat widget state management
//!
//! The widget state is plain data and lives in a signal. The relay owns the
//! provider session and is single-threaded, so it is kept in local storage.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_chat::{guarded_reply, ChatWidgetState, GeminiRelay};
use shared::dto::chat::ChatMessage;

use crate::services::relay::build_relay;

#[derive(Clone, Copy)]
pub struct ChatContext {
    pub widget: RwSignal<ChatWidgetState>,
    relay: StoredValue<Rc<GeminiRelay>, LocalStorage>,
}

impl ChatContext {
    pub fn new(relay: GeminiRelay) -> Self {
        Self {
            widget: RwSignal::new(ChatWidgetState::new()),
            relay: StoredValue::new_local(Rc::new(relay)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.widget.with(|w| w.open)
    }

    pub fn is_pending(&self) -> bool {
        self.widget.with(|w| w.pending)
    }

    pub fn can_submit(&self) -> bool {
        self.widget.with(|w| w.can_submit())
    }

    pub fn draft(&self) -> String {
        self.widget.with(|w| w.draft.clone())
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.widget.with(|w| w.transcript().to_vec())
    }

    pub fn toggle(&self) {
        self.widget.update(|w| w.toggle_open());
    }

    pub fn open(&self) {
        self.widget.update(|w| w.open = true);
    }

    pub fn set_draft(&self, draft: String) {
        self.widget.update(|w| w.set_draft(draft));
    }

    /// Append the draft as a user turn and fetch the assistant's reply
    pub fn submit(&self) {
        let Some(text) = self.widget.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };

        let relay = self.relay.get_value();
        let widget = self.widget;
        spawn_local(async move {
            let reply = guarded_reply(&*relay, &text).await;
            widget.update(|w| w.complete_submit(reply));
        });
    }
}

pub fn provide_chat_context() -> ChatContext {
    let context = ChatContext::new(build_relay());
    provide_context(context);
    context
}

pub fn use_chat_context() -> ChatContext {
    expect_context::<ChatContext>()
}
