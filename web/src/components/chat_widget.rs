//! Floating "Ren" chat widget

use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::prelude::*;
use shared::dto::chat::ChatMessage;

use crate::state::chat::use_chat_context;
use crate::utils::scroll::scroll_into_view_smooth;

fn bubble_class(message: &ChatMessage) -> &'static str {
    if message.role.is_user() {
        "chat-bubble user"
    } else {
        "chat-bubble assistant"
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = use_chat_context();
    let end_ref = NodeRef::<Div>::new();

    // Keep the newest entry in view after every transcript change and on open
    let scroll_key = Memo::new(move |_| chat.widget.with(|w| (w.transcript().len(), w.pending, w.open)));
    Effect::new(move || {
        scroll_key.track();
        if let Some(end) = end_ref.get() {
            scroll_into_view_smooth(&end);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        chat.submit();
    };

    view! {
        <div class="chat-widget">
            <Show
                when=move || chat.is_open()
                fallback=move || {
                    view! {
                        <button class="chat-toggle" aria-label="Buka chat" on:click=move |_| chat.toggle()>
                            "\u{1f4ac}"
                        </button>
                    }
                }
            >
                <div class="chat-window">
                    <div class="chat-header">
                        <div class="chat-title">
                            <span class="chat-sparkle" aria-hidden="true">"\u{2728}"</span>
                            <div>
                                <h3>"Ren AI Specialist"</h3>
                                <p>"Online"</p>
                            </div>
                        </div>
                        <button class="chat-close" aria-label="Tutup chat" on:click=move |_| chat.toggle()>
                            "\u{2715}"
                        </button>
                    </div>

                    <div class="chat-messages">
                        <For
                            each=move || chat.transcript()
                            key=|message: &ChatMessage| message.id.clone()
                            children=move |message: ChatMessage| {
                                let row_class = if message.role.is_user() { "chat-row user" } else { "chat-row" };
                                let bubble = bubble_class(&message);
                                view! {
                                    <div class=row_class>
                                        <div class=bubble>{message.text}</div>
                                    </div>
                                }
                            }
                        />
                        <Show when=move || chat.is_pending()>
                            <div class="chat-row">
                                <div class="chat-bubble assistant">
                                    <span class="spinner small" aria-label="Ren sedang mengetik"></span>
                                </div>
                            </div>
                        </Show>
                        <div node_ref=end_ref></div>
                    </div>

                    <form class="chat-input" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Tanya soal cuci sepatu..."
                            prop:value=move || chat.draft()
                            on:input=move |ev| chat.set_draft(event_target_value(&ev))
                        />
                        <button type="submit" class="chat-send" aria-label="Kirim" disabled=move || !chat.can_submit()>
                            "\u{27a4}"
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_class_by_role() {
        assert_eq!(bubble_class(&ChatMessage::user("halo")), "chat-bubble user");
        assert_eq!(bubble_class(&ChatMessage::greeting()), "chat-bubble assistant");
    }
}
