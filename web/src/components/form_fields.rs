//! Booking form inputs
//!
//! Each field takes its label, placeholder and binding explicitly, so a parent
//! re-render never recreates the input element and drops focus.

use leptos::prelude::*;
use shared::dto::booking::BookingField;

fn field_id(field: BookingField) -> String {
    format!("booking-{:?}", field).to_lowercase()
}

#[component]
pub fn InputField(
    field: BookingField,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let id = field_id(field);
    view! {
        <div class="field">
            <label class="field-label" for=id.clone()>{field.label()}</label>
            <input
                id=id
                class="field-input"
                type=input_type
                placeholder=field.placeholder()
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    field: BookingField,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let id = field_id(field);
    view! {
        <div class="field">
            <label class="field-label" for=id.clone()>{field.label()}</label>
            <textarea
                id=id
                class="field-input field-textarea"
                rows=rows
                placeholder=field.placeholder()
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Clickable card for one option of a two-way choice
#[component]
pub fn SelectCard(
    #[prop(into)] active: Signal<bool>,
    icon: &'static str,
    title: &'static str,
    #[prop(into)] subtitle: String,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=move || if active.get() { "select-card active" } else { "select-card" }
            role="radio"
            aria-checked=move || active.get().to_string()
            on:click=move |_| on_select.run(())
        >
            <span class="select-card-icon" aria-hidden="true">{icon}</span>
            <div class="select-card-text">
                <span class="select-card-title">{title}</span>
                <span class="select-card-subtitle">{subtitle}</span>
            </div>
            <Show when=move || active.get()>
                <span class="select-card-dot"></span>
            </Show>
        </div>
    }
}
