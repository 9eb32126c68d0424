use leptos::prelude::*;
use shared::catalog::PROCESS_STEPS;

use crate::state::chat::use_chat_context;
use crate::utils::constants::ABOUT_ANCHOR;

/// The three-step workshop process with the chat assistant teaser
#[component]
pub fn ProcessSection() -> impl IntoView {
    let chat = use_chat_context();

    view! {
        <section id=ABOUT_ANCHOR class="section process">
            <div class="process-panel">
                <div>
                    <h2>"Proses Renewal"</h2>
                    <div class="process-steps">
                        {PROCESS_STEPS
                            .iter()
                            .map(|step| {
                                view! {
                                    <div class="process-step">
                                        <span class="process-step-title">{step.title}</span>
                                        <p>{step.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="process-teaser">
                    <div class="teaser-card">
                        <h3>"Bingung pilih paket?"</h3>
                        <p>"Tanya \"Ren\", AI Specialist kami untuk diagnosa kondisi sepatu Anda secara instan."</p>
                        <button type="button" class="teaser-link" on:click=move |_| chat.open()>
                            "\u{2192} Coba widget chat di pojok kanan bawah"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
