use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::utils::constants::{ABOUT_ANCHOR, BOOKING_ANCHOR, HERO_IMAGE_URL};
use crate::utils::scroll::scroll_to_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        "Hidupkan kembali " <br/>
                        <span class="muted">"langkah terbaikmu."</span>
                    </h1>
                    <p class="hero-lead">
                        "Premium shoe cleaning & care di Balikpapan. Pendekatan minimalis, hasil maksimal untuk sepatu kesayangan Anda."
                    </p>
                    <div class="hero-actions">
                        <Button size=ButtonSize::Lg on_click=Callback::new(move |_: ()| scroll_to_anchor(BOOKING_ANCHOR))>
                            "Booking Sekarang"
                        </Button>
                        <Button
                            size=ButtonSize::Lg
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(move |_: ()| scroll_to_anchor(ABOUT_ANCHOR))
                        >
                            "Cara Kerja"
                        </Button>
                    </div>
                </div>
                <div class="hero-media">
                    <img src=HERO_IMAGE_URL alt="Fresh natural clean sneakers outdoors" class="hero-image"/>
                </div>
            </div>
        </section>
    }
}
