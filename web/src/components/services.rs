//! Service catalog cards

use leptos::prelude::*;
use shared::catalog::{ServiceOffering, SERVICES};

use crate::components::button::{Button, ButtonVariant};
use crate::state::booking::use_booking_context;
use crate::utils::constants::SERVICES_ANCHOR;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=SERVICES_ANCHOR class="section services">
            <div class="container">
                <div class="section-heading">
                    <h2>"Pilihan Paket"</h2>
                    <p>
                        "Harga transparan, mulai dari Rp 15.000. Disesuaikan dengan kondisi dan kebutuhan sepatu Anda."
                    </p>
                </div>
                <div class="service-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static ServiceOffering) -> impl IntoView {
    let booking = use_booking_context();
    let service_id = service.id;

    view! {
        <article class="service-card" data-tier=service.tier.label()>
            <div class="service-body">
                <h3>{service.title}</h3>
                <p class="service-description">{service.description}</p>
                <div class="service-price">{service.price}</div>
                <ul class="service-features">
                    {service
                        .features
                        .iter()
                        .map(|feature| view! { <li><span class="check">"\u{2713}"</span>{*feature}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="service-footer">
                <Button
                    variant=ButtonVariant::Outline
                    full_width=true
                    on_click=Callback::new(move |_: ()| booking.choose_service(service_id))
                >
                    "Pilih Paket"
                </Button>
                <div class="service-fit">
                    <span class="service-fit-label">"Cocok Untuk"</span>
                    <p>{service.recommended_for}</p>
                </div>
            </div>
        </article>
    }
}
