//! The single landing page: every section stacked in scroll order

use leptos::prelude::*;

use crate::components::{BookingSection, ChatWidget, Footer, Hero, ProcessSection, ServicesSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <ServicesSection/>
            <ProcessSection/>
            <BookingSection/>
        </main>
        <Footer/>
        <ChatWidget/>
    }
}
