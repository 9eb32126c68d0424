//! Renewal Web App - root component and routing

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::HomePage;
use crate::state::booking::provide_booking_context;
use crate::state::chat::provide_chat_context;

#[component]
pub fn App() -> impl IntoView {
    provide_booking_context();
    provide_chat_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="section not-found">
            <h1>"404 - Halaman tidak ditemukan"</h1>
            <p>"Halaman yang Anda cari tidak ada."</p>
            <A href="/">
                <span class="btn btn-primary btn-md">"Kembali ke Beranda"</span>
            </A>
        </section>
    }
}
