//! Renewal Web App - Leptos Frontend
//!
//! Single-page landing site for the Renewal shoe-care workshop: service
//! catalog, booking form that hands off to WhatsApp, and the Ren chat widget.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_SCREEN_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Renewal web app starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
    hide_loading_screen();
}

/// Hide the static loading screen from index.html once the app is mounted
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available; cannot hide loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        log::warn!("Loading element #{} not found", LOADING_SCREEN_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}
