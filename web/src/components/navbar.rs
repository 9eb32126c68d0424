//! Navigation Bar Component

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use shared::catalog::BRAND_WORDMARK;

use crate::utils::constants::NAV_LINKS;
use crate::utils::scroll::{scroll_to_anchor, scroll_to_top};

fn nav_links(class: &'static str, menu_open: RwSignal<bool>) -> impl IntoView {
    NAV_LINKS
        .into_iter()
        .map(|(label, anchor)| {
            view! {
                <a
                    href=format!("#{}", anchor)
                    class=class
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        menu_open.set(false);
                        scroll_to_anchor(anchor);
                    }
                >
                    {label}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <span
                    class="nav-brand"
                    on:click=move |_| {
                        menu_open.set(false);
                        scroll_to_top();
                    }
                >
                    {BRAND_WORDMARK}
                </span>

                <div class="nav-links">{nav_links("nav-link", menu_open)}</div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-mobile">{nav_links("nav-mobile-link", menu_open)}</div>
            </Show>
        </nav>
    }
}
