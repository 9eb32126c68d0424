use leptos::prelude::*;
use shared::catalog::{BRAND_WORDMARK, OPENING_HOURS, PHONE_DISPLAY, PHONE_HREF, WORKSHOP_ADDRESS};

use crate::utils::constants::LOCATION_ANCHOR;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=LOCATION_ANCHOR class="footer">
            <div class="container footer-grid">
                <div>
                    <span class="footer-brand">{BRAND_WORDMARK}</span>
                    <p class="footer-note">"Professional shoe care for the modern individual in Balikpapan."</p>
                </div>

                <div>
                    <h4>"Lokasi Workshop"</h4>
                    <address class="footer-address">
                        {WORKSHOP_ADDRESS.into_iter().map(|line| view! { <span>{line}</span><br/> }).collect_view()}
                    </address>
                    <p class="footer-note">"Buka: " {OPENING_HOURS}</p>
                </div>

                <div>
                    <h4>"Kontak"</h4>
                    <a href=PHONE_HREF class="footer-link">{PHONE_DISPLAY}</a>
                </div>

                <div>
                    <h4>"Social"</h4>
                    <div class="footer-social">
                        <a href="#" class="social-link" aria-label="Instagram">"IG"</a>
                        <a href="#" class="social-link" aria-label="Twitter">"X"</a>
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>"\u{a9} 2024 Renewal Shoe Care Balikpapan. All rights reserved."</p>
                <div class="footer-legal">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
