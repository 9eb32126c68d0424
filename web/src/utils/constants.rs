//! Application constants

/// Element in index.html shown until the wasm bundle mounts
pub const LOADING_SCREEN_ID: &str = "leptos-loading";

// Section anchors
pub const SERVICES_ANCHOR: &str = "services";
pub const ABOUT_ANCHOR: &str = "about";
pub const BOOKING_ANCHOR: &str = "booking";
/// The footer doubles as the location section
pub const LOCATION_ANCHOR: &str = "footer";

/// Navbar entries as (label, anchor)
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Services", SERVICES_ANCHOR),
    ("About", ABOUT_ANCHOR),
    ("Booking", BOOKING_ANCHOR),
    ("Location", LOCATION_ANCHOR),
];

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1560769629-975ec94e6a86?q=80&w=2525&auto=format&fit=crop";
