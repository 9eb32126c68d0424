//! Smooth scrolling between page sections

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smoothly bring the element with `id` into view
pub fn scroll_to_anchor(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available; cannot scroll to #{}", id);
        return;
    };

    match document.get_element_by_id(id) {
        Some(element) => scroll_into_view_smooth(&element),
        None => log::warn!("Anchor #{} not found", id),
    }
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
