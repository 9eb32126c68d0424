//! Browser implementations of the booking submit seams

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_booking::{BookingError, Delay, Handoff};

/// Waits on a `setTimeout` timer
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Opens the handoff link in a new browser tab
pub struct WindowHandoff;

impl Handoff for WindowHandoff {
    fn open(&self, url: &str) -> lib_booking::Result<()> {
        let window = web_sys::window().ok_or_else(|| BookingError::Handoff("no window available".to_string()))?;

        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(BookingError::Handoff("new tab was blocked by the browser".to_string())),
            Err(e) => Err(BookingError::Handoff(format!("{:?}", e))),
        }
    }
}
