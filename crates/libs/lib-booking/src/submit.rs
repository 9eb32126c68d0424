//! # Booking Submission
//!
//! Submitting waits a short, injectable delay (the "processing" spinner), then
//! formats the booking into a WhatsApp message and hands the deep link to an
//! injectable [`Handoff`]. No network call is made here.

use std::time::Duration;

use async_trait::async_trait;
use shared::dto::booking::BookingRequest;
use shared::utils::{booking_url, format_booking_message};

use crate::error::{BookingError, Result};

/// Pause shown to the user before the handoff
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

/// Waits for a duration. Browser builds use a timer; tests return immediately.
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

/// Opens a messaging deep link in a new browsing context
pub trait Handoff {
    fn open(&self, url: &str) -> Result<()>;
}

/// What was handed off
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingHandoff {
    pub message: String,
    pub url: String,
}

/// Check required fields, wait [`SUBMIT_LATENCY`], then hand the WhatsApp link
/// to `handoff`. The caller owns the form's `submitting` flag around this call.
pub async fn submit_booking<D, H>(request: &BookingRequest, delay: &D, handoff: &H) -> Result<BookingHandoff>
where
    D: Delay + ?Sized,
    H: Handoff + ?Sized,
{
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(BookingError::MissingFields(missing));
    }

    delay.wait(SUBMIT_LATENCY).await;

    let message = format_booking_message(request);
    let url = booking_url(request);
    handoff.open(&url)?;

    tracing::info!(service_id = %request.service_id, "Booking handed off to WhatsApp");
    Ok(BookingHandoff { message, url })
}
