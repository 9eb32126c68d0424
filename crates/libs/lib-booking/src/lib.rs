//! # Booking Library
//!
//! Booking form state and the submit-to-WhatsApp flow.
//!
//! - [`form`] - [`BookingForm`]: field binding, selections, submitting guard
//! - [`submit`] - [`submit_booking`] with injectable [`Delay`] and [`Handoff`]
//! - [`error`] - [`BookingError`]

pub mod error;
pub mod form;
pub mod submit;

pub use error::{BookingError, Result};
pub use form::BookingForm;
pub use submit::{submit_booking, BookingHandoff, Delay, Handoff, SUBMIT_LATENCY};
