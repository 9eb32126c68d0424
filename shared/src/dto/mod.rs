//! # Data Transfer Objects (DTOs)
//!
//! Data structures passed between the relay, the booking form and the UI.
//!
//! ## Module Organization
//!
//! - [`chat`] - Chat turns and sender roles
//! - [`booking`] - Booking form record, delivery and payment choices
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`

pub mod booking;
pub mod chat;

pub use booking::*;
pub use chat::*;
