//! # Shared Domain Library
//!
//! Types and pure helpers used by every crate of the Renewal site: the chat
//! relay, the booking form and the Leptos frontend.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data types shared across crates
//!   - **[`dto::chat`]**: Chat turns shown in the widget transcript
//!   - **[`dto::booking`]**: The booking form record and its enumerated choices
//! - **[`catalog`]**: The fixed service catalog and business constants
//! - **[`utils`]**: Booking message formatting and WhatsApp deep links
//!
//! ## Wire Format
//!
//! Enums serialize to lowercase strings, matching the values the form and the
//! chat transcript use (`"user"`, `"pickup"`, `"qris"`, ...).
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::booking::{BookingRequest, DeliveryType};
//! use shared::utils::booking_url;
//!
//! let mut request = BookingRequest::default();
//! request.name = "Budi Santoso".to_string();
//! request.delivery_type = DeliveryType::Pickup;
//!
//! let url = booking_url(&request);
//! assert!(url.starts_with("https://wa.me/628176468354?text="));
//! ```

pub mod catalog;
pub mod dto;
pub mod utils;

pub use catalog::*;
pub use dto::*;
pub use utils::*;
