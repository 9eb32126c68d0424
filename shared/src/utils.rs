//! # Shared Utility Functions
//!
//! Booking message formatting and WhatsApp deep links.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::whatsapp_url;
//!
//! let url = whatsapp_url("628176468354", "Halo Renewal");
//! assert_eq!(url, "https://wa.me/628176468354?text=Halo%20Renewal");
//! ```

use crate::catalog::{service_title, BRAND_NAME, WHATSAPP_NUMBER};
use crate::dto::booking::BookingRequest;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Flatten a booking into the newline-delimited text sent over WhatsApp.
///
/// Line order is fixed: name, address, shoe brand, shoe type, color, package,
/// delivery method, payment method. The phone number is not repeated because
/// the message arrives from it.
pub fn format_booking_message(request: &BookingRequest) -> String {
    let lines = [
        format!("Halo {}, saya ingin booking jasa cuci sepatu:", BRAND_NAME),
        String::new(),
        format!("Nama: {}", request.name),
        format!("Alamat: {}", request.address),
        format!("Merk Sepatu: {}", request.shoe_brand),
        format!("Tipe: {}", request.shoe_type),
        format!("Warna: {}", request.color),
        format!("Paket: {}", service_title(&request.service_id)),
        format!("Metode: {}", request.delivery_type.message_label()),
        format!("Pembayaran: {}", request.payment_method.message_label()),
    ];
    lines.join("\n")
}

/// Build a `wa.me` link that opens a chat with `phone` prefilled with `text`
pub fn whatsapp_url(phone: &str, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        phone,
        urlencoding::encode(text)
    )
}

/// Deep link that hands a booking off to the business WhatsApp account
pub fn booking_url(request: &BookingRequest) -> String {
    whatsapp_url(WHATSAPP_NUMBER, &format_booking_message(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::booking::{DeliveryType, PaymentMethod};

    fn filled_request() -> BookingRequest {
        BookingRequest {
            name: "Budi Santoso".to_string(),
            phone: "081234567890".to_string(),
            address: "Jl. Kalimaya No. 1".to_string(),
            shoe_brand: "Nike".to_string(),
            shoe_type: "Sneakers".to_string(),
            color: "Putih".to_string(),
            service_id: "refresh".to_string(),
            delivery_type: DeliveryType::Pickup,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_format_booking_message_line_order() {
        let message = format_booking_message(&filled_request());
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Halo Renewal, saya ingin booking jasa cuci sepatu:",
                "",
                "Nama: Budi Santoso",
                "Alamat: Jl. Kalimaya No. 1",
                "Merk Sepatu: Nike",
                "Tipe: Sneakers",
                "Warna: Putih",
                "Paket: The Refresh",
                "Metode: Antar Jemput (+ Rp 5.000)",
                "Pembayaran: Tunai / Cash",
            ]
        );
        assert!(!message.ends_with('\n'));
    }

    #[test]
    fn test_format_booking_message_dropoff_qris() {
        let mut request = filled_request();
        request.delivery_type = DeliveryType::Dropoff;
        request.payment_method = PaymentMethod::Qris;

        let message = format_booking_message(&request);
        assert!(message.contains("Metode: Drop off di Workshop (Gratis)"));
        assert!(message.contains("Pembayaran: QRIS"));
    }

    #[test]
    fn test_format_booking_message_unknown_service_uses_id() {
        let mut request = filled_request();
        request.service_id = "polish".to_string();
        assert!(format_booking_message(&request).contains("Paket: polish"));
    }

    #[test]
    fn test_whatsapp_url_percent_encodes_text() {
        let url = whatsapp_url("628176468354", "Nama: Budi\nWarna: Putih & Hitam");
        assert_eq!(
            url,
            "https://wa.me/628176468354?text=Nama%3A%20Budi%0AWarna%3A%20Putih%20%26%20Hitam"
        );
    }

    #[test]
    fn test_booking_url_targets_business_number() {
        let url = booking_url(&filled_request());
        let (base, query) = url.split_once("?text=").unwrap();

        assert_eq!(base, "https://wa.me/628176468354");
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(
            urlencoding::decode(query).unwrap(),
            format_booking_message(&filled_request())
        );
    }
}
