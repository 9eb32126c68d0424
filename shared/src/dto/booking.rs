//! # Booking Data Transfer Objects
//!
//! The booking form record. It lives only in form memory and is flattened into a
//! WhatsApp message on submit; nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::catalog::PICKUP_SURCHARGE;

/// Service preselected in a fresh form.
pub const DEFAULT_SERVICE_ID: &str = "deep";

/// How the shoes reach the workshop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    #[default]
    Dropoff,
    Pickup,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 2] = [DeliveryType::Dropoff, DeliveryType::Pickup];

    /// Line used in the booking message
    pub fn message_label(&self) -> String {
        match self {
            DeliveryType::Dropoff => "Drop off di Workshop (Gratis)".to_string(),
            DeliveryType::Pickup => format!("Antar Jemput (+ {})", PICKUP_SURCHARGE),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeliveryType::Dropoff => "Drop Off",
            DeliveryType::Pickup => "Antar Jemput",
        }
    }

    pub fn subtitle(&self) -> String {
        match self {
            DeliveryType::Dropoff => "Gratis ke Workshop".to_string(),
            DeliveryType::Pickup => format!("+ {}", PICKUP_SURCHARGE),
        }
    }
}

/// How the customer pays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Qris,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Qris, PaymentMethod::Cash];

    pub fn message_label(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Cash => "Tunai / Cash",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Cash => "Tunai",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "Scan & Go",
            PaymentMethod::Cash => "Bayar Ditempat",
        }
    }
}

/// Text-valued fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Name,
    Phone,
    Address,
    ShoeBrand,
    ShoeType,
    Color,
    ServiceId,
}

impl BookingField {
    /// Fields the form marks as required
    pub const REQUIRED: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Address,
        BookingField::ShoeBrand,
        BookingField::ShoeType,
        BookingField::Color,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Nama Lengkap",
            BookingField::Phone => "Nomor WhatsApp",
            BookingField::Address => "Alamat Lengkap",
            BookingField::ShoeBrand => "Merk Sepatu",
            BookingField::ShoeType => "Tipe",
            BookingField::Color => "Warna",
            BookingField::ServiceId => "Pilih Paket",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BookingField::Name => "Contoh: Budi Santoso",
            BookingField::Phone => "0812...",
            BookingField::Address => "Jalan, Kelurahan, Kecamatan...",
            BookingField::ShoeBrand => "Nike, Adidas, dll",
            BookingField::ShoeType => "Sneakers/Boots",
            BookingField::Color => "Putih/Hitam",
            BookingField::ServiceId => "",
        }
    }
}

/// Booking form record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub shoe_brand: String,
    pub shoe_type: String,
    pub color: String,
    pub service_id: String,
    pub delivery_type: DeliveryType,
    pub payment_method: PaymentMethod,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            shoe_brand: String::new(),
            shoe_type: String::new(),
            color: String::new(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            delivery_type: DeliveryType::default(),
            payment_method: PaymentMethod::default(),
        }
    }
}

impl BookingRequest {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Address => &self.address,
            BookingField::ShoeBrand => &self.shoe_brand,
            BookingField::ShoeType => &self.shoe_type,
            BookingField::Color => &self.color,
            BookingField::ServiceId => &self.service_id,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Phone => self.phone = value,
            BookingField::Address => self.address = value,
            BookingField::ShoeBrand => self.shoe_brand = value,
            BookingField::ShoeType => self.shoe_type = value,
            BookingField::Color => self.color = value,
            BookingField::ServiceId => self.service_id = value,
        }
    }

    /// Required fields that are still blank, in form order
    pub fn missing_fields(&self) -> Vec<BookingField> {
        BookingField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = BookingRequest::default();
        assert_eq!(request.service_id, "deep");
        assert_eq!(request.delivery_type, DeliveryType::Dropoff);
        assert_eq!(request.payment_method, PaymentMethod::Qris);
        assert_eq!(request.missing_fields().len(), BookingField::REQUIRED.len());
    }

    #[test]
    fn test_field_binding() {
        let mut request = BookingRequest::default();
        request.set(BookingField::ShoeBrand, "Nike");
        request.set(BookingField::ServiceId, "revival");

        assert_eq!(request.shoe_brand, "Nike");
        assert_eq!(request.get(BookingField::ServiceId), "revival");
    }

    #[test]
    fn test_missing_fields_ignores_whitespace_only_values() {
        let mut request = BookingRequest::default();
        for field in BookingField::REQUIRED {
            request.set(field, "x");
        }
        request.set(BookingField::Color, "   ");

        assert_eq!(request.missing_fields(), vec![BookingField::Color]);
    }

    #[test]
    fn test_delivery_labels_carry_surcharge() {
        assert_eq!(DeliveryType::Pickup.message_label(), "Antar Jemput (+ Rp 5.000)");
        assert_eq!(DeliveryType::Dropoff.message_label(), "Drop off di Workshop (Gratis)");
        assert_eq!(DeliveryType::Pickup.subtitle(), "+ Rp 5.000");
    }

    #[test]
    fn test_enums_deserialize_from_form_values() {
        let delivery: DeliveryType = serde_json::from_str("\"pickup\"").unwrap();
        let payment: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(delivery, DeliveryType::Pickup);
        assert_eq!(payment, PaymentMethod::Cash);
    }
}
