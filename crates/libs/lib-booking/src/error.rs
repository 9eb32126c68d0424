use shared::dto::booking::BookingField;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Required fields left blank, in form order
    #[error("Missing required fields: {}", field_labels(.0))]
    MissingFields(Vec<BookingField>),

    /// A submission is already in flight
    #[error("Booking is already being submitted")]
    AlreadySubmitting,

    /// The messaging deep link could not be opened (e.g. popup blocked)
    #[error("Could not open WhatsApp: {0}")]
    Handoff(String),
}

fn field_labels(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(BookingField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_uses_labels() {
        let err = BookingError::MissingFields(vec![BookingField::Name, BookingField::Color]);
        assert_eq!(err.to_string(), "Missing required fields: Nama Lengkap, Warna");
    }
}
