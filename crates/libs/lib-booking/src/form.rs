//! # Booking Form State
//!
//! The record behind the booking section plus its `submitting` flag. Field
//! updates go through [`BookingField`] so the UI binds each input explicitly.

use shared::catalog::find_service;
use shared::dto::booking::{BookingField, BookingRequest, DeliveryType, PaymentMethod};

use crate::error::{BookingError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub request: BookingRequest,
    pub submitting: bool,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>) {
        self.request.set(field, value);
    }

    /// Select a catalog service. Unknown ids are ignored.
    pub fn select_service(&mut self, service_id: &str) -> bool {
        match find_service(service_id) {
            Some(service) => {
                self.request.service_id = service.id.to_string();
                true
            }
            None => {
                tracing::warn!(service_id, "Ignoring unknown service selection");
                false
            }
        }
    }

    pub fn set_delivery(&mut self, delivery_type: DeliveryType) {
        self.request.delivery_type = delivery_type;
    }

    pub fn set_payment(&mut self, payment_method: PaymentMethod) {
        self.request.payment_method = payment_method;
    }

    /// Mark the form as submitting and return a snapshot for [`submit_booking`].
    /// Required fields are checked by [`submit_booking`] itself.
    ///
    /// [`submit_booking`]: crate::submit::submit_booking
    pub fn begin_submit(&mut self) -> Result<BookingRequest> {
        if self.submitting {
            return Err(BookingError::AlreadySubmitting);
        }
        self.submitting = true;
        Ok(self.request.clone())
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.set_field(BookingField::Name, "Budi Santoso");
        form.set_field(BookingField::Phone, "081234567890");
        form.set_field(BookingField::Address, "Jl. Kalimaya No. 1");
        form.set_field(BookingField::ShoeBrand, "Nike");
        form.set_field(BookingField::ShoeType, "Sneakers");
        form.set_field(BookingField::Color, "Putih");
        form
    }

    #[test]
    fn test_select_service() {
        let mut form = BookingForm::new();
        assert!(form.select_service("revival"));
        assert_eq!(form.request.service_id, "revival");

        assert!(!form.select_service("polish"));
        assert_eq!(form.request.service_id, "revival");
    }

    #[test]
    fn test_begin_submit_snapshots_request() {
        let mut form = filled_form();
        form.set_field(BookingField::Address, "");

        let request = form.begin_submit().unwrap();

        assert_eq!(request, form.request);
        assert_eq!(request.missing_fields(), vec![BookingField::Address]);
        assert!(form.submitting);
    }

    #[test]
    fn test_begin_submit_guards_double_submission() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.submitting);
        assert_eq!(form.begin_submit(), Err(BookingError::AlreadySubmitting));

        form.finish_submit();
        assert!(form.begin_submit().is_ok());
    }
}
