//! Booking form state management

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_booking::{submit_booking, BookingForm};
use shared::dto::booking::{BookingField, DeliveryType, PaymentMethod};

use crate::services::browser::{TimerDelay, WindowHandoff};
use crate::utils::constants::BOOKING_ANCHOR;
use crate::utils::scroll::scroll_to_anchor;

/// Global booking context, shared by the service cards and the booking section
#[derive(Clone, Copy)]
pub struct BookingContext {
    pub form: RwSignal<BookingForm>,
    /// Last submit problem shown under the form
    pub error: RwSignal<Option<String>>,
}

impl BookingContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BookingForm::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn field(&self, field: BookingField) -> String {
        self.form.with(|f| f.request.get(field).to_string())
    }

    pub fn set_field(&self, field: BookingField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn service_id(&self) -> String {
        self.form.with(|f| f.request.service_id.clone())
    }

    pub fn select_service(&self, service_id: &str) {
        self.form.update(|f| {
            f.select_service(service_id);
        });
    }

    /// "Pilih Paket" on a service card: preselect it and jump to the form
    pub fn choose_service(&self, service_id: &str) {
        self.select_service(service_id);
        scroll_to_anchor(BOOKING_ANCHOR);
    }

    pub fn delivery(&self) -> DeliveryType {
        self.form.with(|f| f.request.delivery_type)
    }

    pub fn set_delivery(&self, delivery_type: DeliveryType) {
        self.form.update(|f| f.set_delivery(delivery_type));
    }

    pub fn payment(&self) -> PaymentMethod {
        self.form.with(|f| f.request.payment_method)
    }

    pub fn set_payment(&self, payment_method: PaymentMethod) {
        self.form.update(|f| f.set_payment(payment_method));
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|f| f.submitting)
    }

    /// Show the spinner, validate, then open the WhatsApp handoff in a new tab
    pub fn submit(&self) {
        let request = match self.form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("Booking already in flight: {}", e);
                self.error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        self.error.set(None);

        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            if let Err(e) = submit_booking(&request, &TimerDelay, &WindowHandoff).await {
                log::warn!("Booking not submitted: {}", e);
                error.set(Some(e.to_string()));
            }
            form.update(|f| f.finish_submit());
        });
    }
}

impl Default for BookingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_booking_context() -> BookingContext {
    let context = BookingContext::new();
    provide_context(context);
    context
}

pub fn use_booking_context() -> BookingContext {
    expect_context::<BookingContext>()
}
