//! Booking section
//!
//! Binds every input to the shared [`BookingContext`]. Submitting validates,
//! shows the spinner for a moment, then opens WhatsApp with the prefilled
//! booking message.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::catalog::SERVICES;
use shared::dto::booking::{BookingField, DeliveryType, PaymentMethod};

use crate::components::form_fields::{InputField, SelectCard, TextAreaField};
use crate::state::booking::{use_booking_context, BookingContext};
use crate::utils::constants::BOOKING_ANCHOR;

fn delivery_icon(delivery_type: DeliveryType) -> &'static str {
    match delivery_type {
        DeliveryType::Dropoff => "\u{2302}",
        DeliveryType::Pickup => "\u{21c4}",
    }
}

fn payment_icon(payment_method: PaymentMethod) -> &'static str {
    match payment_method {
        PaymentMethod::Qris => "\u{25a6}",
        PaymentMethod::Cash => "\u{00a4}",
    }
}

fn text_value(booking: BookingContext, field: BookingField) -> Signal<String> {
    Signal::derive(move || booking.field(field))
}

fn text_binding(booking: BookingContext, field: BookingField) -> Callback<String> {
    Callback::new(move |value: String| booking.set_field(field, value))
}

#[component]
pub fn BookingSection() -> impl IntoView {
    let booking = use_booking_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        booking.submit();
    };

    view! {
        <section id=BOOKING_ANCHOR class="section booking">
            <div class="booking-card">
                <div class="section-heading">
                    <h2>"Form Booking"</h2>
                    <p>"Isi data di bawah, kami akan segera konfirmasi via WhatsApp."</p>
                </div>

                <form class="booking-form" on:submit=on_submit>
                    <div class="form-column">
                        <h3 class="form-group-title">"Data Pelanggan"</h3>
                        <InputField
                            field=BookingField::Name
                            value=text_value(booking, BookingField::Name)
                            on_input=text_binding(booking, BookingField::Name)
                        />
                        <InputField
                            field=BookingField::Phone
                            input_type="tel"
                            value=text_value(booking, BookingField::Phone)
                            on_input=text_binding(booking, BookingField::Phone)
                        />
                        <TextAreaField
                            field=BookingField::Address
                            value=text_value(booking, BookingField::Address)
                            on_input=text_binding(booking, BookingField::Address)
                        />
                    </div>

                    <div class="form-column">
                        <h3 class="form-group-title">"Detail Sepatu & Layanan"</h3>
                        <InputField
                            field=BookingField::ShoeBrand
                            value=text_value(booking, BookingField::ShoeBrand)
                            on_input=text_binding(booking, BookingField::ShoeBrand)
                        />
                        <div class="field-pair">
                            <InputField
                                field=BookingField::ShoeType
                                value=text_value(booking, BookingField::ShoeType)
                                on_input=text_binding(booking, BookingField::ShoeType)
                            />
                            <InputField
                                field=BookingField::Color
                                value=text_value(booking, BookingField::Color)
                                on_input=text_binding(booking, BookingField::Color)
                            />
                        </div>

                        <div class="field">
                            <label class="field-label" for="booking-serviceid">{BookingField::ServiceId.label()}</label>
                            <select
                                id="booking-serviceid"
                                class="field-input"
                                on:change=move |ev| booking.select_service(&event_target_value(&ev))
                            >
                                {SERVICES
                                    .iter()
                                    .map(|service| {
                                        view! {
                                            <option
                                                value=service.id
                                                prop:selected=move || booking.service_id() == service.id
                                            >
                                                {format!("{} \u{2014} {}", service.title, service.price)}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="field">
                            <span class="field-label">"Metode Serah Terima"</span>
                            <div class="select-pair" role="radiogroup">
                                {DeliveryType::ALL
                                    .into_iter()
                                    .map(|delivery_type| {
                                        view! {
                                            <SelectCard
                                                active=Signal::derive(move || booking.delivery() == delivery_type)
                                                icon=delivery_icon(delivery_type)
                                                title=delivery_type.title()
                                                subtitle=delivery_type.subtitle()
                                                on_select=Callback::new(move |_: ()| booking.set_delivery(delivery_type))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="field">
                            <span class="field-label">"Metode Pembayaran"</span>
                            <div class="select-pair" role="radiogroup">
                                {PaymentMethod::ALL
                                    .into_iter()
                                    .map(|payment_method| {
                                        view! {
                                            <SelectCard
                                                active=Signal::derive(move || booking.payment() == payment_method)
                                                icon=payment_icon(payment_method)
                                                title=payment_method.title()
                                                subtitle=payment_method.subtitle()
                                                on_select=Callback::new(move |_: ()| booking.set_payment(payment_method))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="form-footer">
                        {move || booking.error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                        <button type="submit" class="submit-button" disabled=move || booking.is_submitting()>
                            {move || {
                                if booking.is_submitting() {
                                    view! {
                                        <span class="spinner" aria-hidden="true"></span>
                                        <span>"Memproses Pesanan..."</span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <span aria-hidden="true">"\u{27a4}"</span>
                                        <span>"Kirim Booking via WhatsApp"</span>
                                    }
                                        .into_any()
                                }
                            }}
                        </button>
                        <p class="form-hint">
                            "Pesanan Anda akan diteruskan langsung ke WhatsApp Admin Renewal untuk konfirmasi jadwal."
                        </p>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_icons_are_distinct() {
        assert_ne!(delivery_icon(DeliveryType::Dropoff), delivery_icon(DeliveryType::Pickup));
        assert_ne!(payment_icon(PaymentMethod::Qris), payment_icon(PaymentMethod::Cash));
    }
}
