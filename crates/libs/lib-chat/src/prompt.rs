//! System prompt for the "Ren" assistant, generated from the service catalog so
//! prices and package names never drift from what the page shows.

use shared::catalog::{
    BRAND_NAME, CITY, OPENING_HOURS, PICKUP_SURCHARGE, SERVICES, WHATSAPP_LOCAL, WORKSHOP_ADDRESS,
};
use shared::dto::booking::{DeliveryType, PaymentMethod};

pub const ASSISTANT_NAME: &str = "Ren";

pub fn system_prompt() -> String {
    let mut prompt = format!(
        "You are \"{ASSISTANT_NAME}\", the AI Specialist for \"{BRAND_NAME}\", a premium shoe care business located in {CITY}, Indonesia.\n\
         Your goal is to assist customers by diagnosing shoe issues and recommending the correct {BRAND_NAME} service package.\n\n\
         Services available (Currency: IDR / Rupiah):\n"
    );

    for (index, service) in SERVICES.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. \"{}\" ({}) - {}: {} Recommended for: {}. Includes: {}.\n",
            index + 1,
            service.title,
            service.tier.label(),
            service.price,
            service.description,
            service.recommended_for,
            service.features.join(", "),
        ));
    }

    prompt.push_str("\nAdditional Options:\n");
    prompt.push_str("- Drop off at Workshop: Gratis (Free).\n");
    prompt.push_str(&format!(
        "- {} (Pickup & Delivery): + {}.\n",
        DeliveryType::Pickup.title(),
        PICKUP_SURCHARGE
    ));

    prompt.push_str("\nPayment Methods:\n");
    for method in PaymentMethod::ALL {
        prompt.push_str(&format!("- {} ({})\n", method.message_label(), method.subtitle()));
    }

    prompt.push_str(&format!(
        "\nLocation: {}.\n\
         Opening hours: {}.\n\
         Contact: WhatsApp {}.\n\
         Tone: Professional, minimalist, helpful, and concise. Use Indonesian slang slightly if the user is casual, otherwise standard English or Indonesian.\n\
         If you are unsure, ask for more details about the material (leather, suede, knit) or the specific damage.\n\
         Always end with a polite call to action to book the service using the form below.\n",
        WORKSHOP_ADDRESS.join(", "),
        OPENING_HOURS,
        WHATSAPP_LOCAL,
    ));

    prompt
}
