//! # Service Catalog
//!
//! The three fixed service tiers and the business facts shown across the page
//! and fed to the chat assistant's system prompt.

use serde::Serialize;

pub const BRAND_NAME: &str = "Renewal";
pub const BRAND_WORDMARK: &str = "RENEWAL.";
pub const CITY: &str = "Balikpapan";

/// Workshop address, one line per element
pub const WORKSHOP_ADDRESS: [&str; 3] = [
    "Jl. Kalimaya",
    "Kelurahan Damai",
    "Kecamatan Balikpapan Kota",
];

pub const OPENING_HOURS: &str = "Senin - Sabtu (10.00 - 20.00)";

/// WhatsApp number in international form, as used by `wa.me` links
pub const WHATSAPP_NUMBER: &str = "628176468354";
/// The same number written the local way
pub const WHATSAPP_LOCAL: &str = "08176468354";
pub const PHONE_DISPLAY: &str = "+62 817 6468 354";
pub const PHONE_HREF: &str = "tel:+628176468354";

pub const PICKUP_SURCHARGE: &str = "Rp 5.000";

/// Pricing tier of a service offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PricingTier {
    Basic,
    Premium,
    Restoration,
}

impl PricingTier {
    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Basic => "Fast Clean",
            PricingTier::Premium => "Premium",
            PricingTier::Restoration => "Restoration",
        }
    }
}

/// A service offering shown as a card and selectable in the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub tier: PricingTier,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub recommended_for: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        id: "refresh",
        tier: PricingTier::Basic,
        title: "The Refresh",
        description: "Pembersihan cepat untuk debu harian.",
        price: "Rp 15.000",
        recommended_for: "Debu ringan, pemakaian harian",
        features: &["Upper cleaning", "Midsole wipe-down", "Fast process", "Basic deodorizing"],
    },
    ServiceOffering {
        id: "deep",
        tier: PricingTier::Premium,
        title: "The Deep Clean",
        description: "Layanan signature kami untuk sepatu kotor berat.",
        price: "Rp 25.000",
        recommended_for: "Lumpur, noda membandel, kotoran menumpuk",
        features: &[
            "Deep upper scrub",
            "Undersole detailing",
            "Insole steam clean",
            "Stain treatment",
            "Water & stain repellent",
        ],
    },
    ServiceOffering {
        id: "revival",
        tier: PricingTier::Restoration,
        title: "The Revival",
        description: "Restorasi total untuk sepatu vintage atau luxury.",
        price: "Rp 45.000+",
        recommended_for: "Yellowing, kerusakan suede, lem lepas",
        features: &[
            "Suede restoration",
            "Sole un-yellowing",
            "Repaint minor",
            "Leather conditioning",
            "Crease removal",
        ],
    },
];

/// One step of the workshop process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub static PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        title: "01. Inspect / Cek",
        description: "Analisis material sepatu untuk menentukan metode yang aman.",
    },
    ProcessStep {
        title: "02. Treat / Rawat",
        description: "Pembersihan menggunakan solusi eco-friendly khusus (Leather/Suede/Knit).",
    },
    ProcessStep {
        title: "03. Protect / Lindungi",
        description: "Finishing dengan lapisan pelindung untuk menolak debu dan noda baru.",
    },
];

pub fn find_service(id: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|service| service.id == id)
}

/// Display title for a service id, or the id itself when it is not in the catalog
pub fn service_title(id: &str) -> &str {
    find_service(id).map(|service| service.title).unwrap_or(id)
}
