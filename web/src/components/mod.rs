//! UI Components

pub mod booking_form;
pub mod button;
pub mod chat_widget;
pub mod footer;
pub mod form_fields;
pub mod hero;
pub mod navbar;
pub mod process;
pub mod services;

pub use booking_form::BookingSection;
pub use chat_widget::ChatWidget;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use process::ProcessSection;
pub use services::ServicesSection;
