//! Browser-side services

pub mod browser;
pub mod relay;
