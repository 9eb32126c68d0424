//! Utility functions and constants

pub mod constants;
pub mod scroll;
