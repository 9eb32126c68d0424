//! Global reactive state

pub mod booking;
pub mod chat;
