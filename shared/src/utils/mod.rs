//! Utility modules

pub mod phone;
pub mod validation;
