//! Verification service module for SMS one-time codes
//!
//! This module provides the workflow shared by both HTTP endpoints:
//! - Request validation before any provider work
//! - Phone normalization to the canonical `+55...` form
//! - Dispatch to the live provider or the development strategy
//! - Mapping of provider statuses onto the verification outcome

mod service;
mod traits;
mod types;


pub use service::VerificationService;
pub use traits::VerificationStrategy;
pub use types::{CheckedVerification, SendCodeResult, StartedVerification, VerifyCodeResult};
