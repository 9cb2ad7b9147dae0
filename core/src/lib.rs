//! # PharmaLead Core
//!
//! Core verification logic and domain layer for the PharmaLead backend.
//! This crate contains the phone verification value objects, the error
//! taxonomy, the verification service shared by both HTTP endpoints, the
//! client-side verification flow, and the lead repository interface.

pub mod domain;
pub mod errors;
pub mod flow;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use flow::{PhoneVerificationFlow, VerificationApi, VerifiedPhone};
pub use repositories::{InMemoryLeadRepository, LeadRepository};
pub use services::{
    CheckedVerification, LeadSubmissionService, SendCodeResult, StartedVerification,
    VerificationService, VerificationStrategy, VerifyCodeResult,
};
