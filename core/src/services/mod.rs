//! Business services containing domain logic and use cases.

pub mod lead;
pub mod verification;

// Re-export commonly used types
pub use lead::LeadSubmissionService;
pub use verification::{
    CheckedVerification, SendCodeResult, StartedVerification, VerificationService,
    VerificationStrategy, VerifyCodeResult,
};
