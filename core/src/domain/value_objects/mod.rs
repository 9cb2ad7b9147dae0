//! Value objects for phone verification.

pub mod phone_number;
pub mod verification_code;
pub mod verification_method;
pub mod verification_status;

pub use phone_number::PhoneNumber;
pub use verification_code::{VerificationCode, CODE_LENGTH, DEMO_CODE};
pub use verification_method::VerificationMethod;
pub use verification_status::VerificationStatus;
