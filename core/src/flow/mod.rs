//! Client-side phone verification flow
//!
//! Drives the two verification endpoints through a `VerificationApi` and
//! hands out a `VerifiedPhone` proof once the server reports success.

pub mod api;
pub mod phone_verification_flow;
pub mod verified_phone;


pub use api::{ClientError, SendCodeReply, VerificationApi, VerifyCodeReply};
pub use phone_verification_flow::{FlowError, FlowState, PhoneVerificationFlow};
pub use verified_phone::VerifiedPhone;
