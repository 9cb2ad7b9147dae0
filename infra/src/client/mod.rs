//! Clients for this backend's own HTTP endpoints

pub mod http_verification_api;

pub use http_verification_api::HttpVerificationApi;
