//! Lead submission behind the phone verification gate

mod service;

pub use service::LeadSubmissionService;
