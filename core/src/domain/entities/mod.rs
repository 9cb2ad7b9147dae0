//! Lead-form entities owned by the lead storage collaborator.

pub mod lead;
pub mod pharmacy;

pub use lead::{Lead, NewLead, TelemedicineInterest};
pub use pharmacy::{Employee, Pharmacy};
