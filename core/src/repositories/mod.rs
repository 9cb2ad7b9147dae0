//! Repository interfaces for the lead storage collaborator.

pub mod lead;

pub use lead::{InMemoryLeadRepository, LeadRepository};
