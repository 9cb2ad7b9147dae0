//! Lead repository trait defining the interface to the hosted lead database.
//!
//! The storage service itself is outside this workspace; only the
//! operations the lead form needs are described here.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Employee, Lead, Pharmacy};
use crate::errors::DomainError;

/// Read/write access to pharmacies, employees and leads
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// List every partner pharmacy
    async fn list_pharmacies(&self) -> Result<Vec<Pharmacy>, DomainError>;

    /// Find a pharmacy by id
    ///
    /// # Returns
    /// * `Ok(None)` - No pharmacy with that id
    async fn find_pharmacy(&self, id: Uuid) -> Result<Option<Pharmacy>, DomainError>;

    /// List the employees of one pharmacy
    async fn list_employees(&self, pharmacy_id: Uuid) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by id
    async fn find_employee(&self, id: Uuid) -> Result<Option<Employee>, DomainError>;

    /// Persist a new lead and return it as stored
    async fn create_lead(&self, lead: Lead) -> Result<Lead, DomainError>;

    /// All leads credited to one pharmacy
    async fn list_leads(&self, pharmacy_id: Uuid) -> Result<Vec<Lead>, DomainError>;
}
