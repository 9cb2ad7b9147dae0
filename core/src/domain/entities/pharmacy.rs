//! Pharmacies and the employees who refer leads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A partner pharmacy location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub neighborhood: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

impl Pharmacy {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            created_at: Utc::now(),
        }
    }
}

/// Pharmacy staff member credited with a lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub pharmacy_id: Uuid,
    /// Maintained by the storage side
    pub leads_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>, pharmacy_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
            pharmacy_id,
            leads_count: 0,
            created_at: Utc::now(),
        }
    }
}
