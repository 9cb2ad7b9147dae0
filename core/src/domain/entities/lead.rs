//! Lead captured by the landing-page form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How interested the customer is in the telemedicine plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemedicineInterest {
    #[serde(rename = "muito_interessado")]
    VeryInterested,
    #[serde(rename = "interessado")]
    Interested,
    #[serde(rename = "pouco_interessado")]
    SlightlyInterested,
    #[serde(rename = "nao_interessado")]
    NotInterested,
}

/// Form input for a new lead. The phone comes from the verification proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub customer_name: String,
    pub email: String,
    pub age: u8,
    /// People covered, including the customer
    pub household_size: u8,
    pub telemedicine_interest: TelemedicineInterest,
    pub pharmacy_id: Uuid,
    pub employee_id: Uuid,
}

/// A persisted lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    /// Canonical `+55...` form
    pub phone: String,
    pub phone_verified: bool,
    pub age: u8,
    pub household_size: u8,
    pub telemedicine_interest: TelemedicineInterest,
    pub pharmacy_id: Uuid,
    pub employee_id: Uuid,
    pub created_at: DateTime<Utc>,
}
