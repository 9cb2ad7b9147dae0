//! In-memory implementation of LeadRepository for development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Employee, Lead, Pharmacy};
use crate::errors::DomainError;

use super::trait_::LeadRepository;

#[derive(Default)]
struct Tables {
    pharmacies: HashMap<Uuid, Pharmacy>,
    employees: HashMap<Uuid, Employee>,
    leads: Vec<Lead>,
}

/// In-memory lead storage
#[derive(Clone, Default)]
pub struct InMemoryLeadRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryLeadRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a pharmacy
    pub async fn insert_pharmacy(&self, pharmacy: Pharmacy) {
        self.tables.write().await.pharmacies.insert(pharmacy.id, pharmacy);
    }

    /// Seed an employee
    pub async fn insert_employee(&self, employee: Employee) {
        self.tables.write().await.employees.insert(employee.id, employee);
    }

    /// Number of stored leads
    pub async fn lead_count(&self) -> usize {
        self.tables.read().await.leads.len()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn list_pharmacies(&self) -> Result<Vec<Pharmacy>, DomainError> {
        let tables = self.tables.read().await;
        let mut pharmacies: Vec<Pharmacy> = tables.pharmacies.values().cloned().collect();
        pharmacies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(pharmacies)
    }

    async fn find_pharmacy(&self, id: Uuid) -> Result<Option<Pharmacy>, DomainError> {
        Ok(self.tables.read().await.pharmacies.get(&id).cloned())
    }

    async fn list_employees(&self, pharmacy_id: Uuid) -> Result<Vec<Employee>, DomainError> {
        let tables = self.tables.read().await;
        let mut employees: Vec<Employee> = tables
            .employees
            .values()
            .filter(|e| e.pharmacy_id == pharmacy_id)
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    async fn find_employee(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
        Ok(self.tables.read().await.employees.get(&id).cloned())
    }

    async fn create_lead(&self, lead: Lead) -> Result<Lead, DomainError> {
        self.tables.write().await.leads.push(lead.clone());
        Ok(lead)
    }

    async fn list_leads(&self, pharmacy_id: Uuid) -> Result<Vec<Lead>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .leads
            .iter()
            .filter(|l| l.pharmacy_id == pharmacy_id)
            .cloned()
            .collect())
    }
}
