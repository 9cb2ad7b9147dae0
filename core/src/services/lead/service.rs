//! Lead submission service

use chrono::Utc;
use std::sync::Arc;
use tracing;
use uuid::Uuid;

use crate::domain::entities::{Lead, NewLead};
use crate::errors::{DomainError, DomainResult};
use crate::flow::VerifiedPhone;
use crate::repositories::LeadRepository;

/// Writes leads for verified phones only
pub struct LeadSubmissionService<R: LeadRepository> {
    repository: Arc<R>,
}

impl<R: LeadRepository> LeadSubmissionService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Store a lead for a phone that passed verification
    ///
    /// The referenced pharmacy and employee must both exist. The stored lead
    /// carries the canonical phone from the proof and `phone_verified = true`.
    pub async fn submit(&self, verified: VerifiedPhone, input: NewLead) -> DomainResult<Lead> {
        if self.repository.find_pharmacy(input.pharmacy_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: format!("pharmacy {}", input.pharmacy_id),
            });
        }

        let employee = self
            .repository
            .find_employee(input.employee_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("employee {}", input.employee_id),
            })?;
        if employee.pharmacy_id != input.pharmacy_id {
            return Err(DomainError::NotFound {
                resource: format!("employee {} at pharmacy {}", input.employee_id, input.pharmacy_id),
            });
        }

        let lead = Lead {
            id: Uuid::new_v4(),
            customer_name: input.customer_name,
            email: input.email,
            phone: verified.phone().as_str().to_string(),
            phone_verified: true,
            age: input.age,
            household_size: input.household_size,
            telemedicine_interest: input.telemedicine_interest,
            pharmacy_id: input.pharmacy_id,
            employee_id: input.employee_id,
            created_at: Utc::now(),
        };

        let lead = self.repository.create_lead(lead).await?;
        tracing::info!(
            lead_id = %lead.id,
            phone = %verified.phone().masked(),
            method = verified.method().as_str(),
            event = "lead_created",
            "Lead stored"
        );
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Employee, Pharmacy, TelemedicineInterest};
    use crate::domain::value_objects::{PhoneNumber, VerificationMethod};
    use crate::repositories::InMemoryLeadRepository;

    async fn seeded() -> (Arc<InMemoryLeadRepository>, Pharmacy, Employee) {
        let repo = Arc::new(InMemoryLeadRepository::new());
        let pharmacy = Pharmacy::new("Droga Leste Centro", "Rua A, 10", "Centro", "São Paulo");
        let employee = Employee::new("Ana", "Farmacêutica", pharmacy.id);
        repo.insert_pharmacy(pharmacy.clone()).await;
        repo.insert_employee(employee.clone()).await;
        (repo, pharmacy, employee)
    }

    fn new_lead(pharmacy_id: Uuid, employee_id: Uuid) -> NewLead {
        NewLead {
            customer_name: "Maria Souza".to_string(),
            email: "maria@example.com".to_string(),
            age: 42,
            household_size: 3,
            telemedicine_interest: TelemedicineInterest::Interested,
            pharmacy_id,
            employee_id,
        }
    }

    fn proof() -> VerifiedPhone {
        VerifiedPhone::new(
            PhoneNumber::normalize("(11) 99999-9999"),
            VerificationMethod::TwilioVerify,
        )
    }

    #[tokio::test]
    async fn test_submit_stores_verified_lead() {
        let (repo, pharmacy, employee) = seeded().await;
        let service = LeadSubmissionService::new(repo.clone());

        let lead = service
            .submit(proof(), new_lead(pharmacy.id, employee.id))
            .await
            .unwrap();

        assert!(lead.phone_verified);
        assert_eq!(lead.phone, "+5511999999999");
        assert_eq!(repo.lead_count().await, 1);
        assert_eq!(repo.list_leads(pharmacy.id).await.unwrap()[0].id, lead.id);
    }

    #[tokio::test]
    async fn test_submit_unknown_pharmacy() {
        let (repo, _, employee) = seeded().await;
        let service = LeadSubmissionService::new(repo.clone());

        let err = service
            .submit(proof(), new_lead(Uuid::new_v4(), employee.id))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(repo.lead_count().await, 0);
    }

    #[tokio::test]
    async fn test_submit_employee_from_other_pharmacy() {
        let (repo, pharmacy, _) = seeded().await;
        let other = Pharmacy::new("Droga Leste Tatuapé", "Rua B, 20", "Tatuapé", "São Paulo");
        let outsider = Employee::new("Bruno", "Atendente", other.id);
        repo.insert_pharmacy(other).await;
        repo.insert_employee(outsider.clone()).await;
        let service = LeadSubmissionService::new(repo.clone());

        let result = service.submit(proof(), new_lead(pharmacy.id, outsider.id)).await;

        assert!(result.is_err());
        assert_eq!(repo.lead_count().await, 0);
    }
}
