//! Client flow driven against a running server in development mode

mod common;

use actix_web::HttpServer;
use std::sync::Arc;
use std::time::Duration;

use pl_api::app::create_app;
use pl_core::domain::entities::{Employee, NewLead, Pharmacy, TelemedicineInterest};
use pl_core::flow::{FlowState, PhoneVerificationFlow};
use pl_core::{InMemoryLeadRepository, LeadSubmissionService};
use pl_infra::HttpVerificationApi;
use pl_shared::Language;

fn spawn_server() -> String {
    let state = common::fallback_state();
    let server = HttpServer::new(move || create_app(state.clone(), 16 * 1024))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn api(base_url: &str) -> HttpVerificationApi {
    HttpVerificationApi::new(base_url, None, Duration::from_secs(5)).expect("client")
}

#[actix_web::test]
async fn test_verified_flow_produces_lead() {
    let base_url = spawn_server();
    let mut flow = PhoneVerificationFlow::new(api(&base_url), "(11) 99999-9999", Language::Portuguese);

    flow.start().await.unwrap();
    assert_eq!(flow.state(), FlowState::Coded);
    assert_eq!(flow.fallback_hint(), Some("123456"));

    flow.set_code("123456");
    let proof = flow.submit().await.unwrap().expect("phone should be verified");
    assert_eq!(flow.state(), FlowState::Verified);

    let repo = Arc::new(InMemoryLeadRepository::new());
    let pharmacy = Pharmacy::new("Droga Leste Centro", "Rua A, 10", "Centro", "São Paulo");
    let employee = Employee::new("Ana", "Farmacêutica", pharmacy.id);
    repo.insert_pharmacy(pharmacy.clone()).await;
    repo.insert_employee(employee.clone()).await;

    let lead = LeadSubmissionService::new(repo.clone())
        .submit(
            proof,
            NewLead {
                customer_name: "Maria Souza".to_string(),
                email: "maria@example.com".to_string(),
                age: 42,
                household_size: 3,
                telemedicine_interest: TelemedicineInterest::VeryInterested,
                pharmacy_id: pharmacy.id,
                employee_id: employee.id,
            },
        )
        .await
        .unwrap();

    assert!(lead.phone_verified);
    assert_eq!(lead.phone, "+5511999999999");
    assert_eq!(repo.lead_count().await, 1);
}

#[actix_web::test]
async fn test_missing_phone_fails_send() {
    let base_url = spawn_server();
    let mut flow = PhoneVerificationFlow::new(api(&base_url), "", Language::Portuguese);

    flow.start().await.unwrap();

    assert_eq!(flow.state(), FlowState::SendFailed);
    assert_eq!(flow.error(), Some("Número de telefone é obrigatório"));
}

#[actix_web::test]
async fn test_unreachable_server_is_connection_error() {
    let mut flow = PhoneVerificationFlow::new(api("http://127.0.0.1:1"), "11999999999", Language::English);

    flow.start().await.unwrap();

    assert_eq!(flow.state(), FlowState::SendFailed);
    assert_eq!(
        flow.error(),
        Some("Connection error. Check your internet and try again.")
    );
}
