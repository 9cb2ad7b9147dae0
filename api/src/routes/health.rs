use actix_web::{web, HttpResponse};
use chrono::Utc;
use pl_shared::HealthResponse;

use super::verification::AppState;

/// Handler for GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "pharmalead-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode: state.verification_service.method().as_str().to_string(),
        timestamp: Utc::now(),
    })
}
