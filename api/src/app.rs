//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use pl_core::VerificationService;
use pl_infra::{create_verification_strategy, InfrastructureError};
use pl_shared::VerifyProviderConfig;

use crate::handlers::error::{json_error_handler, Endpoint};
use crate::middleware::cors::{create_cors, preflight_ok};
use crate::routes::health::health_check;
use crate::routes::verification::{send_sms_verification, verify_sms_code, AppState};

/// Build the shared state from provider configuration
///
/// The verification backend is chosen here, once, for the whole process.
pub fn build_state(verify: &VerifyProviderConfig) -> Result<web::Data<AppState>, InfrastructureError> {
    let strategy = create_verification_strategy(verify)?;
    let service = Arc::new(VerificationService::new(strategy));
    Ok(web::Data::new(AppState::new(service)))
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (the logger is outermost so every request is logged)
        .wrap(create_cors())
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Verification endpoints
        .service(
            web::resource("/send-sms-verification")
                .app_data(
                    web::JsonConfig::default()
                        .limit(max_payload_size)
                        .error_handler(json_error_handler(Endpoint::Send)),
                )
                .route(web::post().to(send_sms_verification))
                .route(web::method(actix_web::http::Method::OPTIONS).to(preflight_ok)),
        )
        .service(
            web::resource("/verify-sms-code")
                .app_data(
                    web::JsonConfig::default()
                        .limit(max_payload_size)
                        .error_handler(json_error_handler(Endpoint::Verify)),
                )
                .route(web::post().to(verify_sms_code))
                .route(web::method(actix_web::http::Method::OPTIONS).to(preflight_ok)),
        )
        // Default 404 handler
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": "not_found",
                "message": "The requested resource was not found"
            }))
        }))
}
