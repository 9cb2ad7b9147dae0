use actix_web::{web, HttpRequest, HttpResponse};
use pl_core::errors::{ValidationError, VerificationError};
use validator::Validate;

use crate::dto::{SendSmsVerificationRequest, SendSmsVerificationResponse};
use crate::handlers::error::{error_response, request_language, Endpoint};

use super::{request_id, AppState};

/// Handler for POST /send-sms-verification
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "(11) 99999-9999" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "sid": "VE...",
///     "method": "twilio_verify",
///     "phone": "+5511999999999"
/// }
/// ```
///
/// ## Errors (400 Bad Request)
/// ```json
/// { "success": false, "error": "...", "timestamp": "2025-01-01T00:00:00Z" }
/// ```
pub async fn send_sms_verification(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<SendSmsVerificationRequest>,
) -> HttpResponse {
    let request_id = request_id(&req);
    let lang = request_language(&req);

    log::info!("[{}] Processing send-sms-verification request", request_id);

    if request.validate().is_err() {
        log::warn!("[{}] Phone number missing from request", request_id);
        let error = VerificationError::from(ValidationError::MissingPhoneNumber);
        return error_response(Endpoint::Send, &error, lang);
    }

    match state
        .verification_service
        .send_code(&request_id, request.phone_number.as_deref())
        .await
    {
        Ok(result) => {
            let message = result.method.is_development().then(|| {
                lang.pick(
                    "SMS simulado - use código 123456 para verificar",
                    "Simulated SMS - use code 123456 to verify",
                )
                .to_string()
            });
            log::info!(
                "[{}] Verification started via {} for {}",
                request_id,
                result.method,
                result.phone.masked()
            );
            HttpResponse::Ok().json(SendSmsVerificationResponse::new(result, message))
        }
        Err(error) => {
            log::error!("[{}] Send failed ({}): {}", request_id, error.kind(), error);
            error_response(Endpoint::Send, &error, lang)
        }
    }
}
