use actix_web::{web, HttpRequest, HttpResponse};
use pl_core::errors::{ValidationError, VerificationError};
use validator::Validate;

use crate::dto::{VerifySmsCodeRequest, VerifySmsCodeResponse};
use crate::handlers::error::{error_response, request_language, Endpoint};

use super::{request_id, AppState};

/// Handler for POST /verify-sms-code
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "(11) 99999-9999", "code": "123456" }
/// ```
///
/// ## Success (200 OK)
/// `{ "success": true, "verified": true, "method": "...", "phone": "+55..." }`
///
/// ## Errors (400 Bad Request)
/// `{ "success": false, "verified": false, "error": "...", "timestamp": "..." }`
pub async fn verify_sms_code(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<VerifySmsCodeRequest>,
) -> HttpResponse {
    let request_id = request_id(&req);
    let lang = request_language(&req);

    log::info!("[{}] Processing verify-sms-code request", request_id);

    if request.validate().is_err() {
        log::warn!("[{}] Phone number or code missing from request", request_id);
        let error = VerificationError::from(ValidationError::MissingFields);
        return error_response(Endpoint::Verify, &error, lang);
    }

    match state
        .verification_service
        .verify_code(
            &request_id,
            request.phone_number.as_deref(),
            request.code.as_deref(),
        )
        .await
    {
        Ok(result) => {
            let message = result.method.is_development().then(|| {
                lang.pick(
                    "Código aceito em modo desenvolvimento",
                    "Code accepted in development mode",
                )
                .to_string()
            });
            log::info!("[{}] Phone {} verified", request_id, result.phone.masked());
            HttpResponse::Ok().json(VerifySmsCodeResponse::new(result, message))
        }
        Err(error) => {
            log::warn!("[{}] Verification failed ({}): {}", request_id, error.kind(), error);
            error_response(Endpoint::Verify, &error, lang)
        }
    }
}
