//! Localized error messages and error envelopes for the verification endpoints

use actix_web::{error::InternalError, error::JsonPayloadError, http::header, HttpRequest, HttpResponse};
use pl_core::errors::{provider_codes, ProviderError, TransportError, ValidationError, VerificationError};
use pl_shared::{ErrorEnvelope, Language};

/// Which endpoint an error belongs to; the two map provider errors differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Send,
    Verify,
}

/// Detect language preference from the Accept-Language header
pub fn request_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Helper function to get localized message
fn localized(lang: Language, pt: &str, en: &str) -> String {
    lang.pick(pt, en).to_string()
}

fn validation_message(error: &ValidationError, lang: Language) -> String {
    match error {
        ValidationError::MissingPhoneNumber => {
            localized(lang, "Número de telefone é obrigatório", "Phone number is required")
        }
        ValidationError::MissingFields => localized(
            lang,
            "Número de telefone e código são obrigatórios",
            "Phone number and code are required",
        ),
        ValidationError::InvalidCodeFormat => localized(
            lang,
            "Código deve ter exatamente 6 dígitos",
            "Code must be exactly 6 digits",
        ),
    }
}

fn transport_message(error: &TransportError, lang: Language) -> String {
    match error {
        TransportError::Timeout => localized(
            lang,
            "Tempo esgotado ao contatar o serviço de SMS. Tente novamente.",
            "The SMS service took too long to answer. Try again.",
        ),
        TransportError::Connection(_) => localized(
            lang,
            "Erro de conexão com o serviço de SMS. Tente novamente.",
            "Connection issue with the SMS service. Try again.",
        ),
    }
}

/// Message for a failed send
pub fn send_error_message(error: &VerificationError, lang: Language) -> String {
    match error {
        VerificationError::Validation(e) => validation_message(e, lang),
        VerificationError::Transport(e) => transport_message(e, lang),
        VerificationError::Provider(e) => match e.provider_code() {
            Some(provider_codes::PERMISSION_DENIED) => localized(
                lang,
                "Número de telefone inválido ou não autorizado",
                "Invalid or unauthorized phone number",
            ),
            Some(provider_codes::INVALID_PHONE_NUMBER) => localized(
                lang,
                "Formato de telefone inválido. Use: (11) 99999-9999",
                "Invalid phone format. Use: (11) 99999-9999",
            ),
            Some(provider_codes::NOT_SMS_CAPABLE) => localized(
                lang,
                "Este número não pode receber SMS",
                "This number cannot receive SMS",
            ),
            _ => match e {
                ProviderError::Rejected { message, .. } => {
                    format!("{}: {}", lang.pick("Erro ao enviar SMS", "Failed to send SMS"), message)
                }
                _ => localized(lang, "Erro ao enviar SMS", "Failed to send SMS"),
            },
        },
    }
}

/// Message for a failed check
pub fn verify_error_message(error: &VerificationError, lang: Language) -> String {
    match error {
        VerificationError::Validation(e) => validation_message(e, lang),
        VerificationError::Transport(e) => transport_message(e, lang),
        VerificationError::Provider(ProviderError::VerificationNotFound) => localized(
            lang,
            "Verificação não encontrada. Solicite um novo código.",
            "Verification not found. Request a new code.",
        ),
        VerificationError::Provider(_) => {
            localized(lang, "Código inválido ou expirado", "Invalid or expired code")
        }
    }
}

/// 400 response carrying the endpoint's error envelope
pub fn error_response(endpoint: Endpoint, error: &VerificationError, lang: Language) -> HttpResponse {
    let envelope = match endpoint {
        Endpoint::Send => ErrorEnvelope::new(send_error_message(error, lang)),
        Endpoint::Verify => ErrorEnvelope::not_verified(verify_error_message(error, lang)),
    };
    HttpResponse::BadRequest().json(envelope)
}

/// Turn unreadable JSON bodies into the endpoint's error envelope
pub fn json_error_handler(endpoint: Endpoint) -> impl Fn(JsonPayloadError, &HttpRequest) -> actix_web::Error + Send + Sync + 'static {
    move |err: JsonPayloadError, req: &HttpRequest| {
        let lang = request_language(req);
        log::warn!("Rejected unreadable request body on {}: {}", req.path(), err);
        let message = localized(lang, "Corpo da requisição inválido", "Invalid request body");
        let envelope = match endpoint {
            Endpoint::Send => ErrorEnvelope::new(message),
            Endpoint::Verify => ErrorEnvelope::not_verified(message),
        };
        InternalError::from_response(err, HttpResponse::BadRequest().json(envelope)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn rejected(code: u32) -> VerificationError {
        ProviderError::Rejected {
            status: 400,
            code: Some(code),
            message: "provider says no".to_string(),
        }
        .into()
    }

    #[test]
    fn test_language_defaults_to_portuguese() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(request_language(&req), Language::Portuguese);

        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "en-US,en;q=0.9"))
            .to_http_request();
        assert_eq!(request_language(&req), Language::English);
    }

    #[test]
    fn test_send_messages_for_known_provider_codes() {
        let lang = Language::Portuguese;
        assert_eq!(
            send_error_message(&rejected(20003), lang),
            "Número de telefone inválido ou não autorizado"
        );
        assert_eq!(
            send_error_message(&rejected(21211), lang),
            "Formato de telefone inválido. Use: (11) 99999-9999"
        );
        assert_eq!(send_error_message(&rejected(21614), lang), "Este número não pode receber SMS");
        assert_eq!(
            send_error_message(&rejected(60200), lang),
            "Erro ao enviar SMS: provider says no"
        );
    }

    #[test]
    fn test_send_transport_message() {
        let error: VerificationError = TransportError::Connection("refused".into()).into();
        assert_eq!(
            send_error_message(&error, Language::English),
            "Connection issue with the SMS service. Try again."
        );
    }

    #[test]
    fn test_verify_messages() {
        let lang = Language::Portuguese;
        let not_found: VerificationError = ProviderError::VerificationNotFound.into();
        assert_eq!(
            verify_error_message(&not_found, lang),
            "Verificação não encontrada. Solicite um novo código."
        );

        let not_approved: VerificationError = ProviderError::NotApproved {
            status: "pending".into(),
        }
        .into();
        assert_eq!(verify_error_message(&not_approved, lang), "Código inválido ou expirado");

        // Provider codes that matter when sending are generic when verifying
        assert_eq!(verify_error_message(&rejected(21211), lang), "Código inválido ou expirado");

        let format: VerificationError = ValidationError::InvalidCodeFormat.into();
        assert_eq!(
            verify_error_message(&format, lang),
            "Código deve ter exatamente 6 dígitos"
        );
    }
}
