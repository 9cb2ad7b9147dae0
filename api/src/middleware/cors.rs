//! CORS configuration for the browser lead form.
//!
//! The landing page is served from a different origin than this API, so
//! every origin is allowed. actix-cors decorates actual responses; every
//! `OPTIONS` request, preflight or not, is answered by `preflight_ok`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::HttpResponse;

/// Methods advertised to browsers
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Request headers the lead form may send
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Creates the CORS middleware for actual (non-OPTIONS) requests.
pub fn create_cors() -> Cors {
    Cors::default()
        .disable_preflight()
        // Answer with `*` rather than echoing the origin
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-client-info"),
            header::HeaderName::from_static("apikey"),
        ])
}

/// Plain `OPTIONS` answer: 200 "ok" with permissive CORS headers
pub async fn preflight_ok() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .body("ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_preflight_ok_headers() {
        let resp = preflight_ok().await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let headers = resp.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            ALLOWED_METHODS
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            ALLOWED_HEADERS
        );

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), b"ok");
    }

    #[actix_web::test]
    async fn test_cors_wildcard_on_post_response() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors())
                .route("/echo", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header((header::ORIGIN, "https://pharmalead.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
