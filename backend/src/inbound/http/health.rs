//! Health endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Readiness check. Always plain-text `OK`, independent of store state.
#[utoipa::path(
    get,
    path = "/api/healthz",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is reachable", body = String, content_type = "text/plain")
    )
)]
#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
