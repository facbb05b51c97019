//! Unified API error type and the single error-envelope writer.
//!
//! Every failing JSON endpoint responds with the same envelope,
//! `{"error": "<message>"}`, produced by one writing path. Handlers return
//! [`ApiResult`] and rely on `?`; the [`actix_web::ResponseError`] impl
//! maps each variant to its status code at the handler boundary, so no
//! failure escapes as a process crash.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ChirpValidationError;
use crate::domain::ports::StoreError;

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "Chirp is too long")]
    pub error: String,
}

/// Failures surfaced by the HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// The submitted chirp body failed validation.
    #[error(transparent)]
    Validation(#[from] ChirpValidationError),

    /// The backing store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Decode failures are reported as server-side errors; this is
            // part of the wire contract, not an oversight.
            Self::Decode(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_payload(self.status_code(), self.to_string())
    }
}

/// Build the error envelope for `status` and `message`.
///
/// Should serialising the envelope itself ever fail, the response degrades
/// to a hand-built minimal JSON string; that fallback cannot fail.
pub(crate) fn error_payload(status: StatusCode, message: String) -> HttpResponse {
    let body = serde_json::to_string(&ErrorBody { error: message }).unwrap_or_else(|err| {
        error!(error = %err, "failed to serialise error envelope");
        r#"{"error":"Internal server error"}"#.to_owned()
    });
    HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body)
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::rstest;

    use super::*;

    async fn envelope_of(error: ApiError) -> (StatusCode, ErrorBody) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body())
            .await
            .expect("response body reads");
        let body = serde_json::from_slice(&bytes).expect("error envelope parses");
        (status, body)
    }

    #[rstest]
    #[tokio::test]
    async fn validation_failures_map_to_400_with_the_wire_message() {
        let (status, body) = envelope_of(ApiError::from(ChirpValidationError::TooLong)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Chirp is too long");
    }

    #[rstest]
    #[tokio::test]
    async fn decode_failures_map_to_500() {
        let (status, body) = envelope_of(ApiError::Decode("expected value".to_owned())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "expected value");
    }

    #[rstest]
    #[tokio::test]
    async fn store_failures_map_to_500_and_describe_the_operation() {
        let (status, body) =
            envelope_of(ApiError::from(StoreError::query("insert rejected"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("insert rejected"));
    }

    #[rstest]
    fn responses_are_json() {
        let response = ApiError::Decode("bad".to_owned()).error_response();
        let content_type = response
            .headers()
            .get(actix_web::http::header::CONTENT_TYPE)
            .expect("content type set")
            .to_str()
            .expect("ascii header");
        assert!(content_type.starts_with("application/json"));
    }
}
