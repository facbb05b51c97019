//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification for the REST
//! API: every HTTP endpoint from the inbound layer plus the wire schemas
//! (entities, request bodies, and the error envelope). The document backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Chirp, User};
use crate::inbound::http::chirps::CreateChirpRequest;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
/// Swagger UI is mounted in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chirper backend API",
        description = "JSON micro-blog interface with operator metrics endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::healthz,
        crate::inbound::http::users::create_user,
        crate::inbound::http::chirps::create_chirp,
        crate::inbound::http::chirps::list_chirps,
        crate::inbound::http::admin::metrics,
        crate::inbound::http::admin::reset,
    ),
    components(schemas(User, Chirp, CreateUserRequest, CreateChirpRequest, ErrorBody)),
    tags(
        (name = "users", description = "User registration"),
        (name = "chirps", description = "Publishing and listing chirps"),
        (name = "admin", description = "Operator metrics and reset"),
        (name = "health", description = "Service probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn document_covers_every_route() {
        let document = ApiDoc::openapi();
        let paths: Vec<_> = document.paths.paths.keys().cloned().collect();

        for expected in [
            "/api/healthz",
            "/api/users",
            "/api/chirps",
            "/admin/metrics",
            "/admin/reset",
        ] {
            assert!(
                paths.iter().any(|path| path == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
