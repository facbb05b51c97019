//! HTTP application assembly.
//!
//! Purpose: Compose handlers, middleware, shared state, and the static
//! tree into one `App`, identically for production (`main`) and tests.

pub mod config;

use std::path::Path;

use actix_files::Files;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, admin, chirps, health, users};
use crate::middleware::hits::{HitCounter, RecordHit};

/// JSON extractor configuration routing body-decode failures through the
/// shared error envelope. Decode failures surface as HTTP 500; this is
/// part of the wire contract.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Decode(err.to_string()).into())
}

/// Assemble the application: the JSON API under `/api`, operator
/// endpoints under `/admin`, and the hit-counted static tree under
/// `/app`. The counter cell is injected here, not hidden in a global, so
/// callers decide its lifetime.
pub fn build_app(
    state: HttpState,
    counter: web::Data<HitCounter>,
    assets_dir: &Path,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    let mut app = App::new()
        .app_data(web::Data::new(state))
        .app_data(counter.clone())
        .app_data(json_config())
        .service(
            web::scope("/api")
                .service(health::healthz)
                .service(users::create_user)
                .service(chirps::create_chirp)
                .service(chirps::list_chirps),
        )
        .service(
            web::scope("/admin")
                .service(admin::metrics)
                .service(admin::reset),
        )
        .service(
            web::scope("/app")
                .wrap(RecordHit::new(counter))
                .service(Files::new("/", assets_dir).index_file("index.html")),
        );

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
