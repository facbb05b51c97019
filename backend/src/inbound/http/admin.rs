//! Operator endpoints.
//!
//! ```text
//! GET /admin/metrics
//! POST /admin/reset
//! ```
//!
//! The metrics page is read-only; viewing it does not change the count.
//! Reset is destructive (counter zeroed, all users purged) and therefore
//! only permitted in development mode.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::middleware::hits::HitCounter;

/// Plain-text body returned when reset is attempted outside dev mode.
const RESET_FORBIDDEN: &str = "Reset is only allowed in dev environment.";

/// Plain-text body returned after a successful reset.
const RESET_DONE: &str = "Hits reset to 0 and database reset to initial state.";

/// Operator metrics page embedding the current hit count.
#[utoipa::path(
    get,
    path = "/admin/metrics",
    tags = ["admin"],
    responses(
        (status = 200, description = "HTML page with the hit count", body = String, content_type = "text/html")
    )
)]
#[get("/metrics")]
pub async fn metrics(counter: web::Data<HitCounter>) -> HttpResponse {
    let hits = counter.value();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            "<html>\n  <body>\n    <h1>Welcome, Chirper Admin</h1>\n    \
             <p>Chirper has been visited {hits} times!</p>\n  </body>\n</html>\n"
        ))
}

/// Reset operator state: zero the hit counter and purge all users.
///
/// Outside development mode this responds 403 and mutates nothing: the
/// counter keeps its value and no rows are deleted.
#[utoipa::path(
    post,
    path = "/admin/reset",
    tags = ["admin"],
    responses(
        (status = 200, description = "Counter reset and users purged", body = String, content_type = "text/plain"),
        (status = 403, description = "Not in development mode", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure while purging")
    )
)]
#[post("/reset")]
pub async fn reset(
    state: web::Data<HttpState>,
    counter: web::Data<HitCounter>,
) -> ApiResult<HttpResponse> {
    if !state.platform.is_dev() {
        return Ok(HttpResponse::Forbidden()
            .content_type(ContentType::plaintext())
            .body(RESET_FORBIDDEN));
    }

    // Purge first: a store failure leaves the counter untouched.
    state.users.delete_all().await?;
    counter.reset();

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(RESET_DONE))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;

    use super::*;
    use crate::domain::Platform;
    use crate::domain::ports::{InMemoryChirpRepository, InMemoryUserRepository, UserRepository};

    struct AdminFixture {
        users: Arc<InMemoryUserRepository>,
        counter: web::Data<HitCounter>,
        state: HttpState,
    }

    fn fixture(platform: Platform) -> AdminFixture {
        let users = Arc::new(InMemoryUserRepository::new());
        AdminFixture {
            users: users.clone(),
            counter: web::Data::new(HitCounter::new()),
            state: HttpState::new(users, Arc::new(InMemoryChirpRepository::new()), platform),
        }
    }

    async fn call(
        fixture: &AdminFixture,
        request: actix_web::test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(fixture.state.clone()))
                .app_data(fixture.counter.clone())
                .service(web::scope("/admin").service(metrics).service(reset)),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[rstest]
    #[actix_web::test]
    async fn metrics_page_embeds_the_hit_count_without_changing_it() {
        let fixture = fixture(Platform::Prod);
        fixture.counter.increment();
        fixture.counter.increment();

        let response = call(&fixture, actix_test::TestRequest::get().uri("/admin/metrics")).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let body = actix_test::read_body(response).await;
        let page = std::str::from_utf8(&body).expect("utf8 page");
        assert!(page.contains("visited 2 times"));
        assert_eq!(fixture.counter.value(), 2);
    }

    #[rstest]
    #[actix_web::test]
    async fn reset_outside_dev_mode_is_forbidden_and_mutates_nothing() {
        let fixture = fixture(Platform::Prod);
        fixture.counter.increment();
        fixture
            .users
            .create("ada@example.com")
            .await
            .expect("create succeeds");

        let response = call(&fixture, actix_test::TestRequest::post().uri("/admin/reset")).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
        assert_eq!(fixture.counter.value(), 1);
        assert_eq!(fixture.users.all().len(), 1);
    }

    #[rstest]
    #[actix_web::test]
    async fn reset_in_dev_mode_zeroes_the_counter_and_purges_users() {
        let fixture = fixture(Platform::Dev);
        fixture.counter.increment();
        fixture
            .users
            .create("ada@example.com")
            .await
            .expect("create succeeds");

        let response = call(&fixture, actix_test::TestRequest::post().uri("/admin/reset")).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(fixture.counter.value(), 0);
        assert!(fixture.users.all().is_empty());
    }
}
