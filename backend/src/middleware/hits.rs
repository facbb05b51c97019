//! Hit-counting middleware for the static asset route.
//!
//! Every request entering the wrapped scope is counted before it is
//! delegated, so the count includes responses of any status; a miss that
//! ends in a 404 from the file service still counts as a hit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::web;
use futures_util::future::{Ready, ready};

/// Process-lifetime counter of requests served by the static asset route.
///
/// The counter is an explicitly owned shared cell, handed to the router at
/// construction time via `web::Data` rather than hidden in a global. It is
/// initialised to zero, never persisted, and only touched through atomic
/// operations so concurrent requests cannot lose updates.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit.
    pub fn increment(&self) {
        // A plain event count; atomicity is the only requirement.
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current hit count.
    pub fn value(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Set the count back to zero, whatever its previous value.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Middleware recording a hit on the shared [`HitCounter`] for every
/// request it wraps, then delegating unchanged.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use backend::middleware::hits::{HitCounter, RecordHit};
///
/// let counter = web::Data::new(HitCounter::new());
/// let scope = web::scope("/app").wrap(RecordHit::new(counter));
/// ```
#[derive(Clone)]
pub struct RecordHit {
    counter: web::Data<HitCounter>,
}

impl RecordHit {
    /// Create the middleware over the shared counter cell.
    pub fn new(counter: web::Data<HitCounter>) -> Self {
        Self { counter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RecordHit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RecordHitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RecordHitMiddleware {
            service,
            counter: self.counter.clone(),
        }))
    }
}

/// Service wrapper produced by [`RecordHit`].
pub struct RecordHitMiddleware<S> {
    service: S,
    counter: web::Data<HitCounter>,
}

impl<S, B> Service<ServiceRequest> for RecordHitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Count before delegating: the eventual status does not matter.
        self.counter.increment();
        self.service.call(req)
    }
}
