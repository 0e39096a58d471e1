//! # mentora-api — Axum API for the Mentora Dashboards
//!
//! The service layer the role-based dashboards talk to. Request records
//! live in the remote tutoring backend; this service proxies reads,
//! runs lifecycle transitions through `mentora-flow` server-side, and
//! owns exactly one kind of record itself (feedback).
//!
//! ## API Surface
//!
//! | Prefix                          | Module               | Behavior          |
//! |---------------------------------|----------------------|-------------------|
//! | `GET/POST /v1/requests`         | [`routes::requests`] | Backend proxy     |
//! | `POST /v1/requests/{id}/transition` | [`routes::requests`] | Flow orchestration |
//! | `GET /v1/history`               | [`routes::history`]  | Backend proxy     |
//! | `POST/GET /v1/feedback`         | [`routes::feedback`] | Owned records     |
//! | `GET /health/*`                 | here                 | Probes            |
//! | `GET /openapi.json`             | [`openapi`]          | Generated spec    |
//!
//! ## Middleware
//!
//! `TraceLayer` only. Authentication and session handling belong to the
//! external identity provider in front of this service and are out of
//! scope here; health probes are mounted outside the traced router.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::requests::router())
        .merge(routes::history::router())
        .merge(routes::feedback::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Unauthenticated health probes.
    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
