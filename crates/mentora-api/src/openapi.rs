//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mentora API",
        version = "0.2.7",
        description = "Service API for the Mentora mentorship program: request lifecycle, history, and feedback.",
        license(name = "MIT")
    ),
    paths(
        // Requests
        crate::routes::requests::list_requests,
        crate::routes::requests::get_request,
        crate::routes::requests::create_request,
        crate::routes::requests::transition_request,
        // History
        crate::routes::history::list_history,
        // Feedback
        crate::routes::feedback::submit_feedback,
        crate::routes::feedback::list_feedback,
    ),
    components(schemas(
        crate::routes::requests::RequestView,
        crate::routes::requests::SubmitRequestBody,
        crate::routes::requests::TransitionBody,
        crate::routes::requests::TransitionResponse,
        crate::routes::feedback::SubmitFeedbackBody,
        crate::state::FeedbackRecord,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "requests", description = "Mentorship request lifecycle"),
        (name = "history", description = "Closed requests"),
        (name = "feedback", description = "Feedback collection"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
