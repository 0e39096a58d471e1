//! # History Routes
//!
//! Closed requests for the history tables. The backend has no dedicated
//! history endpoint, so this lists and keeps only the terminal statuses.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use mentora_client::types::RequestFilter;

use crate::error::AppError;
use crate::routes::requests::{require_client, RequestView};
use crate::state::AppState;

/// Build the history router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/history", get(list_history))
}

/// GET /v1/history — Completed and cancelled requests.
#[utoipa::path(
    get,
    path = "/v1/history",
    responses(
        (status = 200, description = "Closed requests", body = Vec<RequestView>),
        (status = 503, description = "Backend not configured", body = crate::error::ErrorBody),
    ),
    tag = "history"
)]
pub(crate) async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequestView>>, AppError> {
    let client = require_client(&state)?;
    let records = client.list_requests(&RequestFilter::default()).await?;
    let closed = records
        .into_iter()
        .filter(|r| r.request_status.is_terminal())
        .map(RequestView::from)
        .collect();
    Ok(Json(closed))
}
