//! # Feedback Routes
//!
//! Feedback is the one record this service owns. It is collected only
//! once a request has closed — the handler checks the backend's current
//! status before accepting, so feedback on a live request is a 409.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use mentora_core::{RequestId, Role};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::routes::requests::require_client;
use crate::state::{AppState, FeedbackRecord};

/// Build the feedback router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/feedback", post(submit_feedback))
        .route("/v1/feedback/:request_id", get(list_feedback))
}

/// Request to leave feedback on a closed request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitFeedbackBody {
    pub request_id: Uuid,
    /// `ADMINISTRATOR`, `TUTOR`, or `TUTEE`.
    #[schema(value_type = String)]
    pub author_role: Role,
    /// 1 (poor) to 5 (excellent).
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl Validate for SubmitFeedbackBody {
    fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err("rating must be between 1 and 5".to_string());
        }
        if self.comment.len() > 2000 {
            return Err("comment must not exceed 2000 characters".to_string());
        }
        Ok(())
    }
}

/// POST /v1/feedback — Leave feedback on a closed request.
#[utoipa::path(
    post,
    path = "/v1/feedback",
    request_body = SubmitFeedbackBody,
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackRecord),
        (status = 404, description = "Request not found", body = crate::error::ErrorBody),
        (status = 409, description = "Request not closed yet", body = crate::error::ErrorBody),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "feedback"
)]
pub(crate) async fn submit_feedback(
    State(state): State<AppState>,
    body: Result<Json<SubmitFeedbackBody>, JsonRejection>,
) -> Result<(axum::http::StatusCode, Json<FeedbackRecord>), AppError> {
    let req = extract_validated_json(body)?;
    let client = require_client(&state)?;

    let record = client
        .get_request(RequestId(req.request_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("request {} not found", req.request_id)))?;

    if !record.request_status.is_terminal() {
        return Err(AppError::Conflict(format!(
            "feedback is collected after a request closes; request is {}",
            record.request_status
        )));
    }

    let feedback = FeedbackRecord {
        id: Uuid::new_v4(),
        request_id: req.request_id,
        author_role: req.author_role,
        rating: req.rating,
        comment: req.comment,
        created_at: Utc::now(),
    };
    state.feedback.insert(feedback.id, feedback.clone());
    Ok((axum::http::StatusCode::CREATED, Json(feedback)))
}

/// GET /v1/feedback/:request_id — Feedback left on a request.
#[utoipa::path(
    get,
    path = "/v1/feedback/{request_id}",
    params(("request_id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Feedback for the request", body = Vec<FeedbackRecord>),
    ),
    tag = "feedback"
)]
pub(crate) async fn list_feedback(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Json<Vec<FeedbackRecord>> {
    let mut records: Vec<FeedbackRecord> = state
        .feedback
        .list()
        .into_iter()
        .filter(|f| f.request_id == request_id)
        .collect();
    records.sort_by_key(|f| f.created_at);
    Json(records)
}
