//! # Mentorship Request Routes
//!
//! Listing and creation are passthrough proxies to the tutoring backend
//! — request records live there, and this service adds nothing to a
//! read. The transition endpoint is the interesting one: it runs the
//! same orchestration the dashboards used to run in the browser, with a
//! recording navigator standing in for `window.open`, and hands any
//! produced notification link back to the caller to open.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use mentora_client::types::{CreateRequestBody, RequestFilter, TutoringRequest};
use mentora_client::TutoringClient;
use mentora_core::{RequestId, TuteeId, TutorId};
use mentora_state::{MentorshipStatus, TransitionAction, TransitionTable};
use mentora_flow::{FlowConfig, MentorshipFlow, RecordingNavigator};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Build the requests router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/requests", get(list_requests).post(create_request))
        .route("/v1/requests/:id", get(get_request))
        .route("/v1/requests/:id/transition", post(transition_request))
}

/// Helper: extract the tutoring client from AppState or return 503.
pub(crate) fn require_client(state: &AppState) -> Result<&TutoringClient, AppError> {
    state.client.as_ref().ok_or_else(|| {
        AppError::service_unavailable(
            "tutoring backend not configured. Set TUTORING_API_URL and TUTORING_API_TOKEN.",
        )
    })
}

// -- DTOs ---------------------------------------------------------------------

/// Query filters for request listing.
#[derive(Debug, Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Filter by lifecycle status (wire name, e.g. `AVAILABLE`).
    #[param(value_type = Option<String>)]
    pub status: Option<MentorshipStatus>,
    /// Filter by assigned tutor.
    pub tutor_id: Option<Uuid>,
    /// Filter by submitting tutee.
    pub tutee_id: Option<Uuid>,
}

/// A mentorship request as the dashboards consume it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestView {
    pub id: Uuid,
    /// Wire status name (e.g. `CONVERSING`).
    #[schema(value_type = String)]
    pub status: MentorshipStatus,
    /// Spanish display label for the status.
    pub status_label: String,
    pub tutee_slack_id: Option<String>,
    pub tutor_id: Option<Uuid>,
    pub topic: Option<String>,
    pub objectives: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<TutoringRequest> for RequestView {
    fn from(record: TutoringRequest) -> Self {
        Self {
            id: *record.id.as_uuid(),
            status: record.request_status,
            status_label: record.request_status.label().to_string(),
            tutee_slack_id: record.tutee.map(|t| t.slack_id.as_str().to_string()),
            tutor_id: record.tutor_id.map(|t| *t.as_uuid()),
            topic: record.topic,
            objectives: record.objectives,
            created_at: record.created_at,
        }
    }
}

/// Request to submit a new mentorship request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequestBody {
    pub tutee_id: Uuid,
    pub topic: String,
    #[serde(default)]
    pub objectives: String,
}

impl Validate for SubmitRequestBody {
    fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("topic must be non-empty".to_string());
        }
        if self.topic.len() > 255 {
            return Err("topic must not exceed 255 characters".to_string());
        }
        if self.objectives.len() > 4000 {
            return Err("objectives must not exceed 4000 characters".to_string());
        }
        Ok(())
    }
}

/// Request to run a lifecycle action against a request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionBody {
    /// `NEXT`, `PREVIOUS`, or `CANCEL`.
    #[schema(value_type = String)]
    pub action: TransitionAction,
}

impl Validate for TransitionBody {
    fn validate(&self) -> Result<(), String> {
        // The action enum is closed; deserialization already rejects
        // anything outside NEXT/PREVIOUS/CANCEL.
        Ok(())
    }
}

/// Outcome of a transition attempt.
///
/// `applied == false` covers both an action the table does not permit
/// and a backend failure the orchestrator swallowed — callers get the
/// same signal the dashboards always had: compare status before/after.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransitionResponse {
    pub request_id: Uuid,
    pub applied: bool,
    /// Status before the attempt.
    #[schema(value_type = String)]
    pub from_status: MentorshipStatus,
    /// Status after the attempt.
    #[schema(value_type = String)]
    pub status: MentorshipStatus,
    /// Spanish display label for the resulting status.
    pub status_label: String,
    /// Chat deep link to open in a new browser context, when the
    /// transition produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
}

// -- Handlers -----------------------------------------------------------------

/// GET /v1/requests — List requests, optionally filtered.
#[utoipa::path(
    get,
    path = "/v1/requests",
    params(ListParams),
    responses(
        (status = 200, description = "List of requests", body = Vec<RequestView>),
        (status = 503, description = "Backend not configured", body = crate::error::ErrorBody),
    ),
    tag = "requests"
)]
pub(crate) async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<RequestView>>, AppError> {
    let client = require_client(&state)?;
    let filter = RequestFilter {
        status: params.status,
        tutor_id: params.tutor_id.map(TutorId),
        tutee_id: params.tutee_id.map(TuteeId),
    };
    let records = client.list_requests(&filter).await?;
    Ok(Json(records.into_iter().map(RequestView::from).collect()))
}

/// GET /v1/requests/:id — Get a single request.
#[utoipa::path(
    get,
    path = "/v1/requests/{id}",
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request found", body = RequestView),
        (status = 404, description = "Request not found", body = crate::error::ErrorBody),
    ),
    tag = "requests"
)]
pub(crate) async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequestView>, AppError> {
    let client = require_client(&state)?;
    client
        .get_request(RequestId(id))
        .await?
        .map(RequestView::from)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("request {id} not found")))
}

/// POST /v1/requests — Submit a new request on behalf of a tutee.
#[utoipa::path(
    post,
    path = "/v1/requests",
    request_body = SubmitRequestBody,
    responses(
        (status = 201, description = "Request created", body = RequestView),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "requests"
)]
pub(crate) async fn create_request(
    State(state): State<AppState>,
    body: Result<Json<SubmitRequestBody>, JsonRejection>,
) -> Result<(axum::http::StatusCode, Json<RequestView>), AppError> {
    let req = extract_validated_json(body)?;
    let client = require_client(&state)?;
    let created = client
        .create_request(&CreateRequestBody {
            tutee_id: TuteeId(req.tutee_id),
            topic: req.topic,
            objectives: req.objectives,
        })
        .await?;
    Ok((axum::http::StatusCode::CREATED, Json(created.into())))
}

/// POST /v1/requests/:id/transition — Run a lifecycle action.
#[utoipa::path(
    post,
    path = "/v1/requests/{id}/transition",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = TransitionBody,
    responses(
        (status = 200, description = "Transition attempted", body = TransitionResponse),
        (status = 404, description = "Request not found", body = crate::error::ErrorBody),
        (status = 503, description = "Backend not configured", body = crate::error::ErrorBody),
    ),
    tag = "requests"
)]
pub(crate) async fn transition_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> Result<Json<TransitionResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let client = require_client(&state)?;

    let record = client
        .get_request(RequestId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("request {id} not found")))?;
    let from = record.request_status;

    let table = TransitionTable::mentorship();
    if table.lookup(from, req.action).is_none() {
        // Not permitted from this status: a no-op by contract, reported
        // as unapplied rather than erred.
        return Ok(Json(TransitionResponse {
            request_id: id,
            applied: false,
            from_status: from,
            status: from,
            status_label: from.label().to_string(),
            notification_url: None,
        }));
    }

    let mut config = FlowConfig::new(RequestId(id), from);
    config.tutor_id = record.tutor_id;
    config.objectives = record.objectives.clone().unwrap_or_default();
    config.slack_workspace = state.config.slack_workspace.clone();
    config.history_path = state.config.history_path.clone();

    let navigator = RecordingNavigator::new();
    let flow = MentorshipFlow::new(config, table, client.clone(), navigator.clone());
    flow.dispatch(req.action).await;

    let status = flow.state();
    Ok(Json(TransitionResponse {
        request_id: id,
        applied: status != from,
        from_status: from,
        status,
        status_label: status.label().to_string(),
        notification_url: navigator.last_opened(),
    }))
}
