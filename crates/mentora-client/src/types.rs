//! Wire types matching the tutoring backend schemas.
//!
//! Response fields use `#[serde(default)]` for resilience against schema
//! evolution in the live backend — it may return fields not modeled here,
//! so `serde(deny_unknown_fields)` is intentionally NOT used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mentora_core::{RequestId, SlackUserId, TuteeId, TutorId, TutoringId};
use mentora_state::MentorshipStatus;

// -- Response types ----------------------------------------------------------

/// Tutee data embedded in backend responses.
///
/// `slack_id` is whatever the backend stored — it is forwarded into the
/// notification deep link without validation or escaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuteeRef {
    pub slack_id: SlackUserId,
    #[serde(default)]
    pub name: Option<String>,
}

/// A mentorship request as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutoringRequest {
    pub id: RequestId,
    /// Current lifecycle status (field name `requestStatus` on the wire;
    /// `status` accepted as an alias for older backend versions).
    #[serde(rename = "requestStatus", alias = "status")]
    pub request_status: MentorshipStatus,
    #[serde(default)]
    pub tutee: Option<TuteeRef>,
    #[serde(default)]
    pub tutee_id: Option<TuteeId>,
    #[serde(default)]
    pub tutor_id: Option<TutorId>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub objectives: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload of a successful status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateData {
    /// The status the backend settled on — this echo, not the requested
    /// value, decides whether the chat notification fires.
    pub request_status: MentorshipStatus,
    #[serde(default)]
    pub tutee: Option<TuteeRef>,
    #[serde(default)]
    pub tutor_id: Option<TutorId>,
}

/// Envelope the backend wraps status update responses in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateEnvelope {
    pub data: StatusUpdateData,
}

/// A tutoring session record, materialized when a request is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutoring {
    pub id: TutoringId,
    #[serde(default)]
    pub tutoring_request_id: Option<RequestId>,
    #[serde(default)]
    pub tutor_id: Option<TutorId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// -- Request types -----------------------------------------------------------

/// Request to create a tutoring session from a conversing request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutoringRequest {
    pub tutoring_request_id: RequestId,
    pub tutor_id: TutorId,
    pub objectives: String,
}

/// Request to submit a new mentorship request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub tutee_id: TuteeId,
    pub topic: String,
    pub objectives: String,
}

/// Body of a status update call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusBody {
    pub status: MentorshipStatus,
}

/// Server-side filters for request listing.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub status: Option<MentorshipStatus>,
    pub tutor_id: Option<TutorId>,
    pub tutee_id: Option<TuteeId>,
}

impl RequestFilter {
    /// Render as query pairs, omitting unset filters.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.name().to_string()));
        }
        if let Some(tutor_id) = &self.tutor_id {
            pairs.push(("tutorId", tutor_id.as_uuid().to_string()));
        }
        if let Some(tutee_id) = &self.tutee_id {
            pairs.push(("tuteeId", tutee_id.as_uuid().to_string()));
        }
        pairs
    }
}
