//! Request CRUD and status update operations.
//!
//! | Method | Path (relative to base)                  | Operation        |
//! |--------|------------------------------------------|------------------|
//! | GET    | `/api/v1/tutoring-requests`              | List requests    |
//! | POST   | `/api/v1/tutoring-requests`              | Create request   |
//! | GET    | `/api/v1/tutoring-requests/{id}`         | Get by ID        |
//! | PATCH  | `/api/v1/tutoring-requests/{id}/status`  | Update status    |

use mentora_core::RequestId;
use mentora_state::MentorshipStatus;

use crate::error::TutoringApiError;
use crate::types::{
    CreateRequestBody, RequestFilter, StatusUpdateData, StatusUpdateEnvelope, TutoringRequest,
    UpdateStatusBody,
};
use crate::{TutoringClient, API_PREFIX};

impl TutoringClient {
    /// List mentorship requests, optionally filtered server-side.
    ///
    /// Calls `GET {base_url}/api/v1/tutoring-requests`.
    pub async fn list_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Vec<TutoringRequest>, TutoringApiError> {
        let endpoint = "GET /tutoring-requests";
        let mut url = format!("{}{}/tutoring-requests", self.base_url, API_PREFIX);

        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            let query: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TutoringApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TutoringApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| TutoringApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })
    }

    /// Get a mentorship request by ID. Returns `None` on 404.
    ///
    /// Calls `GET {base_url}/api/v1/tutoring-requests/{id}`.
    pub async fn get_request(
        &self,
        id: RequestId,
    ) -> Result<Option<TutoringRequest>, TutoringApiError> {
        let endpoint = format!("GET /tutoring-requests/{}", id.as_uuid());
        let url = format!(
            "{}{}/tutoring-requests/{}",
            self.base_url,
            API_PREFIX,
            id.as_uuid()
        );

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TutoringApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TutoringApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| TutoringApiError::Deserialization {
                endpoint,
                source: e,
            })
    }

    /// Submit a new mentorship request on behalf of a tutee.
    ///
    /// Calls `POST {base_url}/api/v1/tutoring-requests`.
    pub async fn create_request(
        &self,
        req: &CreateRequestBody,
    ) -> Result<TutoringRequest, TutoringApiError> {
        let endpoint = "POST /tutoring-requests";
        let url = format!("{}{}/tutoring-requests", self.base_url, API_PREFIX);

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| TutoringApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TutoringApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| TutoringApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })
    }

    /// Persist a status transition for a request.
    ///
    /// Calls `PATCH {base_url}/api/v1/tutoring-requests/{id}/status` and
    /// unwraps the `data` envelope. The echoed `request_status` and the
    /// embedded tutee are what the orchestrator keys its notification
    /// side effect on.
    pub async fn update_request_status(
        &self,
        id: RequestId,
        status: MentorshipStatus,
    ) -> Result<StatusUpdateData, TutoringApiError> {
        let endpoint = format!("PATCH /tutoring-requests/{}/status", id.as_uuid());
        let url = format!(
            "{}{}/tutoring-requests/{}/status",
            self.base_url,
            API_PREFIX,
            id.as_uuid()
        );

        let resp = self
            .http
            .patch(&url)
            .json(&UpdateStatusBody { status })
            .send()
            .await
            .map_err(|e| TutoringApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TutoringApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json::<StatusUpdateEnvelope>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| TutoringApiError::Deserialization {
                endpoint,
                source: e,
            })
    }
}
