//! Tutoring session creation.
//!
//! Assigning a request to a tutor does not merely flip a status field —
//! a "request" becomes a "tutoring", a distinct backend entity. That is
//! why the CONVERSING → ASSIGNED hop routes here instead of through the
//! generic status update.
//!
//! | Method | Path (relative to base) | Operation        |
//! |--------|-------------------------|------------------|
//! | POST   | `/api/v1/tutorings`     | Create tutoring  |

use crate::error::TutoringApiError;
use crate::types::{CreateTutoringRequest, Tutoring};
use crate::{TutoringClient, API_PREFIX};

impl TutoringClient {
    /// Materialize a tutoring session record from a conversing request.
    ///
    /// Calls `POST {base_url}/api/v1/tutorings`.
    pub async fn create_tutoring(
        &self,
        req: &CreateTutoringRequest,
    ) -> Result<Tutoring, TutoringApiError> {
        let endpoint = "POST /tutorings";
        let url = format!("{}{}/tutorings", self.base_url, API_PREFIX);

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
}
