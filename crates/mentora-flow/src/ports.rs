//! Backend port for the orchestrator.
//!
//! The orchestrator only needs the two operations the lifecycle calls
//! for; it neither lists nor creates requests. Defining the seam as a
//! trait keeps the flow testable without any HTTP machinery — tests plug
//! in programmable fakes, production plugs in [`TutoringClient`].

use std::sync::Arc;

use async_trait::async_trait;

use mentora_client::types::{CreateTutoringRequest, StatusUpdateData, Tutoring};
use mentora_client::{TutoringApiError, TutoringClient};
use mentora_core::RequestId;
use mentora_state::MentorshipStatus;

/// The two backend operations a lifecycle transition can require.
#[async_trait]
pub trait TutoringService: Send + Sync {
    /// Materialize a tutoring session record (CONVERSING → ASSIGNED).
    async fn create_tutoring(
        &self,
        req: &CreateTutoringRequest,
    ) -> Result<Tutoring, TutoringApiError>;

    /// Persist a status transition for a request.
    async fn update_request_status(
        &self,
        id: RequestId,
        status: MentorshipStatus,
    ) -> Result<StatusUpdateData, TutoringApiError>;
}

#[async_trait]
impl<T: TutoringService + ?Sized> TutoringService for Arc<T> {
    async fn create_tutoring(
        &self,
        req: &CreateTutoringRequest,
    ) -> Result<Tutoring, TutoringApiError> {
        (**self).create_tutoring(req).await
    }

    async fn update_request_status(
        &self,
        id: RequestId,
        status: MentorshipStatus,
    ) -> Result<StatusUpdateData, TutoringApiError> {
        (**self).update_request_status(id, status).await
    }
}

#[async_trait]
impl TutoringService for TutoringClient {
    async fn create_tutoring(
        &self,
        req: &CreateTutoringRequest,
    ) -> Result<Tutoring, TutoringApiError> {
        TutoringClient::create_tutoring(self, req).await
    }

    async fn update_request_status(
        &self,
        id: RequestId,
        status: MentorshipStatus,
    ) -> Result<StatusUpdateData, TutoringApiError> {
        TutoringClient::update_request_status(self, id, status).await
    }
}
