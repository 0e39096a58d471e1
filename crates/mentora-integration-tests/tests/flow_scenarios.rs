//! # Orchestration Scenarios
//!
//! End-to-end flow scenarios against a programmable fake backend:
//! the forward path with its assignment special case, the cancellation
//! branch, the double-submission guard, swallowed failures, and the
//! chat notification side effect.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use mentora_client::types::{CreateTutoringRequest, StatusUpdateData, Tutoring, TuteeRef};
use mentora_client::TutoringApiError;
use mentora_core::{RequestId, SlackUserId, TutorId, TutoringId};
use mentora_flow::{FlowConfig, MentorshipFlow, RecordingNavigator, TutoringService};
use mentora_state::{MentorshipStatus, TransitionTable};
use MentorshipStatus::*;

/// Programmable fake backend.
#[derive(Default)]
struct FakeBackend {
    update_calls: AtomicUsize,
    create_calls: AtomicUsize,
    fail_update: bool,
    /// Echo this status instead of the requested one.
    echo_status: Option<MentorshipStatus>,
    slack_id: Option<String>,
    /// When set, `update_request_status` parks until notified.
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl TutoringService for FakeBackend {
    async fn create_tutoring(
        &self,
        _req: &CreateTutoringRequest,
    ) -> Result<Tutoring, TutoringApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Tutoring {
            id: TutoringId::new(),
            tutoring_request_id: None,
            tutor_id: None,
            created_at: None,
        })
    }

    async fn update_request_status(
        &self,
        _id: RequestId,
        status: MentorshipStatus,
    ) -> Result<StatusUpdateData, TutoringApiError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_update {
            return Err(TutoringApiError::ApiError {
                endpoint: "PATCH /tutoring-requests/{id}/status".into(),
                status: 500,
                body: "backend unavailable".into(),
            });
        }
        Ok(StatusUpdateData {
            request_status: self.echo_status.unwrap_or(status),
            tutee: self.slack_id.clone().map(|id| TuteeRef {
                slack_id: SlackUserId(id),
                name: None,
            }),
            tutor_id: None,
        })
    }
}

fn flow_with(
    status: MentorshipStatus,
    backend: Arc<FakeBackend>,
    navigator: RecordingNavigator,
) -> MentorshipFlow<Arc<FakeBackend>, RecordingNavigator> {
    let mut config = FlowConfig::new(RequestId::new(), status);
    config.tutor_id = Some(TutorId::new());
    config.objectives = "pair weekly".to_string();
    MentorshipFlow::new(config, TransitionTable::mentorship(), backend, navigator)
}

// ── Forward path ─────────────────────────────────────────────────────

#[tokio::test]
async fn forward_path_reaches_completed_via_assignment_special_case() {
    let backend = Arc::new(FakeBackend::default());
    let navigator = RecordingNavigator::new();
    let flow = flow_with(Pending, backend.clone(), navigator.clone());

    flow.next().await;
    assert_eq!(flow.state(), Available);
    flow.next().await;
    assert_eq!(flow.state(), Conversing);

    // CONVERSING -> ASSIGNED must route through tutoring creation.
    let updates_before_assignment = backend.update_calls.load(Ordering::SeqCst);
    flow.next().await;
    assert_eq!(flow.state(), Assigned);
    assert_eq!(backend.create_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        backend.update_calls.load(Ordering::SeqCst),
        updates_before_assignment,
        "the assignment hop must not use the generic status update"
    );

    flow.next().await;
    assert_eq!(flow.state(), Completed);

    // Three generic hops total, one tutoring creation.
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 3);
    assert_eq!(backend.create_calls.load(Ordering::SeqCst), 1);

    // Terminal: further actions touch nothing.
    flow.next().await;
    flow.cancel().await;
    assert_eq!(flow.state(), Completed);
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 3);
}

// ── Cancellation branch ──────────────────────────────────────────────

#[tokio::test]
async fn cancellation_branch_from_available() {
    let backend = Arc::new(FakeBackend::default());
    let flow = flow_with(Available, backend.clone(), RecordingNavigator::new());

    flow.cancel().await;
    assert_eq!(flow.state(), Cancelling);

    // CANCELLING only answers to NEXT.
    flow.cancel().await;
    assert_eq!(flow.state(), Cancelling);

    flow.next().await;
    assert_eq!(flow.state(), Cancelled);

    // Terminal: no-ops from here on.
    let calls = backend.update_calls.load(Ordering::SeqCst);
    flow.next().await;
    flow.cancel().await;
    assert_eq!(flow.state(), Cancelled);
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), calls);
}

// ── Busy guard ───────────────────────────────────────────────────────

#[tokio::test]
async fn second_call_during_flight_is_a_silent_no_op() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(FakeBackend {
        gate: Some(gate.clone()),
        ..Default::default()
    });
    let flow = Arc::new(flow_with(Pending, backend.clone(), RecordingNavigator::new()));

    let in_flight = flow.clone();
    let task = tokio::spawn(async move { in_flight.next().await });

    // Wait until the first attempt has reached the backend and parked.
    while backend.update_calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }
    assert!(flow.is_loading());

    // Double-click: dropped without a second backend call.
    flow.next().await;
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 1);

    gate.notify_one();
    task.await.unwrap();

    assert!(!flow.is_loading());
    assert_eq!(flow.state(), Available);
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 1);
}

// ── Failure handling ─────────────────────────────────────────────────

#[tokio::test]
async fn failure_leaves_status_unchanged_and_still_settles() {
    let backend = Arc::new(FakeBackend {
        fail_update: true,
        ..Default::default()
    });
    let settled = Arc::new(AtomicUsize::new(0));
    let counter = settled.clone();

    let mut config = FlowConfig::new(RequestId::new(), Pending);
    config.tutor_id = Some(TutorId::new());
    let flow = MentorshipFlow::new(
        config,
        TransitionTable::mentorship(),
        backend.clone(),
        RecordingNavigator::new(),
    )
    .with_on_settled(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let before = flow.state();
    flow.next().await;

    assert_eq!(flow.state(), before);
    assert!(!flow.is_loading());
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 1);
    // The settled callback fires on failure too: the caller refetches
    // and re-renders whatever the backend now says.
    assert_eq!(settled.load(Ordering::SeqCst), 1);

    // The transition can simply be retried by the user.
    flow.next().await;
    assert_eq!(flow.state(), before);
    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 2);
}

// ── Notification side effect ─────────────────────────────────────────

#[tokio::test]
async fn conversing_echo_opens_slack_deep_link() {
    let backend = Arc::new(FakeBackend {
        echo_status: Some(Conversing),
        slack_id: Some("U999".into()),
        ..Default::default()
    });
    let navigator = RecordingNavigator::new();
    let flow = flow_with(Available, backend, navigator.clone());

    flow.next().await;

    let opened = navigator.opened();
    assert_eq!(opened.len(), 1);
    assert!(
        opened[0].ends_with("/team/U999"),
        "expected deep link ending in /team/U999, got {}",
        opened[0]
    );
}

#[tokio::test]
async fn missing_slack_id_still_opens_a_broken_link() {
    // The deep link is fired unvalidated; a missing member id produces
    // a link ending in /team/ and that is accepted behavior.
    let backend = Arc::new(FakeBackend {
        echo_status: Some(Conversing),
        slack_id: None,
        ..Default::default()
    });
    let navigator = RecordingNavigator::new();
    let flow = flow_with(Available, backend, navigator.clone());

    flow.next().await;

    let opened = navigator.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].ends_with("/team/"), "got {}", opened[0]);
}

#[tokio::test]
async fn non_conversing_echo_fires_no_notification() {
    let backend = Arc::new(FakeBackend {
        slack_id: Some("U999".into()),
        ..Default::default()
    });
    let navigator = RecordingNavigator::new();
    let flow = flow_with(Pending, backend, navigator.clone());

    flow.next().await;
    assert_eq!(flow.state(), Available);
    assert!(navigator.opened().is_empty());
}
