//! The transition orchestrator.
//!
//! One `MentorshipFlow` instance owns the lifecycle of one request for
//! the duration of a user interaction. Its public surface is exactly the
//! contract the dashboards consume: `next()`, `previous()`, `cancel()`,
//! plus the readable `state` and `is_loading` fields.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use mentora_client::types::CreateTutoringRequest;
use mentora_core::{RequestId, SlackUserId, TutorId};
use mentora_state::{MentorshipStatus, TransitionAction, TransitionTable};

use crate::notify::{slack_team_link, Navigator, DEFAULT_HISTORY_PATH, DEFAULT_WORKSPACE};
use crate::ports::TutoringService;

/// Per-request configuration for a flow instance.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// The request being driven.
    pub request_id: RequestId,
    /// Status at construction time, as last known from the backend.
    pub initial_status: MentorshipStatus,
    /// Tutor to assign when the CONVERSING → ASSIGNED hop fires.
    /// Without one, that hop cannot create a tutoring and is dropped.
    pub tutor_id: Option<TutorId>,
    /// Objectives text forwarded into tutoring creation.
    pub objectives: String,
    /// Slack workspace for the notification deep link.
    pub slack_workspace: String,
    /// In-app path to show after a successful assignment.
    pub history_path: String,
}

impl FlowConfig {
    /// Configuration with program defaults for workspace and history path.
    pub fn new(request_id: RequestId, initial_status: MentorshipStatus) -> Self {
        Self {
            request_id,
            initial_status,
            tutor_id: None,
            objectives: String::new(),
            slack_workspace: DEFAULT_WORKSPACE.to_string(),
            history_path: DEFAULT_HISTORY_PATH.to_string(),
        }
    }
}

/// Orchestrates status transitions for a single mentorship request.
///
/// Holds the current status, a busy flag, and the injected transition
/// table. The three action methods resolve the move through the table,
/// persist it via the [`TutoringService`] port, and only then update the
/// local status — a failed backend call leaves the local belief exactly
/// where it was.
///
/// A call while a transition is in flight is a silent no-op, not queued:
/// the flag exists to absorb double-clicks, nothing more. No ordering is
/// guaranteed across flow instances driving the same backend record —
/// last write wins.
pub struct MentorshipFlow<S, N> {
    config: FlowConfig,
    table: TransitionTable,
    status: RwLock<MentorshipStatus>,
    busy: AtomicBool,
    service: S,
    navigator: N,
    on_settled: Option<Box<dyn Fn() + Send + Sync>>,
}

impl<S: TutoringService, N: Navigator> MentorshipFlow<S, N> {
    /// Create a flow over an injected transition table and ports.
    pub fn new(config: FlowConfig, table: TransitionTable, service: S, navigator: N) -> Self {
        let status = RwLock::new(config.initial_status);
        Self {
            config,
            table,
            status,
            busy: AtomicBool::new(false),
            service,
            navigator,
            on_settled: None,
        }
    }

    /// Register a callback invoked after every settled generic transition
    /// attempt (success or failure) — typically a table refetch in the
    /// caller. The assignment special case skips it: the navigation it
    /// performs supersedes any in-page refresh.
    pub fn with_on_settled(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_settled = Some(Box::new(callback));
        self
    }

    /// Current status as this instance believes it.
    pub fn state(&self) -> MentorshipStatus {
        *self.status.read()
    }

    /// Whether a transition attempt is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Advance to the next status on the current path.
    pub async fn next(&self) {
        self.dispatch(TransitionAction::Next).await;
    }

    /// Step back to the prior status.
    pub async fn previous(&self) {
        self.dispatch(TransitionAction::Previous).await;
    }

    /// Enter the cancellation branch.
    pub async fn cancel(&self) {
        self.dispatch(TransitionAction::Cancel).await;
    }

    /// Resolve an action and run the side-effecting update.
    ///
    /// An action with no table entry is dropped without logging: the UI
    /// treats it as an affordance gap, not a runtime error.
    pub async fn dispatch(&self, action: TransitionAction) {
        let current = self.state();
        let Some(target) = self.table.lookup(current, action) else {
            return;
        };
        self.update_state(current, target).await;
    }

    async fn update_state(&self, from: MentorshipStatus, to: MentorshipStatus) {
        // Double-click guard: one attempt in flight per instance.
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        // A conversing request being assigned becomes a different entity
        // (a tutoring), so it routes through a dedicated create call and
        // ends in a navigation rather than the settled callback.
        if from == MentorshipStatus::Conversing && to == MentorshipStatus::Assigned {
            self.assign().await;
            self.busy.store(false, Ordering::Release);
            return;
        }

        match self
            .service
            .update_request_status(self.config.request_id, to)
            .await
        {
            Ok(update) => {
                *self.status.write() = to;
                if update.request_status == MentorshipStatus::Conversing {
                    let slack_id = update
                        .tutee
                        .map(|t| t.slack_id)
                        .unwrap_or_else(SlackUserId::default);
                    let link = slack_team_link(&self.config.slack_workspace, &slack_id);
                    self.navigator.open_external(&link);
                }
            }
            Err(e) => {
                tracing::error!(
                    request = %self.config.request_id,
                    target = %to,
                    error = %e,
                    "status update failed"
                );
            }
        }

        self.busy.store(false, Ordering::Release);
        if let Some(callback) = &self.on_settled {
            callback();
        }
    }

    async fn assign(&self) {
        let Some(tutor_id) = self.config.tutor_id else {
            tracing::error!(
                request = %self.config.request_id,
                "cannot assign without a tutor"
            );
            return;
        };

        let req = CreateTutoringRequest {
            tutoring_request_id: self.config.request_id,
            tutor_id,
            objectives: self.config.objectives.clone(),
        };

        match self.service.create_tutoring(&req).await {
            Ok(_) => {
                *self.status.write() = MentorshipStatus::Assigned;
                self.navigator.navigate(&self.config.history_path);
            }
            Err(e) => {
                tracing::error!(
                    request = %self.config.request_id,
                    tutor = %tutor_id,
                    error = %e,
                    "tutoring creation failed"
                );
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNavigator;
    use async_trait::async_trait;
    use mentora_client::types::{StatusUpdateData, Tutoring, TuteeRef};
    use mentora_client::TutoringApiError;
    use mentora_core::TutoringId;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    /// Programmable fake backend shared by the flow tests.
    #[derive(Default)]
    struct FakeService {
        update_calls: AtomicUsize,
        create_calls: AtomicUsize,
        fail_update: bool,
        fail_create: bool,
        /// Override the echoed status; defaults to echoing the request.
        echo_status: Option<MentorshipStatus>,
        slack_id: Option<String>,
    }

    #[async_trait]
    impl TutoringService for Arc<FakeService> {
        async fn create_tutoring(
            &self,
            _req: &CreateTutoringRequest,
        ) -> Result<Tutoring, TutoringApiError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(TutoringApiError::ApiError {
                    endpoint: "POST /tutorings".into(),
                    status: 500,
                    body: "boom".into(),
                });
            }
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
            if self.fail_update {
                return Err(TutoringApiError::ApiError {
                    endpoint: "PATCH /status".into(),
                    status: 500,
                    body: "boom".into(),
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

    fn flow_from(
        status: MentorshipStatus,
        service: Arc<FakeService>,
    ) -> MentorshipFlow<Arc<FakeService>, RecordingNavigator> {
        let mut config = FlowConfig::new(RequestId::new(), status);
        config.tutor_id = Some(TutorId::new());
        MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service,
            RecordingNavigator::new(),
        )
    }

    #[tokio::test]
    async fn next_advances_one_step() {
        let service = Arc::new(FakeService::default());
        let flow = flow_from(MentorshipStatus::Pending, service.clone());
        flow.next().await;
        assert_eq!(flow.state(), MentorshipStatus::Available);
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 1);
        assert!(!flow.is_loading());
    }

    #[tokio::test]
    async fn illegal_action_is_silent_and_touches_nothing() {
        let service = Arc::new(FakeService::default());
        let flow = flow_from(MentorshipStatus::Pending, service.clone());
        flow.previous().await;
        assert_eq!(flow.state(), MentorshipStatus::Pending);
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn assignment_routes_through_tutoring_creation() {
        let service = Arc::new(FakeService::default());
        let flow = flow_from(MentorshipStatus::Conversing, service.clone());
        flow.next().await;
        assert_eq!(flow.state(), MentorshipStatus::Assigned);
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn assignment_navigates_to_history_and_skips_settled_callback() {
        let service = Arc::new(FakeService::default());
        let settled = Arc::new(AtomicUsize::new(0));
        let counter = settled.clone();
        let mut config = FlowConfig::new(RequestId::new(), MentorshipStatus::Conversing);
        config.tutor_id = Some(TutorId::new());
        let navigator = RecordingNavigator::new();
        let flow = MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service,
            navigator.clone(),
        )
        .with_on_settled(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        flow.next().await;

        assert_eq!(navigator.last_navigation().unwrap(), DEFAULT_HISTORY_PATH);
        assert_eq!(settled.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generic_transition_invokes_settled_callback() {
        let service = Arc::new(FakeService::default());
        let settled = Arc::new(AtomicUsize::new(0));
        let counter = settled.clone();
        let mut config = FlowConfig::new(RequestId::new(), MentorshipStatus::Pending);
        config.tutor_id = Some(TutorId::new());
        let flow = MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service,
            RecordingNavigator::new(),
        )
        .with_on_settled(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        flow.next().await;
        assert_eq!(settled.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn conversing_echo_opens_slack_link() {
        let service = Arc::new(FakeService {
            slack_id: Some("U999".into()),
            ..Default::default()
        });
        let navigator = RecordingNavigator::new();
        let mut config = FlowConfig::new(RequestId::new(), MentorshipStatus::Available);
        config.tutor_id = Some(TutorId::new());
        let flow = MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service,
            navigator.clone(),
        );

        flow.next().await;

        assert_eq!(flow.state(), MentorshipStatus::Conversing);
        let link = navigator.last_opened().unwrap();
        assert!(link.ends_with("/team/U999"), "got {link}");
    }

    #[tokio::test]
    async fn non_conversing_echo_opens_nothing() {
        let service = Arc::new(FakeService::default());
        let navigator = RecordingNavigator::new();
        let config = FlowConfig::new(RequestId::new(), MentorshipStatus::Pending);
        let flow = MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service,
            navigator.clone(),
        );

        flow.next().await;
        assert!(navigator.opened().is_empty());
    }

    #[tokio::test]
    async fn backend_failure_leaves_status_unchanged() {
        let service = Arc::new(FakeService {
            fail_update: true,
            ..Default::default()
        });
        let flow = flow_from(MentorshipStatus::Pending, service.clone());
        flow.next().await;
        assert_eq!(flow.state(), MentorshipStatus::Pending);
        assert!(!flow.is_loading());
    }

    #[tokio::test]
    async fn failed_assignment_leaves_status_and_skips_navigation() {
        let service = Arc::new(FakeService {
            fail_create: true,
            ..Default::default()
        });
        let navigator = RecordingNavigator::new();
        let mut config = FlowConfig::new(RequestId::new(), MentorshipStatus::Conversing);
        config.tutor_id = Some(TutorId::new());
        let flow = MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service.clone(),
            navigator.clone(),
        );

        flow.next().await;

        assert_eq!(flow.state(), MentorshipStatus::Conversing);
        assert!(navigator.navigations().is_empty());
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn assignment_without_tutor_is_dropped() {
        let service = Arc::new(FakeService::default());
        let config = FlowConfig::new(RequestId::new(), MentorshipStatus::Conversing);
        let flow = MentorshipFlow::new(
            config,
            TransitionTable::mentorship(),
            service.clone(),
            RecordingNavigator::new(),
        );

        flow.next().await;

        assert_eq!(flow.state(), MentorshipStatus::Conversing);
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 0);
        assert!(!flow.is_loading());
    }
}
