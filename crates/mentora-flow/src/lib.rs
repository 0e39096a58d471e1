//! # mentora-flow — Transition Orchestration
//!
//! The side-effecting half of the request lifecycle. `mentora-state`
//! decides whether a move is legal; this crate makes the move real:
//!
//! 1. Resolve the action through the injected [`TransitionTable`]
//!    (`mentora_state::TransitionTable`). No entry → silent no-op.
//! 2. Persist the accepted move to the backend — the generic status
//!    update for most hops, tutoring creation for CONVERSING → ASSIGNED.
//! 3. Update local state only after the backend confirms, and fire the
//!    contextual side effect: a Slack deep link when the backend echoes
//!    CONVERSING, navigation to the history page after an assignment.
//!
//! All network failures are swallowed here (logged, local state
//! untouched, nothing rethrown). A busy flag serializes attempts per
//! instance so a double-click cannot submit the same transition twice.
//!
//! Side-effect targets are ports: [`TutoringService`] for the backend,
//! [`Navigator`] for anything that would open a browser context. Headless
//! hosts (API handlers, the CLI, tests) plug in recording or logging
//! implementations.

pub mod flow;
pub mod notify;
pub mod ports;

pub use flow::{FlowConfig, MentorshipFlow};
pub use notify::{slack_team_link, Navigator, RecordingNavigator, TracingNavigator};
pub use ports::TutoringService;
