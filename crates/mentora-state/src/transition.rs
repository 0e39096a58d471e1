//! # Transition Table and Reducer
//!
//! The pure decision layer of the request lifecycle: a static mapping
//! from `(status, action)` to the next status, with no side effects and
//! no knowledge of the network calls a transition implies.
//!
//! Three views over the same table serve three kinds of caller:
//!
//! - [`TransitionTable::lookup`] — `Option<MentorshipStatus>`; `None`
//!   means the action is not permitted from that status. The orchestrator
//!   treats `None` as a silent no-op, never as an error.
//! - [`TransitionTable::reduce`] — total function used for local state
//!   updates; illegal actions return the input status unchanged, and
//!   [`StatusAction::Set`] force-sets the status (dispatched only after a
//!   backend call succeeds, so a failed call never moves local state).
//! - [`TransitionTable::apply`] — `Result` with a structured
//!   [`StateError`] for the API and CLI, which need a failure signal the
//!   reducer deliberately does not surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mentora_core::StateError;

use crate::status::MentorshipStatus;

// ─── Actions ─────────────────────────────────────────────────────────

/// A named user action against a request's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionAction {
    /// Advance to the next status on the current path.
    Next,
    /// Step back to the prior status.
    Previous,
    /// Enter the cancellation branch.
    Cancel,
}

impl TransitionAction {
    /// Every action. Used by matrix tests and the CLI.
    pub const ALL: [TransitionAction; 3] = [Self::Next, Self::Previous, Self::Cancel];

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "NEXT",
            Self::Previous => "PREVIOUS",
            Self::Cancel => "CANCEL",
        }
    }
}

impl std::fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to the reducer: either a named action resolved through the
/// table, or a force-set dispatched after an asynchronous operation
/// confirms success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// Resolve a named action through the transition table.
    Apply(TransitionAction),
    /// Force-set the status to an explicit value.
    Set(MentorshipStatus),
}

// ─── Transition table ────────────────────────────────────────────────

/// Immutable lookup from `(status, action)` to the resulting status.
///
/// Exhaustively defined: every status in the enum is a key, terminal
/// statuses map to an empty action set. Constructed once (see
/// [`TransitionTable::mentorship`]) and injected wherever transition
/// decisions are made.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    edges: BTreeMap<MentorshipStatus, BTreeMap<TransitionAction, MentorshipStatus>>,
}

impl TransitionTable {
    /// The mentorship request workflow.
    ///
    /// | status     | NEXT       | PREVIOUS  | CANCEL     |
    /// |------------|------------|-----------|------------|
    /// | PENDING    | AVAILABLE  | —         | CANCELLING |
    /// | AVAILABLE  | CONVERSING | PENDING   | CANCELLING |
    /// | CONVERSING | ASSIGNED   | AVAILABLE | CANCELLING |
    /// | ASSIGNED   | COMPLETED  | —         | CANCELLING |
    /// | CANCELLING | CANCELLED  | —         | —          |
    /// | COMPLETED  | —          | —         | —          |
    /// | CANCELLED  | —          | —         | —          |
    /// | ACTIVE     | —          | —         | —          |
    pub fn mentorship() -> Self {
        use MentorshipStatus::*;
        use TransitionAction::*;

        let mut table = Self::empty();
        table.edge(Pending, Next, Available);
        table.edge(Pending, Cancel, Cancelling);
        table.edge(Available, Next, Conversing);
        table.edge(Available, Previous, Pending);
        table.edge(Available, Cancel, Cancelling);
        table.edge(Conversing, Next, Assigned);
        table.edge(Conversing, Previous, Available);
        table.edge(Conversing, Cancel, Cancelling);
        table.edge(Assigned, Next, Completed);
        table.edge(Assigned, Cancel, Cancelling);
        table.edge(Cancelling, Next, Cancelled);
        table
    }

    /// A table with every status present and no transitions defined.
    fn empty() -> Self {
        let edges = MentorshipStatus::ALL
            .iter()
            .map(|s| (*s, BTreeMap::new()))
            .collect();
        Self { edges }
    }

    fn edge(&mut self, from: MentorshipStatus, action: TransitionAction, to: MentorshipStatus) {
        self.edges.entry(from).or_default().insert(action, to);
    }

    /// Resolve an action from a status. `None` means the action is not
    /// permitted — callers treat this as a no-op, never as an error that
    /// needs user-facing messaging.
    pub fn lookup(
        &self,
        status: MentorshipStatus,
        action: TransitionAction,
    ) -> Option<MentorshipStatus> {
        self.edges.get(&status).and_then(|m| m.get(&action)).copied()
    }

    /// The actions permitted from a status, with their targets, in a
    /// stable order.
    pub fn actions(
        &self,
        status: MentorshipStatus,
    ) -> Vec<(TransitionAction, MentorshipStatus)> {
        self.edges
            .get(&status)
            .map(|m| m.iter().map(|(a, t)| (*a, *t)).collect())
            .unwrap_or_default()
    }

    /// Whether a status has no outgoing transitions.
    pub fn is_closed(&self, status: MentorshipStatus) -> bool {
        self.edges.get(&status).map_or(true, BTreeMap::is_empty)
    }

    /// Pure reducer: total over every `(status, action)` pair.
    ///
    /// - `Set(payload)` returns `payload`.
    /// - `Apply(action)` returns the table entry if defined, else the
    ///   input status unchanged (idempotent no-op on illegal actions).
    pub fn reduce(&self, status: MentorshipStatus, action: StatusAction) -> MentorshipStatus {
        match action {
            StatusAction::Set(payload) => payload,
            StatusAction::Apply(named) => self.lookup(status, named).unwrap_or(status),
        }
    }

    /// Resolve an action, returning a structured error when it is not
    /// permitted. Distinguishes terminal statuses from mid-flow statuses
    /// that simply lack the action.
    pub fn apply(
        &self,
        status: MentorshipStatus,
        action: TransitionAction,
    ) -> Result<MentorshipStatus, StateError> {
        self.lookup(status, action).ok_or_else(|| {
            if status.is_terminal() {
                StateError::Terminal {
                    status: status.name().to_string(),
                }
            } else {
                StateError::InvalidTransition {
                    from: status.name().to_string(),
                    action: action.name().to_string(),
                }
            }
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
