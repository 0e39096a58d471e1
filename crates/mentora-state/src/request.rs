//! # Mentorship Request Entity
//!
//! The locally-held view of a mentorship request. The remote backend owns
//! the record; this type mirrors the fields the dashboards and the
//! orchestrator care about, enforces lifecycle transitions through the
//! table, and keeps an ordered log of every move for audit display.

use serde::{Deserialize, Serialize};

use mentora_core::{RequestId, StateError, Timestamp, TuteeId, TutorId};

use crate::status::MentorshipStatus;
use crate::transition::{TransitionAction, TransitionTable};

/// Record of a single status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTransitionRecord {
    /// Status before the transition.
    pub from_status: MentorshipStatus,
    /// Status after the transition.
    pub to_status: MentorshipStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}

/// A mentorship request with its lifecycle status and transition history.
///
/// The backend remains the source of truth: each accepted move is
/// persisted remotely before (or instead of) updating this view, and
/// [`MentorshipRequest::force_status`] exists precisely so a confirmed
/// remote state can overwrite the local one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorshipRequest {
    /// Backend-issued identifier, stable for the request's lifetime.
    pub id: RequestId,
    /// The tutee who submitted the request.
    pub tutee_id: TuteeId,
    /// The tutor assigned when the request becomes a tutoring.
    pub tutor_id: Option<TutorId>,
    /// Short subject of the request.
    pub topic: String,
    /// What the tutee wants to achieve; forwarded when a tutoring is created.
    pub objectives: String,
    /// Current lifecycle status.
    pub status: MentorshipStatus,
    /// When the request was submitted.
    pub created_at: Timestamp,
    /// Ordered log of all local status transitions.
    pub transition_log: Vec<StatusTransitionRecord>,
}

impl MentorshipRequest {
    /// Create a new request in `PENDING`, as a tutee submission produces it.
    pub fn new(id: RequestId, tutee_id: TuteeId, topic: String, objectives: String) -> Self {
        Self {
            id,
            tutee_id,
            tutor_id: None,
            topic,
            objectives,
            status: MentorshipStatus::Pending,
            created_at: Timestamp::now(),
            transition_log: Vec::new(),
        }
    }

    /// Resolve `action` through `table` and move to the result.
    ///
    /// Records the transition in the log on success. Returns the new
    /// status, or a structured error when the action is not permitted —
    /// the request is left untouched in that case.
    pub fn try_apply(
        &mut self,
        table: &TransitionTable,
        action: TransitionAction,
    ) -> Result<MentorshipStatus, StateError> {
        let next = table.apply(self.status, action)?;
        self.record(next);
        Ok(next)
    }

    /// Force-set the status to a value confirmed by the backend.
    ///
    /// Bypasses the table on purpose: the remote record has already
    /// moved, so the local view must follow even if the hop is not a
    /// defined transition. A no-op when the status already matches.
    pub fn force_status(&mut self, status: MentorshipStatus) {
        if status != self.status {
            self.record(status);
        }
    }

    /// Whether the request has reached the end of its lifecycle.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn record(&mut self, to: MentorshipStatus) {
        self.transition_log.push(StatusTransitionRecord {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
        });
        self.status = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
