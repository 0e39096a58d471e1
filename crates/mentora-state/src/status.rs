//! # Mentorship Request Status
//!
//! The closed set of lifecycle statuses for a mentorship request. The
//! enum value doubles as the wire value (SCREAMING_SNAKE_CASE string)
//! and carries the Spanish display label the dashboards render.
//!
//! ```text
//! PENDING ──▶ AVAILABLE ──▶ CONVERSING ──▶ ASSIGNED ──▶ COMPLETED
//!    │            │             │             │
//!    └────────────┴─────────────┴─────────────┴──▶ CANCELLING ──▶ CANCELLED
//! ```
//!
//! `ACTIVE` is carried for display compatibility only: no transition in
//! the table produces it and none leaves it. See the crate docs and the
//! transition table for how unreachable statuses are treated.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a mentorship request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentorshipStatus {
    /// Submitted by a tutee, awaiting administrator approval.
    Pending,
    /// Approved and visible to tutors.
    Available,
    /// A tutor has opened a conversation with the tutee.
    Conversing,
    /// A tutoring session record exists; the request became a tutoring.
    Assigned,
    /// Cancellation requested, awaiting confirmation.
    Cancelling,
    /// Finished successfully (terminal).
    Completed,
    /// Cancelled (terminal).
    Cancelled,
    /// Display-only status. Not reachable via any defined transition and
    /// has no outgoing transitions; kept because the backend can report it.
    Active,
}

impl MentorshipStatus {
    /// Every status, in lifecycle order. Used by matrix tests and the CLI.
    pub const ALL: [MentorshipStatus; 8] = [
        Self::Pending,
        Self::Available,
        Self::Conversing,
        Self::Assigned,
        Self::Cancelling,
        Self::Completed,
        Self::Cancelled,
        Self::Active,
    ];

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Available => "AVAILABLE",
            Self::Conversing => "CONVERSING",
            Self::Assigned => "ASSIGNED",
            Self::Cancelling => "CANCELLING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Active => "ACTIVE",
        }
    }

    /// Spanish display label rendered by the dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Available => "Aprobada",
            Self::Conversing => "Conversando",
            Self::Assigned => "Asignada",
            Self::Cancelling => "En cancelación",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
            Self::Active => "Activa",
        }
    }

    /// Parse a canonical wire name back into a status.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Whether this status ends the request lifecycle.
    ///
    /// `ACTIVE` also has no outgoing transitions, but it is a display
    /// artifact rather than an end state, so it is not reported terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for MentorshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
