//! # mentora-state — Mentorship Request Lifecycle
//!
//! Implements the mentorship request state machine as two decoupled pure
//! layers, with all side effects kept out of this crate:
//!
//! - **Status** (`status.rs`): the closed `MentorshipStatus` enumeration.
//!   `PENDING → AVAILABLE → CONVERSING → ASSIGNED → COMPLETED`, with the
//!   cancellation branch `CANCELLING → CANCELLED` reachable from every
//!   non-terminal forward status.
//!
//! - **Transition table** (`transition.rs`): an immutable lookup from
//!   `(status, action)` to the resulting status. Constructed once and
//!   injected into callers — never ambient global state — so it can be
//!   unit-tested in isolation and swapped for alternate workflows. The
//!   same table backs three views: `lookup` (optional), `reduce` (total,
//!   no-op on illegal input) and `apply` (structured error on illegal
//!   input).
//!
//! - **Request entity** (`request.rs`): the locally-held view of a
//!   request with a runtime-checked transition method and an ordered
//!   transition log, mirroring what the remote backend owns.
//!
//! ## Design
//!
//! The table is deliberately runtime-checked rather than typestate-encoded:
//! statuses arrive from the backend as wire strings, so the current status
//! is never known at compile time. Illegal actions are a total no-op in
//! the reducer view (the UI treats them as an affordance gap, not an
//! error) and a structured [`mentora_core::StateError`] in the `apply`
//! view (the API and CLI need a failure signal).

pub mod request;
pub mod status;
pub mod transition;

// ─── Status re-exports ──────────────────────────────────────────────

pub use status::MentorshipStatus;

// ─── Transition re-exports ──────────────────────────────────────────

pub use transition::{StatusAction, TransitionAction, TransitionTable};

// ─── Request re-exports ─────────────────────────────────────────────

pub use request::{MentorshipRequest, StatusTransitionRecord};
