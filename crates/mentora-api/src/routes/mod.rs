//! # API Route Modules
//!
//! - `requests` — request listing/creation proxied to the tutoring
//!   backend, plus the lifecycle transition endpoint that drives
//!   `mentora-flow` server-side.
//! - `history` — closed (COMPLETED/CANCELLED) requests for the history
//!   tables.
//! - `feedback` — feedback collection on closed requests (owned by this
//!   service).

pub mod feedback;
pub mod history;
pub mod requests;
