//! # mentora-cli — Operator CLI for the Mentora Program
//!
//! Provides the `mentora` command-line interface for program
//! administrators who prefer a terminal over the dashboards.
//!
//! ## Subcommands
//!
//! - `mentora request` — list, inspect, and drive mentorship requests
//!   against the tutoring backend (`advance`, `back`, `cancel`).
//! - `mentora states` — print the lifecycle transition matrix.
//!
//! Transitions run through the same `mentora-flow` orchestration the API
//! uses; any Slack deep link a transition produces is printed instead of
//! opened.

pub mod request;
pub mod states;
