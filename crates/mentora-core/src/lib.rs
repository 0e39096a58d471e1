//! # mentora-core — Foundational Types for Mentora
//!
//! Shared primitives for the Mentora mentorship platform. Every other crate
//! in the workspace depends on `mentora-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `RequestId`, `TutorId`,
//!    `TuteeId`, `TutoringId`, `SlackUserId` — no bare strings or UUIDs for
//!    identifiers, so a tutor id can never be passed where a tutee id is
//!    expected.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type is always UTC with
//!    seconds precision, so transition logs sort and compare consistently
//!    regardless of where a record was produced.
//!
//! 3. **Structured errors.** Lifecycle violations surface as `StateError`
//!    with the offending status and action attached, never as strings.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mentora-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod role;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{MentoraError, StateError};
pub use identity::{RequestId, SlackUserId, TuteeId, TutorId, TutoringId};
pub use role::Role;
pub use temporal::Timestamp;
