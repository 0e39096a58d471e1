//! # Error Types — Structured Error Hierarchy
//!
//! Errors shared across the workspace. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Lifecycle errors carry the current status and the attempted action so
//! API responses and logs can name exactly what was rejected.

use thiserror::Error;

/// Top-level error type for Mentora.
#[derive(Error, Debug)]
pub enum MentoraError {
    /// Request lifecycle violation.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Timestamp parsing or normalization failure.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Error in mentorship request lifecycle transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The action has no transition defined from the current status.
    #[error("no {action} transition from {from}")]
    InvalidTransition {
        /// Current status name.
        from: String,
        /// Attempted action name.
        action: String,
    },

    /// The request is in a terminal status with no outgoing transitions.
    #[error("request is in terminal status {status}")]
    Terminal {
        /// The terminal status name.
        status: String,
    },
}
