//! # mentora-client — Typed Rust client for the tutoring backend
//!
//! Provides ergonomic, typed access to the remote REST backend that owns
//! mentorship request records:
//!
//! - **Requests** — list/get/create plus the status update that drives
//!   the lifecycle (`PATCH .../tutoring-requests/{id}/status`).
//! - **Tutorings** — creation of a tutoring session record, the distinct
//!   operation used when a request is assigned to a tutor.
//!
//! ## Architecture
//!
//! This crate is the only path to the tutoring backend; nothing else in
//! the workspace issues HTTP requests to it. The client is deliberately
//! one-shot: no retry, no backoff. A failed call surfaces a structured
//! error and the caller decides — the backend is the source of truth for
//! final status, and re-attempting a transition is always safe from the
//! user's perspective.
//!
//! ## API Path Convention
//!
//! All endpoints live under `{base_url}/api/v1/`. For example:
//! `https://tutoring.api.example.com/api/v1/tutoring-requests`.

pub mod config;
pub mod error;
mod requests;
mod tutoring;
pub mod types;

pub use config::TutoringApiConfig;
pub use error::TutoringApiError;

use std::time::Duration;

/// API version path segment for the tutoring backend.
const API_PREFIX: &str = "api/v1";

/// Client for the tutoring backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TutoringClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl TutoringClient {
    /// Create a new client from configuration.
    pub fn new(config: TutoringApiConfig) -> Result<Self, TutoringApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!(
                        "Bearer {}",
                        config.api_token
                    ))
                    .map_err(|_| {
                        TutoringApiError::Config(config::ConfigError::MissingToken)
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| TutoringApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}
