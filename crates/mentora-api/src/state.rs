//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! AppState holds only what this service owns:
//! - **Feedback** — collected after a request closes (this service's
//!   only persistent-ish data, kept in memory).
//! - **Tutoring client** — typed client delegating request records and
//!   lifecycle persistence to the remote backend.
//! - **Configuration** — port, Slack workspace, history path.
//!
//! Request records are NOT stored here. They live in the tutoring
//! backend and are accessed via `mentora-client`; the backend is the
//! source of truth for request status.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use mentora_client::TutoringClient;
use mentora_core::Role;
use mentora_flow::notify::{DEFAULT_HISTORY_PATH, DEFAULT_WORKSPACE};

// -- Generic In-Memory Store --------------------------------------------------

/// Thread-safe, cloneable in-memory key-value store.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) because the lock is never held across `.await` points.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    pub fn insert(&self, id: Uuid, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    /// Retrieve a record by ID.
    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    /// List all records.
    pub fn list(&self) -> Vec<T> {
        self.data.read().values().cloned().collect()
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// -- Records owned by this service --------------------------------------------

/// Feedback left on a closed mentorship request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub request_id: Uuid,
    /// Who left the feedback (display scoping only — not authorization).
    #[schema(value_type = String)]
    pub author_role: Role,
    /// 1 (poor) to 5 (excellent).
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// -- Configuration ------------------------------------------------------------

/// Service configuration, loaded from the environment by `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port.
    pub port: u16,
    /// Slack workspace used in notification deep links.
    pub slack_workspace: String,
    /// In-app path the dashboards show after an assignment.
    pub history_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            slack_workspace: DEFAULT_WORKSPACE.to_string(),
            history_path: DEFAULT_HISTORY_PATH.to_string(),
        }
    }
}

// -- AppState ------------------------------------------------------------------

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Typed client for the tutoring backend. `None` when the backend is
    /// not configured — proxied endpoints answer 503 in that case.
    pub client: Option<TutoringClient>,
    /// Feedback records, keyed by feedback id.
    pub feedback: Store<FeedbackRecord>,
}

impl AppState {
    /// Create application state from configuration and an optional client.
    pub fn new(config: AppConfig, client: Option<TutoringClient>) -> Self {
        Self {
            config,
            client,
            feedback: Store::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_insert_get_list() {
        let store: Store<String> = Store::new();
        let id = Uuid::new_v4();
        assert!(store.insert(id, "hello".to_string()).is_none());
        assert_eq!(store.get(&id).unwrap(), "hello");
        assert_eq!(store.list().len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn store_insert_returns_previous_value() {
        let store: Store<u32> = Store::new();
        let id = Uuid::new_v4();
        store.insert(id, 1);
        assert_eq!(store.insert(id, 2), Some(1));
        assert_eq!(store.get(&id), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_data() {
        let store: Store<u32> = Store::new();
        let clone = store.clone();
        let id = Uuid::new_v4();
        clone.insert(id, 7);
        assert_eq!(store.get(&id), Some(7));
    }

    #[test]
    fn default_config_uses_program_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.slack_workspace, "somos-pragma");
        assert_eq!(config.history_path, "/history");
    }
}
