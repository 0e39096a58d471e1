//! # Domain Identity Newtypes
//!
//! Newtype wrappers for every identifier in the Mentora platform. These
//! prevent accidental identifier confusion — you cannot pass a `TutorId`
//! where a `TuteeId` is expected, even though both wrap a UUID.
//!
//! The backend is the issuer of all identifiers; this crate never mints
//! ids except through the explicit `new()` constructors used by tests
//! and by records owned locally (feedback).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a mentorship/tutoring request.
///
/// Opaque and stable for the lifetime of the request; assigned by the
/// remote tutoring backend when a tutee submits a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

/// Unique identifier for a tutoring session record.
///
/// A tutoring record is materialized by the backend when a request is
/// assigned to a tutor; it is a distinct entity from the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TutoringId(pub Uuid);

/// Unique identifier for a tutor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TutorId(pub Uuid);

/// Unique identifier for a tutee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TuteeId(pub Uuid);

/// Slack member identifier (e.g. `U02ABC123`).
///
/// Passed through exactly as the backend returns it — no format
/// validation, no escaping. A blank or malformed value produces a broken
/// deep link downstream, which is accepted behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlackUserId(pub String);

impl RequestId {
    /// Generate a new random request identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl TutoringId {
    /// Generate a new random tutoring identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TutoringId {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorId {
    /// Generate a new random tutor identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TutorId {
    fn default() -> Self {
        Self::new()
    }
}

impl TuteeId {
    /// Generate a new random tutee identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TuteeId {
    fn default() -> Self {
        Self::new()
    }
}

impl SlackUserId {
    /// Access the raw member id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is blank (produces a broken deep link).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request:{}", self.0)
    }
}

impl std::fmt::Display for TutoringId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tutoring:{}", self.0)
    }
}

impl std::fmt::Display for TutorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tutor:{}", self.0)
    }
}

impl std::fmt::Display for TuteeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tutee:{}", self.0)
    }
}

impl std::fmt::Display for SlackUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_per_call() {
        assert_ne!(RequestId::new(), RequestId::new());
        assert_ne!(TutorId::new(), TutorId::new());
    }

    #[test]
    fn request_id_display_is_prefixed() {
        let id = RequestId::new();
        assert!(id.to_string().starts_with("request:"));
    }

    #[test]
    fn slack_id_serializes_as_bare_string() {
        let id = SlackUserId("U02ABC123".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"U02ABC123\"");
    }

    #[test]
    fn slack_id_blank_detection() {
        assert!(SlackUserId::default().is_blank());
        assert!(SlackUserId("   ".into()).is_blank());
        assert!(!SlackUserId("U999".into()).is_blank());
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
