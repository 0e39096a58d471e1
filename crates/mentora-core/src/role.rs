//! # Participant Roles
//!
//! The three roles a signed-in user can hold in the mentorship program.
//! Roles scope what the dashboards show; they are NOT an authorization
//! mechanism — authentication and session handling are delegated to the
//! external identity provider and never reach this layer.

use serde::{Deserialize, Serialize};

/// Role of a participant in the mentorship program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Program administrator: sees every request, approves and cancels.
    Administrator,
    /// Tutor: sees available requests and their own assignments.
    Tutor,
    /// Tutee: sees the requests they submitted.
    Tutee,
}

impl Role {
    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "ADMINISTRATOR",
            Self::Tutor => "TUTOR",
            Self::Tutee => "TUTEE",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::Administrator).unwrap(),
            "\"ADMINISTRATOR\""
        );
        assert_eq!(serde_json::to_string(&Role::Tutee).unwrap(), "\"TUTEE\"");
    }

    #[test]
    fn display_matches_wire_value() {
        for role in [Role::Administrator, Role::Tutor, Role::Tutee] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }
}
