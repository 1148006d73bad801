//! Member record types shared between the core filter and the UI.

use serde::{Deserialize, Serialize};

/// Unique member identifier. Uniqueness is assumed from the directory source,
/// not enforced here — the id is used as a list key and as the payload handed
/// to selection callbacks.
pub type UserId = u64;

/// Human-readable role descriptor attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}

/// A member directory entry.
///
/// `full_name` and `role` are optional: partial records degrade in display
/// and filtering instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl User {
    /// Total display-name accessor — empty string when the name is absent.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }

    /// Role name, when a role is attached.
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_deserializes_with_none_fields() {
        let user: User = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, None);
        assert_eq!(user.role, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let user: User =
            serde_json::from_str(r#"{"id": 3, "full_name": "Kim", "email": "k@x.io"}"#).unwrap();
        assert_eq!(user.display_name(), "Kim");
    }

    #[test]
    fn display_name_defaults_to_empty() {
        let user = User {
            id: 1,
            full_name: None,
            role: None,
        };
        assert_eq!(user.display_name(), "");
    }

    #[test]
    fn role_name_reads_through_nested_role() {
        let user = User {
            id: 1,
            full_name: Some("Dana".into()),
            role: Some(Role {
                name: "Designer".into(),
            }),
        };
        assert_eq!(user.role_name(), Some("Designer"));
    }
}
