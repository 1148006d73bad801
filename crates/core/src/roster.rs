//! Roster loading — the member directory as a JSON file on disk.

use std::fs;
use std::path::Path;

use crate::types::User;

/// Load a member directory from a JSON array of user records.
///
/// I/O and parse failures come back as strings for the caller to surface;
/// partial records load with `None` fields.
pub fn load_roster(path: &Path) -> Result<Vec<User>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("read {}: {e}", path.display()))?;
    let users: Vec<User> =
        serde_json::from_str(&raw).map_err(|e| format!("parse {}: {e}", path.display()))?;
    tracing::debug!(count = users.len(), path = %path.display(), "roster loaded");
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_roster_with_partial_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "full_name": "Alice", "role": {"name": "Engineer"}},
                {"id": 2, "full_name": "Bob"},
                {"id": 3}
            ]"#,
        )
        .unwrap();

        let users = load_roster(&path).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].role_name(), Some("Engineer"));
        assert_eq!(users[1].role, None);
        assert_eq!(users[2].full_name, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roster(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.starts_with("read "), "unexpected error: {err}");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_roster(&path).unwrap_err();
        assert!(err.starts_with("parse "), "unexpected error: {err}");
    }
}
