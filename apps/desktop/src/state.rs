//! Global application state using Dioxus signals.

use std::path::Path;

use dioxus::prelude::*;
use roster_core::{Role, User, UserId};

/// Which picker layout is active
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Sidebar,
    Modal,
}

/// Load the user directory: `roster.json` in the working directory when
/// present, built-in sample roster otherwise.
pub fn load_directory() -> Vec<User> {
    let path = Path::new("roster.json");
    if path.exists() {
        match roster_core::load_roster(path) {
            Ok(users) => {
                tracing::info!(count = users.len(), "loaded roster.json");
                return users;
            }
            Err(err) => {
                tracing::warn!("falling back to sample roster: {err}");
            }
        }
    }
    sample_roster()
}

fn sample_roster() -> Vec<User> {
    let named = |id: UserId, name: &str, role: &str| User {
        id,
        full_name: Some(name.to_string()),
        role: Some(Role {
            name: role.to_string(),
        }),
    };
    vec![
        named(1, "Alice Ngata", "Engineer"),
        named(2, "Bob Castellano", "Designer"),
        named(3, "Chidi Okafor", "Engineer"),
        named(4, "Dana Petrov", "Product"),
        named(5, "Emre Aydin", "Engineer"),
        named(6, "Fatima al-Rashid", "QA"),
        // Directory entries are not always complete
        User {
            id: 7,
            full_name: Some("Grace Liu".to_string()),
            role: None,
        },
        User {
            id: 8,
            full_name: None,
            role: Some(Role {
                name: "Contractor".to_string(),
            }),
        },
    ]
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// User directory — set once at startup
pub static DIRECTORY: GlobalSignal<Vec<User>> = Signal::global(|| vec![]);

/// Ids of the users currently on the project
pub static PROJECT_MEMBERS: GlobalSignal<Vec<UserId>> = Signal::global(|| vec![]);

/// Id carried by an in-flight row drag, consumed by the drop target
pub static DRAG_PAYLOAD: GlobalSignal<Option<UserId>> = Signal::global(|| None);

/// Whether the modal picker is open
pub static PICKER_OPEN: GlobalSignal<bool> = Signal::global(|| false);

/// Active picker layout
pub static ACTIVE_LAYOUT: GlobalSignal<Layout> = Signal::global(|| Layout::Sidebar);

/// Add a user to the project, ignoring duplicates.
pub fn add_member(id: UserId) {
    let mut members = PROJECT_MEMBERS.write();
    if members.contains(&id) {
        tracing::debug!(id, "already on the project, ignoring");
        return;
    }
    tracing::info!(id, "member added");
    members.push(id);
}
