//! Case-insensitive substring filter over the member directory.

use crate::types::User;

/// Derive the visible subset of `users` for `query`.
///
/// A user is kept iff its display name, lower-cased, contains the lower-cased
/// query as a substring. Absent names compare as the empty string, so they
/// match only the empty query. Order is preserved and the input is untouched;
/// callers re-derive on every evaluation rather than caching the result.
pub fn filter_members<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.display_name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, User};

    fn user(id: u64, name: Option<&str>) -> User {
        User {
            id,
            full_name: name.map(String::from),
            role: None,
        }
    }

    #[test]
    fn empty_query_returns_full_list_in_order() {
        let users = vec![user(1, Some("Alice")), user(2, None), user(3, Some("Bob"))];
        let view = filter_members(&users, "");
        let ids: Vec<u64> = view.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let users = vec![user(1, Some("Alice")), user(2, Some("Bob"))];
        assert_eq!(filter_members(&users, "al").len(), 1);
        assert_eq!(filter_members(&users, "AL")[0].id, 1);
        assert_eq!(filter_members(&users, "aLiCe")[0].id, 1);
        assert_eq!(filter_members(&users, "ob")[0].id, 2);
    }

    #[test]
    fn alice_bob_scenario() {
        let users = vec![user(1, Some("Alice")), user(2, Some("Bob"))];
        let view = filter_members(&users, "al");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
        assert_eq!(view[0].display_name(), "Alice");
    }

    #[test]
    fn order_is_preserved_across_matches() {
        let users = vec![
            user(5, Some("Mariana")),
            user(2, Some("Ana")),
            user(9, Some("Nathan")),
        ];
        let ids: Vec<u64> = filter_members(&users, "an").iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn absent_name_never_matches_nonempty_query() {
        let users = vec![user(1, None), user(2, Some("Alice"))];
        for q in ["a", "alice", " ", "1"] {
            assert!(filter_members(&users, q).iter().all(|u| u.id != 1));
        }
    }

    #[test]
    fn no_match_yields_empty_view() {
        let users = vec![user(1, Some("Alice")), user(2, Some("Bob"))];
        assert!(filter_members(&users, "zed").is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        // The raw input value is matched verbatim, whitespace included.
        let users = vec![user(1, Some("Alice Smith")), user(2, Some("Alice"))];
        let view = filter_members(&users, "e s");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn roles_do_not_affect_matching() {
        let users = vec![User {
            id: 4,
            full_name: Some("Priya".into()),
            role: Some(Role {
                name: "Engineer".into(),
            }),
        }];
        assert!(filter_members(&users, "engineer").is_empty());
        assert_eq!(filter_members(&users, "pri").len(), 1);
    }
}
