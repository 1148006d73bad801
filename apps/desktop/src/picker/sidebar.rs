//! Sidebar picker — docked, scrollable list of draggable member rows.

use dioxus::prelude::*;
use roster_core::{filter_members, User, UserId};

use super::search_field::SearchField;

#[component]
pub fn SidebarPicker(
    users: Vec<User>,
    query: Signal<String>,
    on_drag_start: EventHandler<(DragEvent, UserId)>,
) -> Element {
    let q = query.read();
    let visible = filter_members(&users, &q);

    rsx! {
        aside {
            class: "picker-sidebar",

            div { class: "picker-header", "TEAM MEMBERS" }
            SearchField { query, placeholder: "Search members..." }

            if visible.is_empty() {
                div { class: "picker-empty", "No users found" }
            } else {
                div {
                    class: "picker-list picker-list-scroll",
                    // Rows are drag sources only — no click handler in this mode
                    for user in visible {
                        div {
                            key: "{user.id}",
                            class: "member-row draggable",
                            draggable: "true",
                            ondragstart: {
                                let id = user.id;
                                move |evt: DragEvent| on_drag_start.call((evt, id))
                            },
                            div { class: "member-name", {user.display_name()} }
                            {user.role_name().map(|role| rsx! {
                                div { class: "member-role", "{role}" }
                            })}
                        }
                    }
                }
            }
        }
    }
}
