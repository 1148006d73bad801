//! Modal picker — full-viewport overlay with click-to-add rows.

use dioxus::prelude::*;
use roster_core::{filter_members, User, UserId};

use super::search_field::SearchField;

#[component]
pub fn ModalPicker(
    users: Vec<User>,
    query: Signal<String>,
    on_add: EventHandler<UserId>,
    on_close: EventHandler<()>,
) -> Element {
    let q = query.read();
    let visible = filter_members(&users, &q);

    rsx! {
        div {
            class: "picker-overlay",

            div {
                class: "picker-modal",

                button {
                    class: "picker-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }

                div { class: "picker-header", "Add a member" }
                SearchField { query, placeholder: "Search members..." }

                // No empty-state placeholder here — the modal just shows an
                // empty list when nothing matches
                div {
                    class: "picker-list",
                    for user in visible {
                        div {
                            key: "{user.id}",
                            class: "member-row clickable",
                            onclick: {
                                let id = user.id;
                                move |_| on_add.call(id)
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
