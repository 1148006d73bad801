//! Root application component — project board hosting the member picker.
//!
//! The board is the picker's consumer: it supplies the user directory, owns
//! the drop target that receives sidebar drags, and performs the add-member
//! action for modal clicks.

use dioxus::prelude::*;

use roster_core::UserId;

use crate::picker::{MemberPicker, PickerLayout};
use crate::state::*;
use crate::INITIAL_ROSTER;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Consume the pre-launch roster on first render
    use_hook(|| {
        if let Some(roster) = INITIAL_ROSTER.lock().unwrap().take() {
            *DIRECTORY.write() = roster;
        }
    });

    let layout = *ACTIVE_LAYOUT.read();
    let picker_open = *PICKER_OPEN.read();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            div {
                class: "titlebar",
                span { class: "titlebar-title", "Roster" }
                LayoutToggle {}
            }

            div {
                class: "content-area",

                if layout == Layout::Sidebar {
                    MemberPicker {
                        users: DIRECTORY.read().clone(),
                        layout: PickerLayout::Sidebar {
                            on_drag_start: EventHandler::new(|(_evt, id): (DragEvent, UserId)| {
                                tracing::info!(id, "drag started");
                                *DRAG_PAYLOAD.write() = Some(id);
                            }),
                        },
                    }
                }

                ProjectPanel {}
            }

            // Modal picker mounts fresh on every open, so its query starts empty
            if picker_open {
                MemberPicker {
                    users: DIRECTORY.read().clone(),
                    layout: PickerLayout::Modal {
                        on_add: EventHandler::new(|id: UserId| {
                            add_member(id);
                        }),
                        on_close: EventHandler::new(|_| {
                            *PICKER_OPEN.write() = false;
                        }),
                    },
                }
            }

            StatusBar {}
        }
    }
}

/// Project panel — drop target plus the current member list.
#[component]
fn ProjectPanel() -> Element {
    let directory = DIRECTORY.read();
    let members = PROJECT_MEMBERS.read();
    let layout = *ACTIVE_LAYOUT.read();

    // Resolve ids against the directory; an id without a record keeps a bare
    // "#id" chip rather than disappearing.
    let member_rows: Vec<(UserId, String)> = members
        .iter()
        .map(|id| {
            let name = directory
                .iter()
                .find(|u| u.id == *id)
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| format!("#{id}"));
            (*id, name)
        })
        .collect();

    rsx! {
        section {
            class: "project-panel",
            ondragover: move |evt: DragEvent| evt.prevent_default(),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                if let Some(id) = DRAG_PAYLOAD.write().take() {
                    add_member(id);
                }
            },

            div {
                class: "project-header",
                span { class: "project-title", "Sprint crew" }
                if layout == Layout::Modal {
                    button {
                        class: "project-add-btn",
                        onclick: move |_| { *PICKER_OPEN.write() = true; },
                        "+ Add member"
                    }
                }
            }

            if member_rows.is_empty() {
                div {
                    class: "project-hint",
                    if layout == Layout::Sidebar {
                        "Drag members here to add them"
                    } else {
                        "Use \u{201C}Add member\u{201D} to pick people"
                    }
                }
            } else {
                div {
                    class: "project-members",
                    for (id, name) in member_rows {
                        div {
                            key: "{id}",
                            class: "project-member-chip",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

/// Layout toggle — sidebar (drag sources) vs modal (click-to-add).
#[component]
fn LayoutToggle() -> Element {
    let active = *ACTIVE_LAYOUT.read();

    rsx! {
        nav {
            class: "layout-toggle",

            button {
                class: if active == Layout::Sidebar { "toggle-btn active" } else { "toggle-btn" },
                title: "Sidebar picker",
                onclick: move |_| {
                    *ACTIVE_LAYOUT.write() = Layout::Sidebar;
                    *PICKER_OPEN.write() = false;
                },
                svg {
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
                    line { x1: "9", y1: "3", x2: "9", y2: "21" }
                }
            }

            button {
                class: if active == Layout::Modal { "toggle-btn active" } else { "toggle-btn" },
                title: "Modal picker",
                onclick: move |_| { *ACTIVE_LAYOUT.write() = Layout::Modal; },
                svg {
                    width: "18",
                    height: "18",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    rect { x: "5", y: "7", width: "14", height: "12", rx: "2" }
                    line { x1: "12", y1: "10", x2: "12", y2: "16" }
                    line { x1: "9", y1: "13", x2: "15", y2: "13" }
                }
            }
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let directory = DIRECTORY.read();
    let members = PROJECT_MEMBERS.read();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-directory", "{directory.len()} people in directory" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-members", "{members.len()} on project" }
        }
    }
}
