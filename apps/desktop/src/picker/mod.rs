//! Member picker widget — a search-filtered view of the user directory,
//! rendered as a drag-source sidebar or a click-to-add modal.

mod modal;
mod search_field;
mod sidebar;

use dioxus::prelude::*;
use roster_core::{User, UserId};

use modal::ModalPicker;
use sidebar::SidebarPicker;

/// Which rendering branch the picker takes. Each variant carries only the
/// callbacks that branch can fire, so a sidebar picker cannot be handed a
/// close handler it will never call.
#[derive(Clone, PartialEq)]
pub enum PickerLayout {
    /// Docked list of drag sources.
    Sidebar {
        /// Fired when a row's drag gesture begins; forwards the platform
        /// event unchanged together with the row's user id.
        on_drag_start: EventHandler<(DragEvent, UserId)>,
    },
    /// Full-viewport overlay with click-to-add rows and a dismiss control.
    Modal {
        on_add: EventHandler<UserId>,
        on_close: EventHandler<()>,
    },
}

/// Member selection surface.
///
/// Owns the search query; every keystroke replaces it verbatim (no trimming,
/// no debouncing) and the visible list is re-derived on every render. The
/// query resets whenever the picker is remounted, e.g. when the modal is
/// reopened. All selection intents go to the caller — the picker itself does
/// no fetching, validation, or persistence.
#[component]
pub fn MemberPicker(#[props(default)] users: Vec<User>, layout: PickerLayout) -> Element {
    let query = use_signal(String::new);

    match layout {
        PickerLayout::Sidebar { on_drag_start } => rsx! {
            SidebarPicker { users, query, on_drag_start }
        },
        PickerLayout::Modal { on_add, on_close } => rsx! {
            ModalPicker { users, query, on_add, on_close }
        },
    }
}
