//! Search input shared by both picker layouts.

use dioxus::prelude::*;

/// Text input bound to the picker's query signal. The raw input value
/// replaces the query wholesale on every keystroke.
#[component]
pub fn SearchField(mut query: Signal<String>, placeholder: &'static str) -> Element {
    rsx! {
        div {
            class: "picker-search",

            svg {
                class: "picker-search-icon",
                width: "14",
                height: "14",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "picker-search-input",
                r#type: "text",
                placeholder,
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| {
                    *query.write() = e.value();
                },
            }
        }
    }
}
