use dioxus::prelude::*;

use super::join_classes;

/// Bordered, elevated container. `class` extends the base styling.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: join_classes(&["card", &class]),
            {children}
        }
    }
}
