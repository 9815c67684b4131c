use content::SectionId;
use dioxus::prelude::*;

/// Titled, anchorable content block. Title and kicker default to the ones the
/// section id carries; pass them explicitly to override.
#[component]
pub fn Section(
    id: SectionId,
    title: Option<String>,
    kicker: Option<String>,
    children: Element,
) -> Element {
    let title = title.unwrap_or_else(|| id.title().to_string());
    let kicker = kicker.or_else(|| id.kicker().map(str::to_string));

    rsx! {
        section {
            id: id.anchor(),
            class: "section",
            div {
                class: "section-header",
                if let Some(kicker) = kicker {
                    p { class: "section-kicker", "{kicker}" }
                }
                h2 { class: "section-title", "{title}" }
            }
            {children}
        }
    }
}
