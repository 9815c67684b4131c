use chrono::Datelike;
use content::{Profile, SectionId};
use dioxus::prelude::*;

#[component]
pub fn Footer(profile: Profile) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-inner",
                p { "© {year} {profile.name}. Built with Rust, Dioxus and a canvas." }
                a { class: "footer-top", href: SectionId::Home.href(), "Back to top" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;
    use content::PROFILE;

    #[test]
    fn test_footer_year_and_name() {
        fn app() -> Element {
            rsx! { Footer { profile: PROFILE } }
        }
        let html = render(app);
        let year = chrono::Local::now().year().to_string();
        assert!(html.contains(&year));
        assert!(html.contains("Unique Patel"));
        assert!(html.contains(r##"href="#home""##));
    }
}
