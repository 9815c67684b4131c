use content::Platform;
use dioxus::prelude::*;

use super::{EXTERNAL_REL, EXTERNAL_TARGET};
use crate::brands::{FaGithub, FaLinkedin};
use crate::icons::{FaArrowUpRightFromSquare, FaCode, FaTrophy};
use crate::Icon;

/// Rounded external link: icon, label and a trailing external-link glyph.
/// Always opens a new browsing context without a referrer.
#[component]
pub fn Pill(href: String, icon: Element, label: String) -> Element {
    rsx! {
        a {
            class: "pill",
            href: "{href}",
            target: EXTERNAL_TARGET,
            rel: EXTERNAL_REL,
            span { class: "pill-icon", {icon} }
            span { "{label}" }
            span {
                class: "pill-external",
                Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
            }
        }
    }
}

#[component]
pub fn PlatformIcon(platform: Platform, #[props(default = 16)] size: u32) -> Element {
    match platform {
        Platform::GitHub => rsx! { Icon { icon: FaGithub, width: size, height: size } },
        Platform::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: size, height: size } },
        Platform::LeetCode => rsx! { Icon { icon: FaCode, width: size, height: size } },
        Platform::Codeforces => rsx! { Icon { icon: FaTrophy, width: size, height: size } },
    }
}
