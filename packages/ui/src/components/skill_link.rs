use content::Skill;
use dioxus::prelude::*;

use super::{EXTERNAL_REL, EXTERNAL_TARGET};
use crate::icons::FaArrowUpRightFromSquare;
use crate::Icon;

/// Card-like badge for a skill, linking to its documentation when it has any.
#[component]
pub fn SkillLink(skill: Skill) -> Element {
    let Some(docs) = skill.docs_url else {
        return rsx! {
            div {
                class: "skill-badge",
                span { "{skill.name}" }
            }
        };
    };

    rsx! {
        a {
            class: "skill-link",
            href: "{docs}",
            target: EXTERNAL_TARGET,
            rel: EXTERNAL_REL,
            div {
                class: "skill-badge",
                span { "{skill.name}" }
                span {
                    class: "skill-badge-external",
                    Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                }
            }
        }
    }
}
