//! One component per content section, each a straight walk over its slice of
//! the profile.

use content::{Platform, Profile, SectionId};
use dioxus::prelude::*;

use crate::brands::FaGithub;
use crate::components::{
    Activation, Button, ButtonVariant, Card, PlatformIcon, SkillLink, Tag, TagTone,
    EXTERNAL_REL, EXTERNAL_TARGET,
};
use crate::icons::{FaAward, FaBookOpen, FaEnvelope, FaGraduationCap, FaUsers};
use crate::{Icon, Section};

#[component]
pub fn AboutSection(profile: Profile) -> Element {
    rsx! {
        Section {
            id: SectionId::About,
            Card {
                p { class: "about-text", "{profile.about}" }
            }
        }
    }
}

#[component]
pub fn SkillsSection(profile: Profile) -> Element {
    rsx! {
        Section {
            id: SectionId::Skills,
            div {
                class: "skills-grid",
                for skill in profile.skills {
                    SkillLink { key: "{skill.name}", skill: *skill }
                }
            }
            div {
                class: "interests",
                h3 { class: "interests-title", "Interests" }
                div {
                    class: "tag-row",
                    for interest in profile.interests {
                        Tag { key: "{interest}", label: "{interest}", tone: TagTone::Accent }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection(profile: Profile) -> Element {
    rsx! {
        Section {
            id: SectionId::Projects,
            div {
                class: "card-grid",
                for project in profile.projects {
                    Card {
                        key: "{project.name}",
                        div {
                            class: "project",
                            div {
                                h3 { class: "card-title", "{project.name}" }
                                p { class: "card-body", "{project.description}" }
                                div {
                                    class: "tag-row",
                                    for tech in project.stack {
                                        Tag { key: "{tech}", label: "{tech}" }
                                    }
                                }
                            }
                            a {
                                class: "icon-link",
                                href: "{project.href}",
                                target: EXTERNAL_TARGET,
                                rel: EXTERNAL_REL,
                                title: "{project.name} source",
                                Icon { icon: FaGithub, width: 20, height: 20 }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection(profile: Profile) -> Element {
    rsx! {
        Section {
            id: SectionId::Experience,
            div {
                class: "card-stack",
                for job in profile.experience {
                    Card {
                        key: "{job.company}",
                        div {
                            class: "card-heading",
                            div {
                                h3 { class: "card-title", "{job.role} · {job.company}" }
                                p { class: "card-meta", "{job.location}" }
                            }
                            p { class: "card-period", "{job.period}" }
                        }
                        ul {
                            class: "bullet-list",
                            for point in job.points {
                                li { "{point}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EducationSection(profile: Profile) -> Element {
    rsx! {
        Section {
            id: SectionId::Education,
            div {
                class: "card-grid",
                for school in profile.education {
                    Card {
                        key: "{school.school}",
                        div {
                            class: "card-with-icon",
                            span {
                                class: "card-icon",
                                Icon { icon: FaGraduationCap, width: 24, height: 24 }
                            }
                            div {
                                h3 { class: "card-title", "{school.school}" }
                                p { class: "card-body", "{school.degree} · {school.score}" }
                                p { class: "card-meta", "{school.period} · {school.location}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Achievements and certificates side by side.
#[component]
pub fn ExtrasSection(profile: Profile) -> Element {
    rsx! {
        Section {
            id: SectionId::Extras,
            div {
                class: "card-grid",
                Card {
                    div {
                        class: "card-label",
                        Icon { icon: FaAward, width: 18, height: 18 }
                        h3 { class: "card-title", "Achievements" }
                    }
                    ul {
                        class: "bullet-list",
                        for achievement in profile.achievements {
                            li { "{achievement}" }
                        }
                    }
                }
                Card {
                    div {
                        class: "card-label",
                        Icon { icon: FaBookOpen, width: 18, height: 18 }
                        h3 { class: "card-title", "Certificates" }
                    }
                    ul {
                        class: "bullet-list",
                        for certificate in profile.certificates {
                            li { "{certificate}" }
                        }
                    }
                }
            }
        }
    }
}

/// Positions of responsibility. Renders nothing when there are none.
#[component]
pub fn LeadershipSection(profile: Profile) -> Element {
    if !profile.has_positions() {
        return rsx! {};
    }

    rsx! {
        Section {
            id: SectionId::Leadership,
            div {
                class: "card-stack",
                for position in profile.positions {
                    Card {
                        key: "{position.role}",
                        div {
                            class: "card-with-icon",
                            span {
                                class: "card-icon",
                                Icon { icon: FaUsers, width: 24, height: 24 }
                            }
                            div {
                                class: "card-fill",
                                div {
                                    class: "card-heading",
                                    h3 { class: "card-title", "{position.role} · {position.org}" }
                                    p { class: "card-period", "{position.period}" }
                                }
                                ul {
                                    class: "bullet-list",
                                    for detail in position.details {
                                        li { "{detail}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection(profile: Profile) -> Element {
    let linked = [Platform::GitHub, Platform::LinkedIn]
        .into_iter()
        .filter_map(|platform| profile.social(platform).map(|url| (platform, url)));

    rsx! {
        Section {
            id: SectionId::Contact,
            Card {
                class: "contact",
                p { class: "contact-text", "Want to build something? Send a message and let’s get started." }
                div {
                    class: "contact-actions",
                    Button {
                        activation: Activation::link(profile.mailto()),
                        Icon { icon: FaEnvelope, width: 16, height: 16 }
                        " {profile.email}"
                    }
                    for (platform, url) in linked {
                        Button {
                            key: "{url}",
                            activation: Activation::external(url),
                            variant: ButtonVariant::Outline,
                            PlatformIcon { platform }
                            " {platform.label()}"
                        }
                    }
                }
            }
        }
    }
}
