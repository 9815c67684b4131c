use content::{Profile, SiteConfig, PROFILE};
use dioxus::prelude::*;

use crate::state::UiState;
use crate::views::{
    AboutSection, ContactSection, EducationSection, ExperienceSection, ExtrasSection, Footer,
    LeadershipSection, ProjectsSection, SkillsSection,
};
use crate::{apply_theme, Hero, Navbar, Scene, PORTFOLIO_CSS};

/// The whole page. Owns the [`UiState`] signal and keeps the `<html>` theme
/// class in step with it.
#[component]
pub fn Portfolio(config: SiteConfig, #[props(default = PROFILE)] profile: Profile) -> Element {
    let state = use_context_provider(|| Signal::new(UiState::default()));

    use_effect(move || apply_theme(state().theme));

    let dark = state().theme.is_dark();

    rsx! {
        document::Stylesheet { href: PORTFOLIO_CSS }
        div {
            class: "portfolio",
            // The scene only belongs to the dark palette.
            if dark {
                Scene { config: config.scene.clone() }
            }
            Navbar { profile }
            Hero { profile, config: config.clone() }
            main {
                class: "portfolio-main",
                AboutSection { profile }
                SkillsSection { profile }
                ProjectsSection { profile }
                ExperienceSection { profile }
                EducationSection { profile }
                ExtrasSection { profile }
                LeadershipSection { profile }
                ContactSection { profile }
            }
            Footer { profile }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_rendered, render};
    use content::SectionId;

    fn app() -> Element {
        rsx! { Portfolio { config: SiteConfig::default() } }
    }

    /// Opening tags of every `<a>` element in the page.
    fn anchors(html: &str) -> Vec<&str> {
        html.split("<a ")
            .skip(1)
            .filter_map(|rest| rest.split('>').next())
            .collect()
    }

    #[test]
    fn test_every_literal_is_rendered() {
        let html = render(app);
        let p = &PROFILE;

        for text in [p.name, p.title, p.email, p.about] {
            assert_rendered(&html, text);
        }
        for skill in p.skills {
            assert_rendered(&html, skill.name);
        }
        for text in p.interests.iter().chain(p.achievements).chain(p.certificates) {
            assert_rendered(&html, text);
        }
        for project in p.projects {
            assert_rendered(&html, project.name);
            assert_rendered(&html, project.description);
        }
        for school in p.education {
            for text in [school.school, school.degree, school.score, school.period, school.location] {
                assert_rendered(&html, text);
            }
        }
        for position in p.positions {
            assert_rendered(&html, position.role);
            assert_rendered(&html, position.org);
            for detail in position.details {
                assert_rendered(&html, detail);
            }
        }
    }

    #[test]
    fn test_single_heading_and_section_per_category() {
        let html = render(app);
        assert_eq!(html.matches("<h1").count(), 1);
        for id in [
            SectionId::Home,
            SectionId::About,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Experience,
            SectionId::Education,
            SectionId::Extras,
            SectionId::Leadership,
            SectionId::Contact,
        ] {
            let marker = format!(r#"id="{}""#, id.anchor());
            assert_eq!(html.matches(&marker).count(), 1, "{marker}");
        }
    }

    #[test]
    fn test_outbound_links_open_without_referrer() {
        let html = render(app);
        let anchors = anchors(&html);

        for url in PROFILE.outbound_links() {
            let href = format!(r#"href="{url}""#);
            let matching: Vec<_> = anchors.iter().filter(|a| a.contains(&href)).collect();
            assert!(!matching.is_empty(), "no anchor for {url}");
            for anchor in matching {
                assert!(anchor.contains(r#"target="_blank""#), "{anchor}");
                assert!(anchor.contains(r#"rel="noreferrer""#), "{anchor}");
            }
        }

        for anchor in anchors.iter().filter(|a| a.contains(r##"href="#"##)) {
            assert!(!anchor.contains("target="), "{anchor}");
        }
    }

    #[test]
    fn test_mailto_and_scene_present() {
        let html = render(app);
        assert!(html.contains(r#"href="mailto:patelunique1@gmail.com""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("scene-canvas"));
    }
}
