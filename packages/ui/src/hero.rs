use content::{Profile, SectionId, SiteConfig};
use dioxus::prelude::*;

use crate::components::{Activation, Button, ButtonVariant, Pill, PlatformIcon};
use crate::icons::{FaEnvelope, FaFileArrowDown};
use crate::resume::{download_resume, PlatformHost};
use crate::Icon;

/// Name, title, résumé download, email and social pills.
#[component]
pub fn Hero(profile: Profile, config: SiteConfig) -> Element {
    let download = use_callback(move |_: MouseEvent| {
        let config = config.clone();
        spawn(async move {
            download_resume(&PlatformHost::default(), &config).await;
        });
    });

    rsx! {
        section {
            id: SectionId::Home.anchor(),
            class: "hero",
            h1 {
                class: "hero-title fade-up",
                "{profile.name}"
                span { class: "hero-subtitle", "{profile.title}" }
            }

            div {
                class: "hero-actions fade-up fade-up-delayed",
                Button {
                    activation: Activation::Action(download),
                    Icon { icon: FaFileArrowDown, width: 16, height: 16 }
                    " Download Resume"
                }
                Button {
                    activation: Activation::link(profile.mailto()),
                    variant: ButtonVariant::Outline,
                    Icon { icon: FaEnvelope, width: 16, height: 16 }
                    " Email Me"
                }
                for social in profile.socials {
                    Pill {
                        key: "{social.url}",
                        href: "{social.url}",
                        icon: rsx! { PlatformIcon { platform: social.platform } },
                        label: "{social.platform.label()}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{click, click_targets, render};
    use content::PROFILE;

    #[test]
    fn test_hero_contents() {
        fn app() -> Element {
            rsx! { Hero { profile: PROFILE, config: SiteConfig::default() } }
        }
        let html = render(app);
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains("<h1"));
        assert!(html.contains("Unique Patel"));
        assert!(html.contains(r#"href="mailto:patelunique1@gmail.com""#));
        assert!(html.contains("Download Resume"));
        assert_eq!(html.matches("class=\"pill\"").count(), 4);
        for label in ["GitHub", "LinkedIn", "LeetCode", "Codeforces"] {
            assert!(html.contains(label));
        }
    }

    #[test]
    fn test_download_button_is_the_only_action() {
        fn app() -> Element {
            rsx! { Hero { profile: PROFILE, config: SiteConfig::default() } }
        }
        let mut dom = VirtualDom::new(app);
        let targets = click_targets(&dom.rebuild_to_vec());
        assert_eq!(targets.len(), 1);

        click(&mut dom, targets[0]);
        click(&mut dom, targets[0]);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Download Resume"));
        assert_eq!(html.matches("<button").count(), 1);
    }
}
