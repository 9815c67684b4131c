use content::{nav_items, Profile, SectionId};
use dioxus::prelude::*;

use crate::icons::{FaBars, FaMoon, FaSun, FaXmark};
use crate::{use_ui_state, Icon};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Sticky header: monogram, section links, theme toggle, and on narrow
/// screens a menu button that opens a link drawer.
#[component]
pub fn Navbar(profile: Profile) -> Element {
    let mut state = use_ui_state();
    let ui = state();
    let items = nav_items(&profile);
    let open = ui.menu.is_open();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        header {
            class: "navbar",
            nav {
                class: "navbar-inner",
                a {
                    class: "navbar-brand",
                    href: SectionId::Home.href(),
                    div { class: "navbar-monogram", "{profile.initials}" }
                    span { class: "navbar-name", "{profile.name}" }
                }

                // Desktop links
                div {
                    class: "navbar-links",
                    for id in items.iter().copied() {
                        a {
                            key: "{id.anchor()}",
                            class: "navbar-link",
                            href: id.href(),
                            "{id.nav_label()}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "navbar-theme",
                        onclick: move |_| state.write().toggle_theme(),
                        "{ui.theme_toggle_label()}"
                    }
                }

                // Mobile: theme + burger
                div {
                    class: "navbar-mobile",
                    button {
                        r#type: "button",
                        class: "navbar-icon-button",
                        aria_label: "Toggle theme",
                        onclick: move |_| state.write().toggle_theme(),
                        if ui.theme.is_dark() {
                            Icon { icon: FaSun, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaMoon, width: 16, height: 16 }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "navbar-icon-button",
                        aria_label: if open { "Close menu" } else { "Open menu" },
                        aria_expanded: "{open}",
                        onclick: move |_| state.write().toggle_menu(),
                        if open {
                            Icon { icon: FaXmark, width: 18, height: 18 }
                        } else {
                            Icon { icon: FaBars, width: 18, height: 18 }
                        }
                    }
                }
            }

            if open {
                div {
                    class: "navbar-drawer",
                    for id in items.iter().copied() {
                        a {
                            key: "{id.anchor()}",
                            class: "navbar-drawer-link",
                            href: id.href(),
                            onclick: move |_| state.write().select_nav_link(),
                            "{id.nav_label()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Menu, UiState};
    use crate::test_util::{click, click_targets, render};
    use content::PROFILE;
    use std::cell::Cell;

    #[test]
    fn test_closed_menu_has_no_drawer() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(UiState::default()));
            rsx! { Navbar { profile: PROFILE } }
        }
        let html = render(app);
        assert!(html.contains(r##"href="#about""##));
        assert!(html.contains(r##"href="#por""##));
        assert!(html.contains(r##"href="#home""##));
        assert!(!html.contains("navbar-drawer"));
        assert!(html.contains("Open menu"));
        assert!(html.contains(">Light<"));
    }

    #[test]
    fn test_open_menu_renders_drawer() {
        fn app() -> Element {
            use_context_provider(|| {
                Signal::new(UiState {
                    menu: Menu::Open,
                    ..UiState::default()
                })
            });
            rsx! { Navbar { profile: PROFILE } }
        }
        let html = render(app);
        assert!(html.contains("navbar-drawer"));
        assert_eq!(html.matches("navbar-drawer-link").count(), 7);
        assert!(html.contains("Close menu"));
    }

    thread_local! {
        static DRAWER_STATE: Cell<Option<Signal<UiState>>> = const { Cell::new(None) };
    }

    #[test]
    fn test_drawer_link_click_closes_menu() {
        fn app() -> Element {
            let state = use_context_provider(|| {
                Signal::new(UiState {
                    menu: Menu::Open,
                    ..UiState::default()
                })
            });
            DRAWER_STATE.with(|cell| cell.set(Some(state)));
            rsx! { Navbar { profile: PROFILE } }
        }

        let mut dom = VirtualDom::new(app);
        let mutations = dom.rebuild_to_vec();
        // Two theme toggles and the menu button, then one per drawer link
        let targets = click_targets(&mutations);
        assert_eq!(targets.len(), 3 + 7);

        click(&mut dom, targets[targets.len() - 1]);

        let state = DRAWER_STATE.with(|cell| cell.get()).unwrap();
        assert_eq!(dom.in_runtime(|| state.peek().menu), Menu::Closed);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("navbar-drawer"));
        assert!(html.contains("Open menu"));
    }

    #[test]
    fn test_leadership_link_follows_positions() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(UiState::default()));
            rsx! {
                Navbar {
                    profile: Profile { positions: &[], ..PROFILE },
                }
            }
        }
        let html = render(app);
        assert!(!html.contains(r##"href="#por""##));
        assert!(html.contains(r##"href="#contact""##));
    }
}
