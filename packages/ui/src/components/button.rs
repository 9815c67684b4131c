use dioxus::prelude::*;

use super::{join_classes, EXTERNAL_REL, EXTERNAL_TARGET};

/// What activating a [`Button`] does.
#[derive(Clone, PartialEq)]
pub enum Activation {
    /// Navigate to `href`; `new_tab` opens a new browsing context with the
    /// referrer suppressed.
    Link { href: String, new_tab: bool },
    /// Run a handler; renders a real `<button>`.
    Action(EventHandler<MouseEvent>),
}

impl Activation {
    pub fn link(href: impl Into<String>) -> Self {
        Activation::Link {
            href: href.into(),
            new_tab: false,
        }
    }

    pub fn external(href: impl Into<String>) -> Self {
        Activation::Link {
            href: href.into(),
            new_tab: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    /// Solid, high-contrast fill.
    #[default]
    Primary,
    /// Bordered, transparent in the dark palette.
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Link or action control. Both variants share the same styling; only the
/// element and its event semantics differ.
#[component]
pub fn Button(
    activation: Activation,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let class = join_classes(&["btn", variant.class(), &class]);

    match activation {
        Activation::Link { href, new_tab: true } => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: EXTERNAL_TARGET,
                rel: EXTERNAL_REL,
                {children}
            }
        },
        Activation::Link { href, new_tab: false } => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                {children}
            }
        },
        Activation::Action(on_activate) => rsx! {
            button {
                r#type: "button",
                class: "{class}",
                onclick: move |evt| on_activate.call(evt),
                {children}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn test_internal_link_has_no_target() {
        fn app() -> Element {
            rsx! {
                Button { activation: Activation::link("mailto:someone@example.com"), "Email" }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"href="mailto:someone@example.com""#));
        assert!(!html.contains("target="));
        assert!(html.contains("btn btn-primary"));
    }

    #[test]
    fn test_external_link_policy() {
        fn app() -> Element {
            rsx! {
                Button {
                    activation: Activation::external("https://example.com"),
                    variant: ButtonVariant::Outline,
                    "Out"
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));
        assert!(html.contains("btn btn-outline"));
    }

    #[test]
    fn test_action_renders_button() {
        fn app() -> Element {
            rsx! {
                Button {
                    activation: Activation::Action(EventHandler::new(|_| {})),
                    class: "wide",
                    "Go"
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<button"));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("btn btn-primary wide"));
        assert!(!html.contains("href="));
    }
}
