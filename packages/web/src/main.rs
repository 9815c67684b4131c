use content::{SiteConfig, PROFILE};
use dioxus::prelude::*;

use ui::Portfolio;

const FAVICON: Asset = asset!("/assets/favicon.svg");

/// Deployment settings, baked in at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", SiteConfig::filename(), e);
            SiteConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Title { "{PROFILE.name} | Portfolio" }
        document::Link { rel: "icon", href: FAVICON }

        Portfolio { config }
    }
}
