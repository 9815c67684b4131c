//! This crate contains all UI for the portfolio page.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod resume;
pub use resume::{download_resume, DownloadError, PlatformHost, ResumeHost, ResumeOutcome};

pub mod scene;
pub use scene::Scene;

mod section;
pub use section::Section;

pub mod state;
pub use state::{Menu, Theme, UiState};

mod theme;
pub use theme::apply_theme;

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

pub mod views;
pub use views::Portfolio;

pub const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

/// Consume the `Signal<UiState>` provided by [`Portfolio`].
pub fn use_ui_state() -> Signal<UiState> {
    use_context::<Signal<UiState>>()
}
