//! In-page anchors and the navigation order built on top of them.

use crate::profile::Profile;

/// Every anchorable region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Extras,
    Leadership,
    Contact,
}

impl SectionId {
    /// Fragment identifier used as the element `id`.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Extras => "extras",
            SectionId::Leadership => "por",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Extras => "Highlights",
            SectionId::Leadership => "Leadership",
            SectionId::Contact => "Contact",
        }
    }

    /// Heading rendered by the section wrapper.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Projects => "Featured Projects",
            SectionId::Extras => "Achievements & Certificates",
            other => other.nav_label(),
        }
    }

    /// Small-caps label above the heading.
    pub fn kicker(self) -> Option<&'static str> {
        match self {
            SectionId::Home => None,
            SectionId::About => Some("Overview"),
            SectionId::Skills => Some("Toolbelt"),
            SectionId::Projects => Some("Builds"),
            SectionId::Experience => Some("Work"),
            SectionId::Education => Some("Academics"),
            SectionId::Extras => Some("Highlights"),
            SectionId::Leadership => Some("Positions of Responsibility"),
            SectionId::Contact => Some("Say Hello"),
        }
    }
}

/// Navigation entries in header order. Leadership only appears when the
/// profile has positions to show.
pub fn nav_items(profile: &Profile) -> Vec<SectionId> {
    [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Leadership,
        SectionId::Contact,
    ]
    .into_iter()
    .filter(|id| *id != SectionId::Leadership || profile.has_positions())
    .collect()
}
