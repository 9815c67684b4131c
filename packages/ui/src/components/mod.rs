//! Presentational primitives shared by every section of the page.

mod button;
pub use button::{Activation, Button, ButtonVariant};

mod card;
pub use card::Card;

mod pill;
pub use pill::{Pill, PlatformIcon};

mod skill_link;
pub use skill_link::SkillLink;

mod tag;
pub use tag::{Tag, TagTone};

/// `target` carried by every link that leaves the site.
pub const EXTERNAL_TARGET: &str = "_blank";
/// `rel` carried by every link that leaves the site.
pub const EXTERNAL_REL: &str = "noreferrer";

/// Join a base class with optional extensions, skipping empty entries.
pub(crate) fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::join_classes;

    #[test]
    fn test_join_classes_skips_empty() {
        assert_eq!(join_classes(&["card", ""]), "card");
        assert_eq!(join_classes(&["btn", " btn-primary ", "wide"]), "btn btn-primary wide");
    }
}
