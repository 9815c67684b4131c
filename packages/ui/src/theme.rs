use dioxus::prelude::*;

use crate::state::{Theme, DARK_CLASS};

/// Add or remove the dark-palette class on `<html>`.
pub fn apply_theme(theme: Theme) {
    tracing::debug!("Applying {theme:?} theme");
    document::eval(&theme_script(theme));
}

fn theme_script(theme: Theme) -> String {
    format!(
        "document.documentElement.classList.toggle('{DARK_CLASS}', {});",
        theme.is_dark()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_script_toggles_single_class() {
        assert_eq!(
            theme_script(Theme::Dark),
            "document.documentElement.classList.toggle('dark', true);"
        );
        assert_eq!(
            theme_script(Theme::Light),
            "document.documentElement.classList.toggle('dark', false);"
        );
    }
}
