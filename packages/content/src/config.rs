//! # Site configuration (`site.toml`)
//!
//! Deployment knobs that are not part of the profile itself: where the site is
//! served from, which PDF the résumé button fetches and what it is saved as, and
//! the tuning of the background scene.
//!
//! ## Structure
//!
//! ```toml
//! base_url = "/"
//!
//! [resume]
//! path = "Unique_Patel_Resume.pdf"
//! download_name = "Unique_Patel_Resume.pdf"
//!
//! [scene]
//! star_count = 3000
//! star_radius = 80.0
//! star_depth = 50.0
//! auto_rotate_speed = 0.6
//! enable_zoom = false
//! ```
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_RESUME: &str = "Unique_Patel_Resume.pdf";

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path prefix the site is served under, e.g. `/portfolio/` on GitHub Pages.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub resume: ResumeConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Static resource path relative to `base_url`.
    #[serde(default = "default_resume")]
    pub path: String,
    /// Name the downloaded file is saved under, independent of `path`.
    #[serde(default = "default_resume")]
    pub download_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub star_count: usize,
    /// Inner radius of the starfield shell.
    pub star_radius: f64,
    /// Thickness of the starfield shell.
    pub star_depth: f64,
    /// Orbit auto-rotation speed; 2.0 is one revolution every 30 seconds.
    pub auto_rotate_speed: f64,
    pub enable_zoom: bool,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_resume() -> String {
    DEFAULT_RESUME.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resume: ResumeConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            path: default_resume(),
            download_name: default_resume(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 3000,
            star_radius: 80.0,
            star_depth: 50.0,
            auto_rotate_speed: 0.6,
            enable_zoom: false,
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to point the site at a different deployment prefix.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Résumé URL: `base_url` and `resume.path` joined by exactly one slash.
    pub fn resume_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.resume.path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.scene.star_count, 3000);
        assert!(!config.scene.enable_zoom);
    }

    #[test]
    fn test_partial_sections() {
        let config = SiteConfig::from_toml(
            r#"
            base_url = "/portfolio/"

            [scene]
            star_count = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "/portfolio/");
        assert_eq!(config.scene.star_count, 500);
        assert_eq!(config.scene.auto_rotate_speed, 0.6);
        assert_eq!(config.resume.download_name, "Unique_Patel_Resume.pdf");
    }

    #[test]
    fn test_resume_url_joins_once() {
        assert_eq!(SiteConfig::default().resume_url(), "/Unique_Patel_Resume.pdf");
        let pages = SiteConfig::default().with_base_url("/portfolio/");
        assert_eq!(pages.resume_url(), "/portfolio/Unique_Patel_Resume.pdf");
        let bare = SiteConfig::default().with_base_url("/portfolio");
        assert_eq!(bare.resume_url(), "/portfolio/Unique_Patel_Resume.pdf");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SiteConfig::default().with_base_url("/cv/");
        config.resume.path = "files/cv-2025.pdf".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(SiteConfig::from_toml("[scene]\nstar_count = \"many\"").is_err());
    }
}
