pub mod config;
pub mod profile;
pub mod sections;

pub use config::{ResumeConfig, SceneConfig, SiteConfig};
pub use profile::{
    Education, Experience, Platform, Position, Profile, Project, Skill, SocialLink, PROFILE,
};
pub use sections::{nav_items, SectionId};
