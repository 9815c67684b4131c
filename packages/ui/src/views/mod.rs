mod portfolio;
pub use portfolio::Portfolio;

mod sections;
pub use sections::{
    AboutSection, ContactSection, EducationSection, ExperienceSection, ExtrasSection,
    LeadershipSection, ProjectsSection, SkillsSection,
};

mod footer;
pub use footer::Footer;
