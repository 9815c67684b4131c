//! # Profile content: the compiled-in data table
//!
//! Everything the portfolio page says about its owner lives in [`PROFILE`], a
//! `static` literal assembled at compile time. Nothing here is loaded, parsed or
//! mutated at runtime; the UI only ever walks it read-only.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | The whole record: identity, socials, skills, interests, experience, education, projects, achievements, certificates and optional positions of responsibility. |
//! | [`SocialLink`] | One outbound profile URL keyed by [`Platform`]. |
//! | [`Skill`] | A skill name with an optional link to its official documentation. |
//! | [`Experience`] / [`Education`] / [`Project`] / [`Position`] | One card each in their respective sections. |
//!
//! Empty slices and duplicate names are harmless: the UI simply renders fewer
//! (or repeated) cards.

/// External profile platforms linked from the hero and contact sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    GitHub,
    LinkedIn,
    LeetCode,
    Codeforces,
}

impl Platform {
    /// Human-facing label shown next to the platform icon.
    pub fn label(self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::LinkedIn => "LinkedIn",
            Platform::LeetCode => "LeetCode",
            Platform::Codeforces => "Codeforces",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub platform: Platform,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Official documentation for the skill, if any.
    pub docs_url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub score: &'static str,
    pub period: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub stack: &'static [&'static str],
    pub description: &'static str,
    pub href: &'static str,
}

/// A position of responsibility (club, campus programme, ...).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub org: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    /// Monogram shown in the navigation bar.
    pub initials: &'static str,
    pub email: &'static str,
    pub about: &'static str,
    pub socials: &'static [SocialLink],
    pub skills: &'static [Skill],
    pub interests: &'static [&'static str],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub achievements: &'static [&'static str],
    pub certificates: &'static [&'static str],
    /// Empty when the profile has no leadership section.
    pub positions: &'static [Position],
}

impl Profile {
    /// URL for a platform, or `None` when the profile does not link it.
    pub fn social(&self, platform: Platform) -> Option<&'static str> {
        self.socials
            .iter()
            .find(|s| s.platform == platform)
            .map(|s| s.url)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn has_positions(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Every URL in the table that leaves the site: socials, skill docs and
    /// project repositories, in page order.
    pub fn outbound_links(&self) -> impl Iterator<Item = &'static str> + '_ {
        let socials = self.socials.iter().map(|s| s.url);
        let docs = self.skills.iter().filter_map(|s| s.docs_url);
        let projects = self.projects.iter().map(|p| p.href);
        socials.chain(docs).chain(projects)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Unique Patel",
    title: "M.Tech (ICT) – Software Systems",
    initials: "UP",
    email: "patelunique1@gmail.com",
    about: "I’m an M.Tech student in ICT - Software Systems at Dhirubhai Ambani University, \
            Gandhinagar with a B.E. in Computer Science from The Maharaja Sayajirao University \
            of Baroda, Vadodara. Interests include Full Stack Development, GenAI and Large \
            Language Models that are transforming how code and intelligence connect. I’m drawn \
            to challenges that resist simple solutions, from competitive programming puzzles to \
            hands-on exploration with emerging tools. Always looking for opportunities where \
            software, scale and imagination come together to build what’s next.",
    socials: &[
        SocialLink {
            platform: Platform::GitHub,
            url: "https://github.com/xuniquepatel",
        },
        SocialLink {
            platform: Platform::LinkedIn,
            url: "https://www.linkedin.com/in/uniquepatel",
        },
        SocialLink {
            platform: Platform::LeetCode,
            url: "https://leetcode.com/patelunique",
        },
        SocialLink {
            platform: Platform::Codeforces,
            url: "https://codeforces.com/profile/patelunique1",
        },
    ],
    skills: &[
        Skill { name: "C++", docs_url: Some("https://en.cppreference.com/w/") },
        Skill { name: "JavaScript", docs_url: Some("https://developer.mozilla.org/docs/Web/JavaScript") },
        Skill { name: "Python", docs_url: Some("https://docs.python.org/3/") },
        Skill { name: "SQL", docs_url: Some("https://www.postgresql.org/docs/current/sql.html") },
        Skill { name: "React.js", docs_url: Some("https://react.dev/") },
        Skill { name: "Node.js", docs_url: Some("https://nodejs.org/en/docs") },
        Skill { name: "Express.js", docs_url: Some("https://expressjs.com/") },
        Skill { name: "Bootstrap 5", docs_url: Some("https://getbootstrap.com/docs/5.3/getting-started/introduction/") },
        Skill { name: "LangChain", docs_url: Some("https://js.langchain.com/docs/") },
        Skill { name: "Git", docs_url: Some("https://git-scm.com/doc") },
        Skill { name: "Postman", docs_url: Some("https://learning.postman.com/docs/") },
        Skill { name: "VS Code", docs_url: Some("https://code.visualstudio.com/docs") },
        Skill { name: "MySQL", docs_url: Some("https://dev.mysql.com/doc/") },
        Skill { name: "MongoDB", docs_url: Some("https://www.mongodb.com/docs/") },
        Skill { name: "Firebase", docs_url: Some("https://firebase.google.com/docs") },
    ],
    interests: &[
        "Full-Stack Development",
        "Competitive Programming",
        "System Design",
        "Generative AI / LLMs",
    ],
    experience: &[Experience {
        company: "ConfidoSoft Solutions Pvt. Ltd.",
        role: "Software Developer Intern",
        period: "Dec 2023 – Jun 2024",
        location: "Vadodara, Gujarat",
        points: &[
            "Built and refined responsive UI flows in Angular + Bootstrap for a real-time hospitality accounting platform (Innrly).",
            "Implemented role-based access controls to secure sensitive actions and simplify user pathways.",
            "Reduced UI friction by fixing front-end bugs, tightening validation and improving empty/error states.",
        ],
    }],
    education: &[
        Education {
            school: "Dhirubhai Ambani University",
            degree: "M.Tech (ICT) – Software Systems",
            score: "CPI: 8.11",
            period: "2024 – Present",
            location: "Gandhinagar, Gujarat",
        },
        Education {
            school: "The Maharaja Sayajirao University of Baroda",
            degree: "B.E. in Computer Science and Engineering",
            score: "CGPA: 8.95",
            period: "2020 – 2024",
            location: "Vadodara, Gujarat",
        },
    ],
    projects: &[
        Project {
            name: "NeuroCanvas",
            stack: &[
                "React.js",
                "Node.js",
                "Express.js",
                "PostgreSQL",
                "Cloudinary",
                "Clerk",
                "Google Gemini API",
            ],
            description: "A subscription-ready, AI-assisted workspace that unifies content and image \
                          utilities into one simple dashboard. Generate blog titles, draft articles, \
                          create images and remove backgrounds/objects without jumping across tools. \
                          Built with clean navigation and room to grow premium features.",
            href: "https://github.com/xuniquepatel/NeuroCanvas",
        },
        Project {
            name: "TaskSentinel",
            stack: &["Python", "Flask", "Redis", "RESTful API"],
            description: "A compact, fault-tolerant task-queue service with worker heartbeats, retries \
                          with backoff and a live dashboard for visibility. Designed for graceful \
                          recovery and smooth back-pressure using Redis as the coordination layer, so \
                          work gets done even when processes wobble.",
            href: "https://github.com/xuniquepatel/TaskSentinel",
        },
    ],
    achievements: &[
        "INSPIRE Scholarship by DST (Top 1% in Class XII)",
        "Top-ranked Geek at MSU Baroda on GeeksforGeeks",
        "Secured a 1400+ competitive-programming rating across LeetCode, CodeChef and GFG",
    ],
    certificates: &[
        "LLM Engineering: Master AI, LLMs & Agents – Udemy (2025)",
        "AWS Cloud Practitioner Essentials – AWS (2022)",
        "Crash Course on Python – Google/Coursera (2022)",
        "Google Cloud Essentials – Google Cloud (2021)",
    ],
    positions: &[Position {
        org: "Internshala",
        role: "Internshala Student Partner (ISP 31)",
        period: "Oct 2022 – Nov 2022",
        details: &[
            "Led campus outreach for Internshala ISP-31 at MSU Baroda.",
            "Promoted the ‘Light a Diya’ campaign, improved sign-up conversions with clear FAQs.",
            "Recognized with a Victory Certificate for measurable participation and program visibility.",
        ],
    }],
};
