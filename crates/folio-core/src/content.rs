//! Compiled-in page content.
//!
//! Every catalog here is fixed at build time: the page never mutates,
//! fetches, or persists content. Records are plain `'static` data so the
//! rest of the crate can hand out references without cloning.

/// A project card in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Unique, and the catalog is ordered by it.
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_ref: &'static str,
    pub technologies: &'static [&'static str],
    pub source_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
}

/// The project catalog, in display order.
pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with product management, shopping cart, and payment integration using Stripe.",
        image_ref: "https://images.pexels.com/photos/5632402/pexels-photo-5632402.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["React", "Node.js", "MongoDB", "Stripe API"],
        source_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    ProjectRecord {
        id: 2,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, drag-and-drop interface, and team collaboration features.",
        image_ref: "https://images.pexels.com/photos/6802042/pexels-photo-6802042.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["Vue.js", "Firebase", "Tailwind CSS"],
        source_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    ProjectRecord {
        id: 3,
        title: "Weather Dashboard",
        description: "An interactive weather dashboard with location detection, forecasts, and historical weather data visualization.",
        image_ref: "https://images.pexels.com/photos/1261728/pexels-photo-1261728.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["JavaScript", "Chart.js", "Weather API"],
        source_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    ProjectRecord {
        id: 4,
        title: "Fitness Tracker",
        description: "A mobile-responsive fitness tracking application that allows users to record workouts and track progress over time.",
        image_ref: "https://images.pexels.com/photos/4482936/pexels-photo-4482936.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["React Native", "Redux", "Node.js", "MongoDB"],
        source_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    ProjectRecord {
        id: 5,
        title: "Social Media Dashboard",
        description: "A dashboard that aggregates and displays analytics from multiple social media platforms in a unified interface.",
        image_ref: "https://images.pexels.com/photos/3194524/pexels-photo-3194524.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["React", "D3.js", "Social Media APIs"],
        source_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    ProjectRecord {
        id: 6,
        title: "AI Content Generator",
        description: "A web application that uses AI to generate various types of content, including articles, product descriptions, and social media posts.",
        image_ref: "https://images.pexels.com/photos/8438982/pexels-photo-8438982.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        technologies: &["TypeScript", "OpenAI API", "Next.js"],
        source_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
];

/// A single skill with its 1-10 proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    pub level: u8,
}

/// A named group of skills, rendered as one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [SkillRecord],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            SkillRecord { name: "React", level: 9 },
            SkillRecord { name: "JavaScript", level: 9 },
            SkillRecord { name: "TypeScript", level: 8 },
            SkillRecord { name: "HTML/CSS", level: 9 },
            SkillRecord { name: "Vue.js", level: 7 },
            SkillRecord { name: "Next.js", level: 8 },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            SkillRecord { name: "Node.js", level: 8 },
            SkillRecord { name: "Express", level: 8 },
            SkillRecord { name: "Python", level: 7 },
            SkillRecord { name: "Django", level: 6 },
            SkillRecord { name: "GraphQL", level: 7 },
            SkillRecord { name: "RESTful APIs", level: 9 },
        ],
    },
    SkillCategory {
        name: "Other",
        skills: &[
            SkillRecord { name: "Git", level: 9 },
            SkillRecord { name: "Docker", level: 7 },
            SkillRecord { name: "AWS", level: 7 },
            SkillRecord { name: "CI/CD", level: 8 },
            SkillRecord { name: "UI/UX Design", level: 7 },
            SkillRecord { name: "Agile/Scrum", level: 8 },
        ],
    },
];

/// One work history entry on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCES: &[ExperienceRecord] = &[
    ExperienceRecord {
        title: "Senior Software Engineer",
        company: "Tech Innovations Inc.",
        duration: "Jan 2022 - Present",
        highlights: &[
            "Led a team of 5 developers to build and maintain a high-traffic e-commerce platform",
            "Architected and implemented a microservices infrastructure that improved system reliability by 40%",
            "Collaborated with design and product teams to deliver features that increased user engagement by 25%",
            "Mentored junior developers and conducted code reviews to ensure high quality standards",
        ],
        technologies: &["React", "Node.js", "AWS", "TypeScript", "Docker"],
    },
    ExperienceRecord {
        title: "Full Stack Developer",
        company: "Digital Solutions LLC",
        duration: "Mar 2019 - Dec 2021",
        highlights: &[
            "Built responsive web applications using modern JavaScript frameworks",
            "Designed and implemented RESTful APIs for mobile and web clients",
            "Optimized database queries that reduced page load times by 60%",
            "Integrated third-party services and APIs for payment processing and data analytics",
        ],
        technologies: &["Vue.js", "Express", "MongoDB", "Python", "GraphQL"],
    },
    ExperienceRecord {
        title: "Front-End Developer",
        company: "WebCraft Studios",
        duration: "Jun 2017 - Feb 2019",
        highlights: &[
            "Developed user interfaces for various client projects using HTML, CSS, and JavaScript",
            "Collaborated with designers to transform mockups into functional web pages",
            "Implemented responsive designs that worked across desktop and mobile devices",
            "Conducted cross-browser testing and fixed compatibility issues",
        ],
        technologies: &["JavaScript", "CSS", "HTML", "jQuery", "Sass"],
    },
];

/// An in-page anchor link in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

/// An external profile link shown in the hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Short glyph used in place of an icon font.
    pub glyph: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com", glyph: "GH" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com", glyph: "in" },
    SocialLink { label: "Twitter", href: "https://twitter.com", glyph: "tw" },
    SocialLink { label: "Email", href: "mailto:contact@example.com", glyph: "@" },
];

/// A contact method card next to the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub title: &'static str,
    pub detail: &'static str,
    pub link: &'static str,
    pub glyph: &'static str,
}

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        title: "Email",
        detail: "ashray@example.com",
        link: "mailto:ashray@example.com",
        glyph: "\u{2709}",
    },
    ContactDetail {
        title: "Phone",
        detail: "+1 (123) 456-7890",
        link: "tel:+11234567890",
        glyph: "\u{260e}",
    },
    ContactDetail {
        title: "Location",
        detail: "San Francisco, CA",
        link: "https://maps.google.com",
        glyph: "\u{2316}",
    },
];

/// Name shown in the hero and footer.
pub const OWNER_NAME: &str = "Ashray Chowdhry";

/// Short monogram used as the navbar brand.
pub const OWNER_MONOGRAM: &str = "AC";

pub const HERO_GREETING: &str = "Hi, my name is";

pub const HERO_TAGLINE: &str = "I build exceptional and accessible digital experiences for the web. \
Focused on creating products that are not only functional but delightful to use.";

/// Phrases the hero headline cycles through.
pub static HERO_ROLES: &[&str] = &[
    "Software Engineer",
    "Full Stack Developer",
    "UI/UX Enthusiast",
    "Problem Solver",
];

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Ashray, an engineer passionate about emerging technologies like AI/ML, blockchain, and cloud computing. \
I've been working in the industry for 5 years, and have been creating tech solutions for over a decade. \
I have a B.S. in Computer Science from Georgia Tech, concentrating in Artificial Intelligence and \
Database/Networking Design.",
    "Over my time as a professional engineer, I've worked on a variety of projects, from building scalable \
cloud solutions, to creating data pipelines for AI/ML models, to developing open source blockchain technology \
and decentralized applications. Most recently, I am an active maintainer of the xrpl.js and xrpl.py libraries, \
which are the leading libraries for interacting with the XRP Ledger blockchain, as well as the official XRPL \
Livenet Explorer.",
    "Outside of work, you can find me on a tennis court, playing the guitar, building hobbyist robotics \
projects, or exploring new hiking trails.",
];

/// An education entry on the about card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationRecord {
    pub degree: &'static str,
    pub focus: &'static str,
    pub school: &'static str,
}

pub static EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        degree: "Bachelor of Science, Computer Science",
        focus: "Conc. in AI, Database/Networking",
        school: "Georgia Institute of Technology",
    },
    EducationRecord {
        degree: "Minor, Finance",
        focus: "",
        school: "Georgia Institute of Technology",
    },
];

pub static INTERESTS: &[&str] = &[
    "Artificial Intelligence",
    "Blockchain",
    "Cloud Architecture",
    "Open Source",
    "Full Stack",
    "Data Analytics",
];

pub const FOOTER_TAGLINE: &str = "Building beautiful digital experiences.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_skill_levels_within_authoring_range() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(
                    (1..=10).contains(&skill.level),
                    "{} has out-of-range level {}",
                    skill.name,
                    skill.level
                );
            }
        }
    }

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        assert_eq!(NAV_LINKS.len(), 6);
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn test_hero_roles_non_empty() {
        assert!(!HERO_ROLES.is_empty());
        assert!(HERO_ROLES.iter().all(|r| !r.is_empty()));
    }
}
