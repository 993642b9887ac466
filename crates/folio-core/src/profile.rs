//! Hand-authored portfolio content.
//!
//! Everything in this module is a compile-time constant: project write-ups,
//! the experience timeline, skill levels, social links. Levels and stats
//! are author-supplied numbers, not measured ones. Records carry string
//! identifiers used only as rendering keys and filter categories.

/// Sentinel category that bypasses filtering.
pub const ALL_CATEGORY: &str = "all";

pub const OWNER_NAME: &str = "Volodymyr Shamanov";
pub const OWNER_INITIALS: &str = "VS";
pub const TAGLINE: &str = "Senior Full-Stack Developer | Laravel & Vue.js";
pub const HERO_INTRO: &str = "Senior Full-Stack Developer with rich experience in Laravel, PHP, \
     Vue.js, and React. I help businesses build scalable, high-performance web applications \
     that drive results.";

pub const CONTACT_EMAIL: &str = "volodymyrshamanov2@gmail.com";
pub const RESUME_EMAIL: &str = "volodymyr.shamanov@email.com";
pub const PHONE_DISPLAY: &str = "+380 (44) 256-2975";
pub const PHONE_URI: &str = "tel:+380442562975";
pub const LOCATION: &str = "Kyiv, Ukraine";

pub const GITHUB_URL: &str = "https://github.com/volodymyr-shamanov";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/volodymyr-shamanov";

pub const RESUME_REQUEST_SUBJECT: &str = "CV Request - Volodymyr Shamanov";
pub const RESUME_REQUEST_BODY: &str =
    "Hello Volodymyr,\n\nI would like to request your CV/resume.\n\nThank you!";

/// A category filter button: stable id plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub stars: u32,
    pub forks: u32,
    pub commits: u32,
}

/// A portfolio project card plus its expanded detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub features: &'static [&'static str],
    pub stats: ProjectStats,
    pub completed: &'static str,
}

impl Project {
    /// URI for the "Code" action. Repositories without a public mirror
    /// stage a source-code request email instead.
    pub fn source_link(&self) -> String {
        match self.github_url {
            Some(url) => url.to_string(),
            None => {
                let subject = format!("Source Code Request - {}", self.title);
                let body = format!(
                    "Hello Volodymyr,\n\nI'm interested in viewing the source code for \
                     {}.\n\nThank you!",
                    self.title
                );
                crate::contact::mailto_uri(RESUME_EMAIL, &subject, &body)
            }
        }
    }
}

pub const PROJECT_CATEGORIES: &[Category] = &[
    Category { id: ALL_CATEGORY, label: "All Projects" },
    Category { id: "fullstack", label: "Full-Stack Development" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "stressballs",
        title: "StressBallsUK.com",
        description: "Full-stack e-commerce platform for Europe's leading stress ball \
             supplier. Built with Laravel backend and Vue.js frontend, handling custom \
             product configuration and order management.",
        full_description: "Developed a comprehensive e-commerce platform for \
             StressBallsUK.com using Laravel and Vue.js. The system handles 500+ product \
             variations, custom printing workflows, real-time inventory management, and \
             customer order processing. Implemented robust backend APIs, secure payment \
             integration, and responsive frontend interfaces that deliver exceptional \
             user experience across all devices.",
        technologies: &["Laravel", "Vue.js", "MySQL", "PHP", "JavaScript", "Stripe API"],
        category: "fullstack",
        live_url: Some("https://www.stressballsuk.com/"),
        github_url: None,
        features: &[
            "Custom product configuration system",
            "Real-time inventory management",
            "Secure payment processing integration",
            "Admin dashboard for order management",
            "Customer review and rating system",
            "Responsive design for all devices",
            "RESTful API architecture",
            "Advanced search and filtering",
        ],
        stats: ProjectStats { stars: 500, forks: 94, commits: 1250 },
        completed: "2024",
    },
    Project {
        id: "overmode",
        title: "Overmode.com",
        description: "Fashion e-commerce aggregation platform built with modern full-stack \
             technologies. Features advanced search, trend analytics, and millions of \
             product integrations.",
        full_description: "Engineered a sophisticated fashion e-commerce platform using \
             Laravel for robust backend services and Vue.js for dynamic frontend \
             interactions. Implemented complex product aggregation systems, Google Trends \
             API integration, advanced search algorithms, and real-time data \
             synchronization across multiple fashion retailers and brands.",
        technologies: &["Laravel", "Vue.js", "PostgreSQL", "Redis", "Google Trends API", "Elasticsearch"],
        category: "fullstack",
        live_url: Some("https://overmode.com/"),
        github_url: None,
        features: &[
            "Product aggregation from multiple sources",
            "Google Trends integration for fashion analytics",
            "Advanced search with filters and sorting",
            "Real-time price comparison engine",
            "User preference learning algorithms",
            "Mobile-first responsive design",
            "High-performance caching strategies",
            "Scalable microservices architecture",
        ],
        stats: ProjectStats { stars: 850, forks: 320, commits: 2100 },
        completed: "2024",
    },
    Project {
        id: "exportarts",
        title: "ExportArts.io",
        description: "Award-winning agency website with performance optimization, SEO \
             excellence, and modern design. Built to showcase digital marketing expertise \
             and drive client conversions.",
        full_description: "Developed a high-performance agency website for ExportArts.io \
             using Laravel backend with Vue.js frontend components. Focused on exceptional \
             page speed, SEO optimization, conversion tracking, and user experience. The \
             site showcases the agency's award-winning work while serving as a lead \
             generation platform that has contributed to their recognition as a top 10 \
             German digital agency.",
        technologies: &["Laravel", "Vue.js", "MySQL", "SEO Optimization", "Performance Tuning", "Analytics"],
        category: "fullstack",
        live_url: Some("https://www.exportarts.io"),
        github_url: None,
        features: &[
            "Performance-optimized architecture",
            "Advanced SEO implementation",
            "Conversion tracking and analytics",
            "Multi-language support",
            "Content management system",
            "Client portfolio showcase",
            "Contact form with automation",
            "Google PageSpeed score 95+",
        ],
        stats: ProjectStats { stars: 300, forks: 150, commits: 980 },
        completed: "2025",
    },
];

/// A single technology with an author-assessed proficiency level (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        id: "backend",
        label: "Backend",
        skills: &[
            Skill { name: "Laravel", level: 95, category: "backend" },
            Skill { name: "PHP", level: 92, category: "backend" },
            Skill { name: "Node.js", level: 88, category: "backend" },
            Skill { name: "Express.js", level: 85, category: "backend" },
            Skill { name: "NestJS", level: 82, category: "backend" },
            Skill { name: "Symfony", level: 80, category: "backend" },
            Skill { name: "CodeIgniter", level: 78, category: "backend" },
        ],
    },
    SkillGroup {
        id: "frontend",
        label: "Frontend",
        skills: &[
            Skill { name: "Vue.js", level: 95, category: "frontend" },
            Skill { name: "Nuxt.js", level: 90, category: "frontend" },
            Skill { name: "React.js", level: 88, category: "frontend" },
            Skill { name: "Next.js", level: 85, category: "frontend" },
            Skill { name: "JavaScript", level: 92, category: "frontend" },
            Skill { name: "TypeScript", level: 87, category: "frontend" },
            Skill { name: "Quasar", level: 83, category: "frontend" },
        ],
    },
    SkillGroup {
        id: "database",
        label: "Database",
        skills: &[
            Skill { name: "MySQL", level: 93, category: "database" },
            Skill { name: "PostgreSQL", level: 90, category: "database" },
            Skill { name: "MongoDB", level: 85, category: "database" },
            Skill { name: "MariaDB", level: 88, category: "database" },
            Skill { name: "SQLite", level: 82, category: "database" },
        ],
    },
    SkillGroup {
        id: "cloud",
        label: "Cloud & DevOps",
        skills: &[
            Skill { name: "AWS", level: 85, category: "cloud" },
            Skill { name: "Azure", level: 82, category: "cloud" },
            Skill { name: "GCP", level: 80, category: "cloud" },
            Skill { name: "Docker", level: 88, category: "cloud" },
            Skill { name: "CI/CD", level: 85, category: "cloud" },
            Skill { name: "Sentry", level: 78, category: "cloud" },
        ],
    },
];

pub const SKILL_FILTERS: &[Category] = &[
    Category { id: ALL_CATEGORY, label: "All" },
    Category { id: "backend", label: "Backend" },
    Category { id: "frontend", label: "Frontend" },
    Category { id: "database", label: "Database" },
    Category { id: "cloud", label: "Cloud & DevOps" },
];

/// An entry on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: &[ExperienceItem] = &[
    ExperienceItem {
        id: "cf-digital",
        company: "CF.Digital",
        position: "Frontend Developer",
        location: "Kyiv, Ukraine",
        start: "2018",
        end: "2019",
        highlights: &[
            "Built and optimized responsive, user-friendly web applications using Vue.js",
            "Integrated APIs with dynamic UI components for seamless user experiences",
            "Collaborated with backend teams to implement efficient data flow",
            "Delivered pixel-perfect implementations from design mockups",
            "Optimized application performance and implemented best practices",
        ],
        technologies: &["Vue.js", "JavaScript", "HTML5", "CSS3", "API Integration"],
    },
    ExperienceItem {
        id: "freelance",
        company: "Freelance Projects",
        position: "Senior Full-Stack Developer",
        location: "Remote",
        start: "2019",
        end: "Present",
        highlights: &[
            "Developed scalable web applications using Laravel and Vue.js for various clients",
            "Designed RESTful APIs and optimized database structures for high performance",
            "Implemented robust authentication systems and security best practices",
            "Built custom SaaS platforms and e-commerce solutions from scratch",
            "Mentored junior developers and led development teams on complex projects",
        ],
        technologies: &["Laravel", "Vue.js", "React", "PHP", "MySQL", "PostgreSQL", "Docker", "AWS"],
    },
    ExperienceItem {
        id: "recent",
        company: "Recent Projects Portfolio",
        position: "Technical Lead & Developer",
        location: "Global",
        start: "2020",
        end: "Present",
        highlights: &[
            "StressBallsUK.com: Developed e-commerce platform with custom product configuration",
            "Overmode.com: Built fashion aggregation platform with advanced search capabilities",
            "ExportArts.io: Created award-winning agency website with performance optimization",
            "Implemented scalable architectures handling high traffic and complex business logic",
            "Delivered exceptional user experiences across multiple industries and markets",
        ],
        technologies: &["Laravel", "Vue.js", "MySQL", "E-commerce", "Performance Optimization", "Cloud Deployment"],
    },
];

/// A value card in the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[ValueCard] = &[
    ValueCard {
        title: "Innovation",
        description: "Always exploring new technologies and methodologies to solve complex problems.",
    },
    ValueCard {
        title: "Quality",
        description: "Committed to writing clean, maintainable code that stands the test of time.",
    },
    ValueCard {
        title: "Collaboration",
        description: "Believe in the power of teamwork and clear communication to achieve great results.",
    },
    ValueCard {
        title: "Passion",
        description: "Genuinely love what I do and it shows in every project I work on.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PERSONAL_STATS: &[Stat] = &[
    Stat { label: "Years of Experience", value: "5+" },
    Stat { label: "Projects Completed", value: "50+" },
    Stat { label: "Technologies Mastered", value: "15+" },
    Stat { label: "Happy Clients", value: "25+" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a Senior Full-Stack Developer with rich experience in Laravel, PHP, Vue.js, and \
     React, helping businesses build scalable, high-performance web applications. I have \
     successfully developed and maintained complex systems, ensuring they are efficient, \
     secure, and deliver seamless user experiences.",
    "For the backend, I design RESTful APIs, optimized databases, and implement robust \
     authentication systems using Laravel and MySQL, enabling fast and reliable \
     application performance.",
    "On the frontend, I build dynamic, responsive interfaces with Vue.js and React, \
     focused on clean architecture and maintainable component design.",
];

/// Visible projects for a category selection; `"all"` bypasses the filter.
pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.category == category)
        .collect()
}

/// Visible skills, flattened across groups, for a category selection.
pub fn filter_skills(category: &str) -> Vec<&'static Skill> {
    SKILL_GROUPS
        .iter()
        .flat_map(|g| g.skills.iter())
        .filter(|s| category == ALL_CATEGORY || s.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_link_prefers_public_repository() {
        let project = Project {
            github_url: Some("https://github.com/volodymyr-shamanov/demo"),
            ..PROJECTS[0]
        };
        assert_eq!(
            project.source_link(),
            "https://github.com/volodymyr-shamanov/demo"
        );
    }

    #[test]
    fn test_source_link_falls_back_to_request_email() {
        let project = Project {
            github_url: None,
            ..PROJECTS[0]
        };
        let uri = project.source_link();
        assert!(uri.starts_with(&format!("mailto:{}", RESUME_EMAIL)));
        assert!(uri.contains("Source%20Code%20Request"));
        assert!(uri.contains("StressBallsUK"));
    }

    #[test]
    fn test_all_sentinel_returns_full_project_set() {
        assert_eq!(filter_projects(ALL_CATEGORY).len(), PROJECTS.len());
    }

    #[test]
    fn test_exact_category_match() {
        let fullstack = filter_projects("fullstack");
        assert_eq!(fullstack.len(), PROJECTS.len());
        assert!(fullstack.iter().all(|p| p.category == "fullstack"));
    }

    #[test]
    fn test_zero_match_category_is_empty_not_an_error() {
        assert!(filter_projects("mobile").is_empty());
        assert!(filter_skills("hardware").is_empty());
    }

    #[test]
    fn test_skill_filter_flattens_all_groups() {
        let total: usize = SKILL_GROUPS.iter().map(|g| g.skills.len()).sum();
        assert_eq!(filter_skills(ALL_CATEGORY).len(), total);
    }

    #[test]
    fn test_skill_filter_selects_single_group() {
        let backend = filter_skills("backend");
        assert_eq!(backend.len(), 7);
        assert!(backend.iter().all(|s| s.category == "backend"));
    }

    #[test]
    fn test_skill_group_ids_match_member_categories() {
        for group in SKILL_GROUPS {
            assert!(group.skills.iter().all(|s| s.category == group.id));
        }
    }

    #[test]
    fn test_levels_are_percentages() {
        for group in SKILL_GROUPS {
            assert!(group.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_every_filter_category_exists_in_data() {
        for cat in SKILL_FILTERS.iter().filter(|c| c.id != ALL_CATEGORY) {
            assert!(
                !filter_skills(cat.id).is_empty(),
                "filter {} matches nothing",
                cat.id
            );
        }
    }
}
