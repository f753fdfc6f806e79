//! Static content of the site.
//!
//! Everything rendered on the page comes from [`SITE`]; build-time settings
//! come from [`BUILD`]. Both are plain data, read by the views through the
//! mapping functions in [`crate::portfolio`].

use std::fmt;

use chrono::{DateTime, Datelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: u16,
    pub month: u8,
}

impl YearMonth {
    pub const fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match MONTHS.get(usize::from(self.month).wrapping_sub(1)) {
            Some(name) => write!(f, "{} {}", name, self.year),
            None => write!(f, "{}", self.year),
        }
    }
}

/// A date range; `end: None` means the period is ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: YearMonth,
    pub end: Option<YearMonth>,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) if end == self.start => write!(f, "{}", self.start),
            Some(end) => write!(f, "{} - {}", self.start, end),
            None => write!(f, "Since {}", self.start),
        }
    }
}

/// Icon font for [`SocialNetwork::icon_class`], linked from the document head.
pub const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";

/// Shown for projects without a screenshot.
pub const PROJECT_PLACEHOLDER_IMAGE: &str = "/images/project-placeholder.svg";

pub const FAVICON: &str = "/favicon.svg";

/// Web pages open in a new tab; `mailto:` and `tel:` hand off in place.
pub fn opens_in_new_tab(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
}

impl SocialNetwork {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::GitHub => "devicon-github-original",
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::Twitter => "devicon-twitter-original",
            Self::Instagram => "devicon-instagram-plain",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Skills {
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub infrastructure: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub languages: &'static [Language],
    pub soft_skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: Option<&'static str>,
    pub period: Period,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: Option<&'static str>,
    pub period: Period,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub image: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

impl Project {
    pub fn image_src(&self) -> &'static str {
        self.image.unwrap_or(PROJECT_PLACEHOLDER_IMAGE)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct Seo {
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub image: &'static str,
    pub url: &'static str,
    pub twitter: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub maps_url: &'static str,
    pub age: &'static str,
    pub availability: &'static str,
    pub social: &'static [SocialLink],
    pub nav_links: &'static [NavLink],
    pub skills: Skills,
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub certifications: &'static [Certification],
    pub hobbies: &'static [&'static str],
    pub seo: Seo,
}

impl SiteConfig {
    /// Section ids in page order, as used for anchors and scroll-spy.
    pub fn section_ids(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .map(|link| link.section.to_string())
            .collect()
    }

    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    /// `tel:` target with all whitespace stripped.
    pub fn phone_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        format!("tel:{}", digits)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Values resolved when the crate is compiled (see `build.rs`).
#[derive(Debug, Clone, Copy)]
pub struct BuildEnv {
    pub title: &'static str,
    pub base_path: &'static str,
    pub analytics_id: Option<&'static str>,
    pub build_time: &'static str,
}

impl BuildEnv {
    /// Router base; the root path mounts without a prefix.
    pub fn router_base(&self) -> &'static str {
        self.base_path.trim_end_matches('/')
    }

    pub fn build_year(&self) -> Option<i32> {
        DateTime::parse_from_rfc3339(self.build_time)
            .ok()
            .map(|dt| dt.year())
    }

    pub fn analytics_id(&self) -> Option<&'static str> {
        self.analytics_id.filter(|id| !id.trim().is_empty())
    }
}

pub const BUILD: BuildEnv = BuildEnv {
    title: env!("SITE_TITLE"),
    base_path: env!("SITE_BASE_PATH"),
    analytics_id: option_env!("SITE_ANALYTICS_ID"),
    build_time: env!("BUILD_TIME"),
};

pub static SITE: SiteConfig = SiteConfig {
    name: "Ahmed Aymane Harty",
    title: "Junior Full-Stack Web Developer",
    description: "Junior full-stack web developer who enjoys building fast, reliable web solutions on both the front end and the back end, using modern tooling to meet real business needs.",
    email: "aymaneharty@gmail.com",
    phone: "+212 648-307515",
    location: "Benslimane, Morocco",
    maps_url: "https://www.google.com/maps/place/Benslimane,%20Morocco",
    age: "19",
    availability: "Open to new opportunities",
    social: &[
        SocialLink {
            network: SocialNetwork::GitHub,
            url: "https://github.com/AymaneWebDev",
        },
        SocialLink {
            network: SocialNetwork::LinkedIn,
            url: "https://linkedin.com/in/ahmed-aymane",
        },
        SocialLink {
            network: SocialNetwork::Twitter,
            url: "https://twitter.com/AymaneWebDev",
        },
        SocialLink {
            network: SocialNetwork::Instagram,
            url: "https://instagram.com/aymane_harty",
        },
    ],
    nav_links: &[
        NavLink {
            label: "Home",
            section: "home",
        },
        NavLink {
            label: "About",
            section: "about",
        },
        NavLink {
            label: "Experience",
            section: "experience",
        },
        NavLink {
            label: "Projects",
            section: "projects",
        },
        NavLink {
            label: "Contact",
            section: "contact",
        },
    ],
    skills: Skills {
        frontend: &[
            "HTML",
            "CSS",
            "JavaScript",
            "Bootstrap",
            "Tailwind CSS",
            "jQuery",
            "React.js",
        ],
        backend: &[
            "MySQL", "PHP", "Laravel", "Python", "PL/SQL", "MongoDB", "SQLite", "Node.js",
        ],
        infrastructure: &["Proxmox", "VMware", "Linux administration"],
        tools: &[
            "Git",
            "GitLab",
            "GitHub",
            "Jira",
            "SonarQube",
            "UML",
            "PERT",
            "GanttProject",
            "Postman",
        ],
        languages: &[
            Language {
                name: "Arabic",
                level: "Native",
            },
            Language {
                name: "French",
                level: "Fluent",
            },
            Language {
                name: "English",
                level: "Intermediate",
            },
        ],
        soft_skills: &["Time management", "Teamwork", "Problem solving"],
    },
    experience: &[
        Experience {
            role: "Software & IT Infrastructure Intern",
            company: "Accent - DBM Maroc",
            location: Some("Mohammedia, Morocco"),
            period: Period {
                start: YearMonth::new(2025, 4),
                end: Some(YearMonth::new(2025, 5)),
            },
            highlights: &[
                "Built an AI product-presentation assistant with React.js, Spring Boot and Rasa NLP",
                "Created a JWT-secured admin interface to manage products and the chatbot",
                "Configured and administered virtualized servers with Proxmox and VMware",
            ],
            tags: &["React.js", "Spring Boot", "Rasa NLP", "JWT", "Proxmox", "VMware"],
        },
        Experience {
            role: "Developer - Timetable Management Application",
            company: "ISTA Bouznika",
            location: None,
            period: Period {
                start: YearMonth::new(2024, 3),
                end: Some(YearMonth::new(2024, 4)),
            },
            highlights: &[
                "Built a complete Python (Tkinter, SQLite) application automating timetable management",
                "Streamlined the interface for fast, intuitive navigation",
            ],
            tags: &["Python", "Tkinter", "SQLite", "UI/UX"],
        },
        Experience {
            role: "Frontend Developer - E-commerce Site",
            company: "ISTA Bouznika",
            location: None,
            period: Period {
                start: YearMonth::new(2024, 1),
                end: Some(YearMonth::new(2024, 2)),
            },
            highlights: &[
                "Built a responsive storefront in HTML, CSS and Bootstrap",
                "Worked with the team to capture user requirements",
                "Added interactive features to improve the shopping experience",
            ],
            tags: &["HTML", "CSS", "Bootstrap", "Responsive Design"],
        },
    ],
    education: &[
        Education {
            degree: "Second year, Digital Development",
            institution: "OFPPT - ISTA Bouznika",
            location: Some("Bouznika, Morocco"),
            period: Period {
                start: YearMonth::new(2023, 9),
                end: None,
            },
            highlights: &[
                "In-depth training in front-end and back-end web development",
                "Academic projects with Python, PHP and JavaScript",
                "Interface design and application performance work",
            ],
        },
        Education {
            degree: "Baccalaureate in Physical Sciences",
            institution: "Lycée Charif El Idrissi",
            location: Some("Benslimane, Morocco"),
            period: Period {
                start: YearMonth::new(2020, 9),
                end: Some(YearMonth::new(2023, 6)),
            },
            highlights: &[
                "Experimental sciences track: mathematics, physics, chemistry",
                "Analytical and communication skills in Arabic, French and English",
            ],
        },
    ],
    projects: &[
        Project {
            id: "chatbot-ai",
            title: "Intelligent Virtual Assistant",
            summary: "AI assistant for interactive product presentation, with a full admin interface",
            details: &[
                "Conversational chatbot built on Rasa NLP",
                "Admin interface secured with JWT authentication",
                "Analytics dashboard tracking user interactions",
                "Deployed on a Proxmox server with Docker",
            ],
            tags: &["React.js", "Spring Boot", "Rasa NLP", "JWT", "Docker", "Proxmox"],
            image: None,
            repo_url: Some("https://github.com/AymaneWebDev/assistant-virtuel"),
            live_url: None,
        },
        Project {
            id: "gestion-emploi",
            title: "Timetable Manager",
            summary: "Desktop application automating academic timetable planning",
            details: &[
                "Drag-and-drop timetable editor",
                "Rooms, trainers and student groups management",
                "PDF and Excel schedule export",
                "Local SQLite storage",
            ],
            tags: &["Python", "Tkinter", "SQLite", "UI/UX Design"],
            image: None,
            repo_url: Some("https://github.com/AymaneWebDev/gestion-emploi"),
            live_url: None,
        },
        Project {
            id: "e-learning",
            title: "E-learning Platform",
            summary: "Online learning platform with progress tracking",
            details: &[
                "Course catalog with videos, quizzes and exercises",
                "Student dashboard with progress tracking",
                "Automatic certificates",
                "Authoring tools for trainers",
            ],
            tags: &["React.js", "Node.js", "MongoDB", "Tailwind CSS"],
            image: None,
            repo_url: Some("https://github.com/AymaneWebDev/e-learning-platform"),
            live_url: None,
        },
        Project {
            id: "e-commerce",
            title: "E-commerce Store",
            summary: "Modern online store with cart and checkout",
            details: &[
                "Product catalog with advanced filters",
                "Persistent shopping cart",
                "Secure checkout flow",
                "Customer area with order history",
            ],
            tags: &["HTML", "CSS", "JavaScript", "Bootstrap", "Responsive Design"],
            image: None,
            repo_url: Some("https://github.com/AymaneWebDev/ecommerce-shop"),
            live_url: None,
        },
    ],
    certifications: &[
        Certification {
            name: "Advanced React",
            issuer: "Meta (Coursera)",
            year: 2024,
        },
        Certification {
            name: "jQuery Web Development and Programming",
            issuer: "Alison",
            year: 2024,
        },
        Certification {
            name: "Cisco Python Essentials 1",
            issuer: "Cisco Networking Academy",
            year: 2023,
        },
        Certification {
            name: "Linux Essentials",
            issuer: "TCM Security",
            year: 2023,
        },
    ],
    hobbies: &["Reading", "Travel", "Sport"],
    seo: Seo {
        description: "Portfolio of Ahmed Aymane Harty, junior full-stack developer building modern, fast web solutions.",
        keywords: &[
            "portfolio",
            "web developer",
            "full stack",
            "react",
            "node.js",
            "morocco",
        ],
        author: "Ahmed Aymane Harty",
        image: "/images/profile.svg",
        url: "https://aymane-web-dev.vercel.app",
        twitter: "@AymaneWebDev",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_nav_links() {
        assert_eq!(
            SITE.section_ids(),
            vec!["home", "about", "experience", "projects", "contact"]
        );
    }

    #[test]
    fn test_contact_hrefs() {
        assert_eq!(SITE.phone_href(), "tel:+212648-307515");
        assert_eq!(SITE.mailto_href(), "mailto:aymaneharty@gmail.com");
        assert_eq!(SITE.first_name(), "Ahmed");
    }

    #[test]
    fn test_period_display() {
        let closed = Period {
            start: YearMonth::new(2025, 4),
            end: Some(YearMonth::new(2025, 5)),
        };
        assert_eq!(closed.to_string(), "Apr 2025 - May 2025");

        let ongoing = Period {
            start: YearMonth::new(2023, 9),
            end: None,
        };
        assert_eq!(ongoing.to_string(), "Since Sep 2023");

        // out of range months fall back to the year
        assert_eq!(YearMonth::new(2020, 0).to_string(), "2020");
    }

    #[test]
    fn test_build_env() {
        let env = BuildEnv {
            title: "Portfolio",
            base_path: "/portfolio/",
            analytics_id: Some("  "),
            build_time: "2026-03-01T10:00:00+00:00",
        };
        assert_eq!(env.router_base(), "/portfolio");
        assert_eq!(env.analytics_id(), None);
        assert_eq!(env.build_year(), Some(2026));

        let root = BuildEnv {
            base_path: "/",
            analytics_id: Some("G-123"),
            ..env
        };
        assert_eq!(root.router_base(), "");
        assert_eq!(root.analytics_id(), Some("G-123"));
    }

    #[test]
    fn test_only_web_links_open_new_tab() {
        assert!(opens_in_new_tab(SITE.maps_url));
        assert!(!opens_in_new_tab(&SITE.mailto_href()));
        assert!(!opens_in_new_tab(&SITE.phone_href()));
    }

    #[test]
    fn test_missing_project_image_uses_placeholder() {
        let project = Project {
            image: None,
            ..SITE.projects[0]
        };
        assert_eq!(project.image_src(), PROJECT_PLACEHOLDER_IMAGE);

        let shot = Project {
            image: Some("/images/projects/shot.png"),
            ..project
        };
        assert_eq!(shot.image_src(), "/images/projects/shot.png");
    }

    #[test]
    fn test_referenced_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let assets = [FAVICON, SITE.seo.image, PROJECT_PLACEHOLDER_IMAGE]
            .into_iter()
            .chain(SITE.projects.iter().map(Project::image_src));
        for asset in assets {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "missing asset {}", file.display());
        }
    }

    #[test]
    fn test_social_icons_come_from_linked_font() {
        assert!(DEVICON_STYLESHEET.starts_with("https://"));
        for link in SITE.social {
            assert!(link.network.icon_class().starts_with("devicon-"));
            assert!(!link.network.label().is_empty());
        }
    }

    #[test]
    fn test_projects_have_unique_ids() {
        let mut ids = SITE.projects.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SITE.projects.len());
    }
}
