//! Pure mappings from [`crate::site`] content to what the sections render.

use crate::site::{Education, Experience, Period, Project, Skills};

/// Project filter that matches every project.
pub const ALL_PROJECTS: &str = "All";

/// `"All"` followed by every project tag, first-seen order, no duplicates.
pub fn project_categories(projects: &[Project]) -> Vec<&'static str> {
    let mut categories = vec![ALL_PROJECTS];
    for tag in projects.iter().flat_map(|p| p.tags.iter().copied()) {
        if !categories.contains(&tag) {
            categories.push(tag);
        }
    }
    categories
}

pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_PROJECTS || p.tags.iter().any(|tag| *tag == category))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Work,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineFilter {
    #[default]
    All,
    Work,
    Education,
}

impl TimelineFilter {
    pub const ALL: [TimelineFilter; 3] = [Self::All, Self::Work, Self::Education];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Work => "Work",
            Self::Education => "Education",
        }
    }

    pub fn matches(&self, kind: TimelineKind) -> bool {
        match self {
            Self::All => true,
            Self::Work => kind == TimelineKind::Work,
            Self::Education => kind == TimelineKind::Education,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: Option<&'static str>,
    pub period: Period,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl From<&Experience> for TimelineEntry {
    fn from(exp: &Experience) -> Self {
        Self {
            kind: TimelineKind::Work,
            title: exp.role,
            organization: exp.company,
            location: exp.location,
            period: exp.period,
            highlights: exp.highlights,
            tags: exp.tags,
        }
    }
}

impl From<&Education> for TimelineEntry {
    fn from(edu: &Education) -> Self {
        Self {
            kind: TimelineKind::Education,
            title: edu.degree,
            organization: edu.institution,
            location: edu.location,
            period: edu.period,
            highlights: edu.highlights,
            tags: &[],
        }
    }
}

/// Work and education merged, most recent start first.
pub fn timeline(experience: &[Experience], education: &[Education]) -> Vec<TimelineEntry> {
    let mut entries = experience
        .iter()
        .map(TimelineEntry::from)
        .chain(education.iter().map(TimelineEntry::from))
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.period.start.cmp(&a.period.start));
    entries
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<String>,
}

pub fn skill_categories(skills: &Skills) -> Vec<SkillCategory> {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        SkillCategory {
            id: "frontend",
            label: "Frontend",
            items: owned(skills.frontend),
        },
        SkillCategory {
            id: "backend",
            label: "Backend",
            items: owned(skills.backend),
        },
        SkillCategory {
            id: "tools",
            label: "Tools & Infra",
            items: skills
                .tools
                .iter()
                .chain(skills.infrastructure)
                .map(|s| s.to_string())
                .collect(),
        },
        SkillCategory {
            id: "languages",
            label: "Languages",
            items: skills
                .languages
                .iter()
                .map(|lang| format!("{} ({})", lang.name, lang.level))
                .collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Language, YearMonth, SITE};

    fn project(id: &'static str, tags: &'static [&'static str]) -> Project {
        Project {
            id,
            title: id,
            summary: "",
            details: &[],
            tags,
            image: None,
            repo_url: None,
            live_url: None,
        }
    }

    #[test]
    fn test_categories_are_deduplicated_in_order() {
        let projects = [
            project("a", &["Rust", "Leptos"]),
            project("b", &["Axum", "Rust"]),
            project("c", &["Leptos", "Tailwind"]),
        ];
        assert_eq!(
            project_categories(&projects),
            vec!["All", "Rust", "Leptos", "Axum", "Tailwind"]
        );
        assert_eq!(project_categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_projects() {
        let projects = [
            project("a", &["Rust", "Leptos"]),
            project("b", &["Axum", "Rust"]),
            project("c", &["Tailwind"]),
        ];
        let ids = |category| {
            filter_projects(&projects, category)
                .into_iter()
                .map(|p| p.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids("All"), vec!["a", "b", "c"]);
        assert_eq!(ids("Rust"), vec!["a", "b"]);
        assert_eq!(ids("Tailwind"), vec!["c"]);
        assert!(ids("Go").is_empty());
    }

    #[test]
    fn test_timeline_is_most_recent_first() {
        let entries = timeline(SITE.experience, SITE.education);
        assert_eq!(entries.len(), SITE.experience.len() + SITE.education.len());
        assert!(entries
            .windows(2)
            .all(|w| w[0].period.start >= w[1].period.start));
        assert_eq!(entries[0].period.start, YearMonth::new(2025, 4));
        assert_eq!(entries.last().unwrap().kind, TimelineKind::Education);
    }

    #[test]
    fn test_timeline_filter() {
        let entries = timeline(SITE.experience, SITE.education);
        let count = |filter: TimelineFilter| entries.iter().filter(|e| filter.matches(e.kind)).count();
        assert_eq!(count(TimelineFilter::All), entries.len());
        assert_eq!(count(TimelineFilter::Work), SITE.experience.len());
        assert_eq!(count(TimelineFilter::Education), SITE.education.len());
    }

    #[test]
    fn test_skill_categories() {
        let skills = Skills {
            frontend: &["HTML"],
            backend: &["Rust"],
            infrastructure: &["Proxmox"],
            tools: &["Git"],
            languages: &[Language {
                name: "English",
                level: "Fluent",
            }],
            soft_skills: &[],
        };
        let categories = skill_categories(&skills);
        let ids = categories.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["frontend", "backend", "tools", "languages"]);
        assert_eq!(categories[2].items, vec!["Git", "Proxmox"]);
        assert_eq!(categories[3].items, vec!["English (Fluent)"]);
    }
}
