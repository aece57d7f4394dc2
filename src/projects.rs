use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

pub const ALL_CATEGORY: &str = "All";

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content/projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    image: String,
    technologies: Vec<String>,
    category: String,
    #[serde(default)]
    live_url: Option<String>,
    #[serde(default)]
    github_url: Option<String>,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub title: String,
    /// Rendered HTML
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse project {0}")]
    Parse(String),
}

/// `"All"` followed by each distinct category in first-appearance order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for p in projects {
        if !out.iter().any(|c| c == &p.category) {
            out.push(p.category.clone());
        }
    }
    out
}

pub fn filter_by_category(projects: &[Project], category: &str) -> Vec<Project> {
    if category == ALL_CATEGORY {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// `category` if any project (or `"All"`) matches it, otherwise `"All"`.
pub fn known_category<'a>(projects: &[Project], category: &'a str) -> &'a str {
    if category == ALL_CATEGORY || projects.iter().any(|p| p.category == category) {
        category
    } else {
        ALL_CATEGORY
    }
}

#[cfg(feature = "ssr")]
fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|s| !s.trim().is_empty())
}

#[cfg(feature = "ssr")]
pub fn parse_project(file_name: &str, content: &str) -> Result<Project, ProjectError> {
    let name = file_name.strip_suffix(".md").unwrap_or(file_name);
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::Parse(name.to_string()))?;

    let parser = Parser::new_ext(&fm.content, Options::all());
    let mut description = String::new();
    pulldown_cmark::html::push_html(&mut description, parser);

    Ok(Project {
        name: name.to_string(),
        title: fm.data.title,
        description,
        image: fm.data.image,
        technologies: fm.data.technologies,
        category: fm.data.category,
        live_url: non_empty(fm.data.live_url),
        github_url: non_empty(fm.data.github_url),
        date: fm.data.date,
    })
}

#[cfg(feature = "ssr")]
fn load_projects() -> Result<Vec<Project>, ProjectError> {
    let mut projects = Assets::iter()
        .map(|s| {
            let file = Assets::get(&s).ok_or(ProjectError::NotFound)?;
            let content = String::from_utf8(file.data.into())
                .map_err(|_| ProjectError::Parse(s.to_string()))?;
            parse_project(&s, &content)
        })
        .collect::<Result<Vec<_>, _>>()?;
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    log::debug!("loaded {} projects", projects.len());
    Ok(projects)
}

#[cfg(feature = "ssr")]
pub async fn get_projects(category: String) -> Result<Vec<Project>, ProjectError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(&category).map(|r| r.clone()) {
        return Ok(r);
    }
    let all = match cache.get(ALL_CATEGORY).map(|r| r.clone()) {
        Some(all) => all,
        None => {
            let all = load_projects()?;
            cache.insert(ALL_CATEGORY.to_string(), all.clone());
            all
        }
    };
    let projects = filter_by_category(&all, &category);
    // unknown categories are not cached
    if !projects.is_empty() {
        cache.insert(category, projects.clone());
    }
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project(name: &str, category: &str) -> Project {
        Project {
            name: name.to_string(),
            title: name.to_string(),
            description: String::new(),
            image: String::new(),
            technologies: vec![],
            category: category.to_string(),
            live_url: None,
            github_url: None,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("shop", "Full Stack"),
            project("tasks", "Frontend"),
            project("weather", "Frontend"),
            project("gaming", "Full Stack"),
        ]
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            categories(&sample()),
            vec!["All", "Full Stack", "Frontend"]
        );
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_by_category() {
        let projects = sample();
        assert_eq!(filter_by_category(&projects, ALL_CATEGORY), projects);

        let frontend = filter_by_category(&projects, "Frontend")
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(frontend, vec!["tasks", "weather"]);

        assert!(filter_by_category(&projects, "frontend").is_empty());
        assert!(filter_by_category(&projects, "Mobile").is_empty());
    }

    #[test]
    fn test_stale_category_falls_back_to_all() {
        let projects = sample();
        assert_eq!(known_category(&projects, "Frontend"), "Frontend");
        assert_eq!(known_category(&projects, ALL_CATEGORY), ALL_CATEGORY);
        assert_eq!(known_category(&projects, "Mobile"), ALL_CATEGORY);
        assert_eq!(known_category(&projects, ""), ALL_CATEGORY);
        assert_eq!(known_category(&[], "Frontend"), ALL_CATEGORY);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project() {
        let content = r#"---
title: Task Management App
image: https://example.com/tasks.jpg
technologies: [Next.js, TypeScript]
category: Frontend
live_url: https://taskx.vercel.app
github_url: ""
date: 2024-03-01T00:00:00Z
---
Collaborative *project* management.
"#;
        let p = parse_project("tasks.md", content).unwrap();
        assert_eq!(p.name, "tasks");
        assert_eq!(p.title, "Task Management App");
        assert_eq!(p.technologies, vec!["Next.js", "TypeScript"]);
        assert_eq!(p.category, "Frontend");
        assert_eq!(p.live_url.as_deref(), Some("https://taskx.vercel.app"));
        assert_eq!(p.github_url, None);
        assert!(p.description.contains("<em>project</em>"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project_missing_fields() {
        let content = "---\ntitle: Nope\n---\nbody\n";
        assert_eq!(
            parse_project("nope.md", content),
            Err(ProjectError::Parse("nope".to_string()))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_embedded_projects_load_newest_first() {
        let projects = load_projects().unwrap();
        assert_eq!(projects.len(), 4);
        assert!(projects.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(
            categories(&projects).len(),
            3,
            "All, Full Stack and Frontend"
        );
    }
}
