//! Project library ordering and grouping.

use std::fmt;
use std::str::FromStr;

use super::error::AppError;
use super::project::Project;
use super::template::Template;

/// Group name for projects whose template no longer exists.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently modified first.
    #[default]
    LastModified,
    /// Most recently created first.
    CreatedAt,
    /// Alphabetical by name.
    Name,
    /// Most recently opened first.
    LastOpened,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modified" | "last-modified" => Ok(SortKey::LastModified),
            "created" => Ok(SortKey::CreatedAt),
            "name" => Ok(SortKey::Name),
            "opened" | "recent" => Ok(SortKey::LastOpened),
            other => Err(AppError::config_error(format!(
                "Unknown sort key '{}': use modified, created, name or opened",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::LastModified => "modified",
            SortKey::CreatedAt => "created",
            SortKey::Name => "name",
            SortKey::LastOpened => "opened",
        };
        f.write_str(s)
    }
}

/// Projects ordered by `key`. The sort is stable, so ties keep stored order.
pub fn sorted_projects(projects: &[Project], key: SortKey) -> Vec<&Project> {
    let mut sorted: Vec<&Project> = projects.iter().collect();
    match key {
        SortKey::LastModified => sorted.sort_by(|a, b| b.last_modified_at.cmp(&a.last_modified_at)),
        SortKey::CreatedAt => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::LastOpened => sorted.sort_by(|a, b| b.last_opened_at.cmp(&a.last_opened_at)),
    }
    sorted
}

/// A named group of projects sharing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup<'a> {
    pub name: String,
    pub projects: Vec<&'a Project>,
}

/// Group sorted projects by template name, in order of first appearance.
pub fn grouped_projects<'a>(
    projects: &'a [Project],
    templates: &[Template],
    key: SortKey,
) -> Vec<ProjectGroup<'a>> {
    let mut groups: Vec<ProjectGroup<'a>> = Vec::new();
    for project in sorted_projects(projects, key) {
        let name = template_name(templates, project).unwrap_or(UNCATEGORIZED).to_string();
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.projects.push(project),
            None => groups.push(ProjectGroup { name, projects: vec![project] }),
        }
    }
    groups
}

/// Name of the project's template, `None` when it has been deleted.
pub fn template_name<'t>(templates: &'t [Template], project: &Project) -> Option<&'t str> {
    templates.iter().find(|t| t.id == project.template_id).map(|t| t.name.as_str())
}
