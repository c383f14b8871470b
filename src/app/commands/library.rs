use crate::app::AppContext;
use crate::domain::library::{grouped_projects, sorted_projects, template_name};
use crate::domain::{AppError, Project, SortKey, Template, Timestamp};
use crate::ports::{Clock, StateStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    /// `None` when the template has been deleted.
    pub template_name: Option<String>,
    pub created_at: Timestamp,
    pub last_modified_at: Timestamp,
    pub last_opened_at: Timestamp,
}

impl ProjectSummary {
    fn new(project: &Project, templates: &[Template]) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            template_name: template_name(templates, project).map(str::to_string),
            created_at: project.created_at,
            last_modified_at: project.last_modified_at,
            last_opened_at: project.last_opened_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryGroup {
    pub name: String,
    pub projects: Vec<ProjectSummary>,
}

pub fn list<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    sort: SortKey,
) -> Result<Vec<ProjectSummary>, AppError> {
    let state = ctx.state()?;
    Ok(sorted_projects(&state.projects, sort)
        .into_iter()
        .map(|p| ProjectSummary::new(p, &state.templates))
        .collect())
}

/// Projects grouped by template name; projects without a template go to "Uncategorized".
pub fn grouped<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    sort: SortKey,
) -> Result<Vec<LibraryGroup>, AppError> {
    let state = ctx.state()?;
    Ok(grouped_projects(&state.projects, &state.templates, sort)
        .into_iter()
        .map(|group| LibraryGroup {
            name: group.name,
            projects: group
                .projects
                .into_iter()
                .map(|p| ProjectSummary::new(p, &state.templates))
                .collect(),
        })
        .collect())
}
