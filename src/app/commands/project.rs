use super::{find_project, find_template};
use crate::app::AppContext;
use crate::domain::{Action, AppError, AppState, Project};
use crate::ports::{Clock, StateStore};

fn newest_project(state: AppState) -> Result<Project, AppError> {
    state
        .projects
        .into_iter()
        .last()
        .ok_or_else(|| AppError::Internal("created project was not stored".to_string()))
}

/// Instantiate a project from a template (by id or name).
pub fn create<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    template_key: &str,
    name: Option<String>,
) -> Result<Project, AppError> {
    let template_id = find_template(&ctx.state()?, template_key)?.id.clone();
    let name = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    newest_project(ctx.dispatch(Action::CreateProject { template_id, name })?)
}

/// Mark a project as opened now.
pub fn open<S: StateStore, C: Clock>(ctx: &AppContext<S, C>, key: &str) -> Result<Project, AppError> {
    let project_id = find_project(&ctx.state()?, key)?.id.clone();
    let state = ctx.dispatch(Action::OpenProject { project_id: project_id.clone() })?;
    state.project(&project_id).cloned()
}

pub fn rename<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    name: &str,
) -> Result<Project, AppError> {
    let project_id = find_project(&ctx.state()?, key)?.id.clone();
    let state = ctx.dispatch(Action::RenameProject {
        project_id: project_id.clone(),
        name: name.to_string(),
    })?;
    state.project(&project_id).cloned()
}

/// Delete a project and return what was removed.
pub fn delete<S: StateStore, C: Clock>(ctx: &AppContext<S, C>, key: &str) -> Result<Project, AppError> {
    let removed = find_project(&ctx.state()?, key)?.clone();
    ctx.dispatch(Action::DeleteProject { project_id: removed.id.clone() })?;
    Ok(removed)
}

/// Look up a project without changing it.
pub fn get<S: StateStore, C: Clock>(ctx: &AppContext<S, C>, key: &str) -> Result<Project, AppError> {
    find_project(&ctx.state()?, key).cloned()
}
