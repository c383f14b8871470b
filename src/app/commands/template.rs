//! Template authoring.

use super::{find_project, find_template};
use crate::app::AppContext;
use crate::domain::{Action, AppError, AppState, InputPatch, StepPatch, Template};
use crate::ports::{Clock, StateStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub inputs: usize,
    pub steps: usize,
    /// Projects instantiated from this template.
    pub projects: usize,
}

/// Outcome of deleting a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedTemplate {
    pub template: Template,
    /// Projects left pointing at the deleted template.
    pub orphaned: usize,
}

fn newest_template(state: AppState) -> Result<Template, AppError> {
    state
        .templates
        .into_iter()
        .last()
        .ok_or_else(|| AppError::Internal("created template was not stored".to_string()))
}

/// Apply a template-scoped action and return the updated template.
fn update<S, C, F>(ctx: &AppContext<S, C>, template_key: &str, action: F) -> Result<Template, AppError>
where
    S: StateStore,
    C: Clock,
    F: FnOnce(&Template) -> Result<Action, AppError>,
{
    let state = ctx.state()?;
    let template = find_template(&state, template_key)?;
    let template_id = template.id.clone();
    let next = ctx.dispatch(action(template)?)?;
    next.template(&template_id).cloned()
}

pub fn list<S: StateStore, C: Clock>(ctx: &AppContext<S, C>) -> Result<Vec<TemplateSummary>, AppError> {
    let state = ctx.state()?;
    Ok(state
        .templates
        .iter()
        .map(|t| TemplateSummary {
            id: t.id.clone(),
            name: t.name.clone(),
            inputs: t.inputs.len(),
            steps: t.steps.len(),
            projects: state.projects.iter().filter(|p| p.template_id == t.id).count(),
        })
        .collect())
}

pub fn show<S: StateStore, C: Clock>(ctx: &AppContext<S, C>, key: &str) -> Result<Template, AppError> {
    find_template(&ctx.state()?, key).cloned()
}

/// Create the starter template, optionally naming it.
pub fn create<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    name: Option<String>,
) -> Result<Template, AppError> {
    let created = newest_template(ctx.dispatch(Action::CreateTemplate)?)?;
    match name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
        Some(name) => rename(ctx, &created.id, &name),
        None => Ok(created),
    }
}

pub fn duplicate<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
) -> Result<Template, AppError> {
    let template_id = find_template(&ctx.state()?, key)?.id.clone();
    newest_template(ctx.dispatch(Action::DuplicateTemplate { template_id })?)
}

/// Save a project's current values and step content as a new template.
pub fn extract<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
) -> Result<Template, AppError> {
    let project_id = find_project(&ctx.state()?, project_key)?.id.clone();
    newest_template(ctx.dispatch(Action::ExtractTemplate { project_id })?)
}

/// Delete a template. Its projects are kept and show up as uncategorized.
pub fn delete<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
) -> Result<DeletedTemplate, AppError> {
    let state = ctx.state()?;
    let template = find_template(&state, key)?.clone();
    let orphaned = state.projects.iter().filter(|p| p.template_id == template.id).count();
    ctx.dispatch(Action::DeleteTemplate { template_id: template.id.clone() })?;
    Ok(DeletedTemplate { template, orphaned })
}

pub fn rename<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    name: &str,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        Ok(Action::RenameTemplate { template_id: t.id.clone(), name: name.to_string() })
    })
}

pub fn add_input<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    label: &str,
    default_value: Option<String>,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        Ok(Action::AddInput {
            template_id: t.id.clone(),
            label: label.to_string(),
            default_value,
        })
    })
}

/// Update an input addressed by id or label.
pub fn update_input<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    input_key: &str,
    patch: InputPatch,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        let input =
            t.find_input(input_key).ok_or_else(|| AppError::InputNotFound(input_key.to_string()))?;
        Ok(Action::UpdateInput { template_id: t.id.clone(), input_id: input.id.clone(), patch })
    })
}

pub fn remove_input<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    input_key: &str,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        let input =
            t.find_input(input_key).ok_or_else(|| AppError::InputNotFound(input_key.to_string()))?;
        Ok(Action::RemoveInput { template_id: t.id.clone(), input_id: input.id.clone() })
    })
}

pub fn add_step<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    name: &str,
    content: &str,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        Ok(Action::AddStep {
            template_id: t.id.clone(),
            name: name.to_string(),
            content: content.to_string(),
        })
    })
}

fn step_id(template: &Template, step_key: &str) -> Result<String, AppError> {
    template.find_step(step_key).map(|s| s.id.clone()).ok_or_else(|| AppError::StepNotFound {
        template: template.id.clone(),
        step: step_key.to_string(),
    })
}

/// Update a step addressed by id, name or 1-based position.
pub fn update_step<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    step_key: &str,
    patch: StepPatch,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        Ok(Action::UpdateStep { template_id: t.id.clone(), step_id: step_id(t, step_key)?, patch })
    })
}

pub fn remove_step<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    key: &str,
    step_key: &str,
) -> Result<Template, AppError> {
    update(ctx, key, |t| {
        Ok(Action::RemoveStep { template_id: t.id.clone(), step_id: step_id(t, step_key)? })
    })
}
