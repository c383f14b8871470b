//! Per-project step overrides and outputs.

use super::find_project;
use crate::app::AppContext;
use crate::domain::{Action, AppError, AppState, Project};
use crate::ports::{Clock, StateStore};

/// A step addressed by a command, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRef {
    pub project_id: String,
    pub position: usize,
    pub id: String,
    pub name: String,
}

fn locate(state: &AppState, project_key: &str, step_key: &str) -> Result<StepRef, AppError> {
    let project: &Project = find_project(state, project_key)?;
    let template = state.template_for(project)?;
    let step = template.find_step(step_key).ok_or_else(|| AppError::StepNotFound {
        template: template.id.clone(),
        step: step_key.to_string(),
    })?;
    let position = template.steps.iter().position(|s| s.id == step.id).unwrap_or_default() + 1;
    Ok(StepRef {
        project_id: project.id.clone(),
        position,
        id: step.id.clone(),
        name: step.name.clone(),
    })
}

/// Replace a step's content for this project only.
pub fn edit<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    step_key: &str,
    content: &str,
) -> Result<StepRef, AppError> {
    let step = locate(&ctx.state()?, project_key, step_key)?;
    ctx.dispatch(Action::SetStepOverride {
        project_id: step.project_id.clone(),
        step_id: step.id.clone(),
        content: content.to_string(),
    })?;
    Ok(step)
}

/// Drop the project's override of a step.
pub fn revert<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    step_key: &str,
) -> Result<StepRef, AppError> {
    let step = locate(&ctx.state()?, project_key, step_key)?;
    ctx.dispatch(Action::RevertStepOverride {
        project_id: step.project_id.clone(),
        step_id: step.id.clone(),
    })?;
    Ok(step)
}

/// Save the step's effective content into the template and drop the override.
pub fn promote<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    step_key: &str,
) -> Result<StepRef, AppError> {
    let step = locate(&ctx.state()?, project_key, step_key)?;
    ctx.dispatch(Action::PromoteStepOverride {
        project_id: step.project_id.clone(),
        step_id: step.id.clone(),
    })?;
    Ok(step)
}

/// Record what a step produced, for `[[N]]` references in later steps.
pub fn set_output<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    step_key: &str,
    value: &str,
) -> Result<StepRef, AppError> {
    let step = locate(&ctx.state()?, project_key, step_key)?;
    ctx.dispatch(Action::SetStepOutput {
        project_id: step.project_id.clone(),
        step_id: step.id.clone(),
        value: value.to_string(),
    })?;
    Ok(step)
}
