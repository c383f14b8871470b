use super::find_project;
use crate::app::AppContext;
use crate::domain::step_chain::render_steps;
use crate::domain::{AppError, RenderedStep};
use crate::ports::{Clock, StateStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub project_name: String,
    pub steps: Vec<RenderedStep>,
}

/// Resolve a project's steps, or just the one matching `step_key`.
pub fn execute<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    step_key: Option<&str>,
) -> Result<RenderOutcome, AppError> {
    let state = ctx.state()?;
    let project = find_project(&state, project_key)?;
    let template = state.template_for(project)?;
    let mut steps = render_steps(project, template);

    if let Some(key) = step_key {
        let step = template.find_step(key).ok_or_else(|| AppError::StepNotFound {
            template: template.id.clone(),
            step: key.to_string(),
        })?;
        steps.retain(|s| s.step_id == step.id);
    }

    Ok(RenderOutcome { project_name: project.name.clone(), steps })
}
