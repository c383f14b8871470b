//! Step overrides and step outputs.
//!
//! A step's *effective content* is the project's override when one is set,
//! otherwise the template's content. Outputs are free text recorded per step and
//! are what `[[N]]` / `[[name]]` references resolve to.
//!
//! Writes keyed by a step id the template does not know are kept but never read.

use super::ids::Timestamp;
use super::project::{Project, StepOverride};
use super::resolver::{ResolutionContext, resolve};
use super::template::{Step, Template};

/// Effective content of `step` within `project`.
pub fn effective_step_content<'a>(project: &'a Project, step: &'a Step) -> &'a str {
    project
        .step_overrides
        .get(&step.id)
        .and_then(|o| o.content.as_deref())
        .unwrap_or(&step.content)
}

/// Effective content for `step_id`, or `None` when the template has no such step.
pub fn effective_content(project: &Project, template: &Template, step_id: &str) -> Option<String> {
    template.step(step_id).map(|step| effective_step_content(project, step).to_string())
}

/// Whether the project currently overrides `step_id`.
pub fn is_overridden(project: &Project, step_id: &str) -> bool {
    project.step_overrides.get(step_id).is_some_and(|o| o.content.is_some())
}

pub fn set_override(
    project: &Project,
    step_id: &str,
    content: impl Into<String>,
    now: Timestamp,
) -> Project {
    let mut next = project.clone();
    next.step_overrides
        .insert(step_id.to_string(), StepOverride { content: Some(content.into()) });
    next.touch(now);
    next
}

/// Drop the override so the template content shows through again.
pub fn revert_override(project: &Project, step_id: &str, now: Timestamp) -> Project {
    let mut next = project.clone();
    next.step_overrides.remove(step_id);
    next.touch(now);
    next
}

/// Write `content` into the template's step. Unknown step ids leave the template as is.
///
/// Callers should also [`revert_override`] on the project the content came
/// from, otherwise the override keeps shadowing the updated template.
pub fn promote_override_to_template(template: &Template, step_id: &str, content: &str) -> Template {
    let mut next = template.clone();
    if let Some(step) = next.steps.iter_mut().find(|s| s.id == step_id) {
        step.content = content.to_string();
    }
    next
}

pub fn set_step_output(
    project: &Project,
    step_id: &str,
    value: impl Into<String>,
    now: Timestamp,
) -> Project {
    let mut next = project.clone();
    next.step_outputs.insert(step_id.to_string(), value.into());
    next.touch(now);
    next
}

/// A step as it should be displayed for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStep {
    pub position: usize,
    pub step_id: String,
    pub name: String,
    pub raw: String,
    pub resolved: String,
    pub overridden: bool,
}

/// Resolve every step's effective content, in template order.
pub fn render_steps(project: &Project, template: &Template) -> Vec<RenderedStep> {
    let context = ResolutionContext::for_project(project, template);
    template
        .steps
        .iter()
        .enumerate()
        .map(|(position, step)| {
            let raw = effective_step_content(project, step);
            RenderedStep {
                position,
                step_id: step.id.clone(),
                name: step.name.clone(),
                raw: raw.to_string(),
                resolved: resolve(raw, &context),
                overridden: is_overridden(project, &step.id),
            }
        })
        .collect()
}
