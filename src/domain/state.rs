//! Application state and its reducer.
//!
//! [`AppState`] is an immutable snapshot of everything the user owns.
//! [`AppState::apply`] produces the next snapshot for an [`Action`]; entities are
//! always swapped whole under their id, never patched through shared references.

use super::backup::Backup;
use super::error::AppError;
use super::ids::Timestamp;
use super::project::{DEFAULT_PROJECT_NAME, Project};
use super::settings::{Settings, SettingsChange};
use super::step_chain;
use super::template::{InputPatch, StepPatch, Template};
use super::variables::{self, LocalVariableOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub templates: Vec<Template>,
    pub projects: Vec<Project>,
    pub settings: Settings,
}

/// A user-initiated state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateProject { template_id: String, name: Option<String> },
    OpenProject { project_id: String },
    RenameProject { project_id: String, name: String },
    DeleteProject { project_id: String },
    SetInputValue { project_id: String, input_id: String, value: String },
    AddLocalVariable { project_id: String, label: String },
    RemoveLocalVariable { project_id: String, input_id: String },
    SetStepOverride { project_id: String, step_id: String, content: String },
    RevertStepOverride { project_id: String, step_id: String },
    /// Write the project's override into the template, then drop the override.
    PromoteStepOverride { project_id: String, step_id: String },
    SetStepOutput { project_id: String, step_id: String, value: String },
    CreateTemplate,
    DuplicateTemplate { template_id: String },
    ExtractTemplate { project_id: String },
    DeleteTemplate { template_id: String },
    RenameTemplate { template_id: String, name: String },
    AddInput { template_id: String, label: String, default_value: Option<String> },
    UpdateInput { template_id: String, input_id: String, patch: InputPatch },
    RemoveInput { template_id: String, input_id: String },
    AddStep { template_id: String, name: String, content: String },
    UpdateStep { template_id: String, step_id: String, patch: StepPatch },
    RemoveStep { template_id: String, step_id: String },
    ImportBackup(Backup),
    UpdateSettings(SettingsChange),
}

impl AppState {
    pub fn new(templates: Vec<Template>, projects: Vec<Project>, settings: Settings) -> Self {
        Self { templates, projects, settings }
    }

    pub fn project(&self, project_id: &str) -> Result<&Project, AppError> {
        self.projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))
    }

    pub fn template(&self, template_id: &str) -> Result<&Template, AppError> {
        self.templates
            .iter()
            .find(|t| t.id == template_id)
            .ok_or_else(|| AppError::TemplateNotFound(template_id.to_string()))
    }

    /// The template `project` was instantiated from.
    pub fn template_for(&self, project: &Project) -> Result<&Template, AppError> {
        self.template(&project.template_id)
    }

    fn id_taken(&self, candidate: &str) -> bool {
        self.projects.iter().any(|p| p.id == candidate)
            || self.templates.iter().any(|t| t.id == candidate)
    }

    fn with_project(&self, project: Project) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        }
        next
    }

    fn with_template(&self, template: Template) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.templates.iter_mut().find(|t| t.id == template.id) {
            *slot = template;
        }
        next
    }

    fn update_project<F>(&self, project_id: &str, f: F) -> Result<Self, AppError>
    where
        F: FnOnce(&Project) -> Project,
    {
        let updated = f(self.project(project_id)?);
        Ok(self.with_project(updated))
    }

    fn update_template<F>(&self, template_id: &str, f: F) -> Result<Self, AppError>
    where
        F: FnOnce(&Template) -> Option<Template>,
    {
        let template = self.template(template_id)?;
        Ok(self.with_template(f(template).unwrap_or_else(|| template.clone())))
    }

    /// Produce the state that follows `action` at time `now`.
    ///
    /// On error the current state is left untouched.
    pub fn apply(&self, action: Action, now: Timestamp) -> Result<Self, AppError> {
        tracing::debug!(?action, "applying action");
        match action {
            Action::CreateProject { template_id, name } => {
                let template = self.template(&template_id)?;
                let name = name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
                let project = Project::from_template(template, name, now, |c| self.id_taken(c));
                let mut next = self.clone();
                next.projects.push(project);
                Ok(next)
            }
            Action::OpenProject { project_id } => {
                self.update_project(&project_id, |p| p.opened(now))
            }
            Action::RenameProject { project_id, name } => {
                self.update_project(&project_id, |p| p.renamed(name, now))
            }
            Action::DeleteProject { project_id } => {
                self.project(&project_id)?;
                let mut next = self.clone();
                next.projects.retain(|p| p.id != project_id);
                Ok(next)
            }
            Action::SetInputValue { project_id, input_id, value } => {
                self.update_project(&project_id, |p| p.with_input_value(input_id, value, now))
            }
            Action::AddLocalVariable { project_id, label } => {
                let project = self.project(&project_id)?;
                let template = self.template_for(project).ok();
                match variables::add_local_variable(project, template, &label, now)? {
                    LocalVariableOutcome::Added { project, .. } => Ok(self.with_project(project)),
                    LocalVariableOutcome::Skipped => Ok(self.clone()),
                }
            }
            Action::RemoveLocalVariable { project_id, input_id } => {
                let project = self.project(&project_id)?;
                let updated = variables::remove_local_variable(project, &input_id, now)
                    .ok_or(AppError::InputNotFound(input_id))?;
                Ok(self.with_project(updated))
            }
            Action::SetStepOverride { project_id, step_id, content } => self
                .update_project(&project_id, |p| step_chain::set_override(p, &step_id, content, now)),
            Action::RevertStepOverride { project_id, step_id } => self
                .update_project(&project_id, |p| step_chain::revert_override(p, &step_id, now)),
            Action::PromoteStepOverride { project_id, step_id } => {
                let project = self.project(&project_id)?;
                let template = self.template_for(project)?;
                let content = step_chain::effective_content(project, template, &step_id)
                    .ok_or_else(|| AppError::StepNotFound {
                        template: template.id.clone(),
                        step: step_id.clone(),
                    })?;
                let promoted = step_chain::promote_override_to_template(template, &step_id, &content);
                let reverted = step_chain::revert_override(project, &step_id, now);
                Ok(self.with_template(promoted).with_project(reverted))
            }
            Action::SetStepOutput { project_id, step_id, value } => self
                .update_project(&project_id, |p| step_chain::set_step_output(p, &step_id, value, now)),
            Action::CreateTemplate => {
                let template = Template::blank(now, |c| self.id_taken(c));
                let mut next = self.clone();
                next.templates.push(template);
                Ok(next)
            }
            Action::DuplicateTemplate { template_id } => {
                let copy = self.template(&template_id)?.duplicate(now, |c| self.id_taken(c));
                let mut next = self.clone();
                next.templates.push(copy);
                Ok(next)
            }
            Action::ExtractTemplate { project_id } => {
                let project = self.project(&project_id)?;
                let source = self.template_for(project)?;
                let extracted = Template::extract_from(project, source, now, |c| self.id_taken(c));
                let mut next = self.clone();
                next.templates.push(extracted);
                Ok(next)
            }
            Action::DeleteTemplate { template_id } => {
                self.template(&template_id)?;
                let mut next = self.clone();
                next.templates.retain(|t| t.id != template_id);
                Ok(next)
            }
            Action::RenameTemplate { template_id, name } => {
                self.update_template(&template_id, |t| Some(t.renamed(name)))
            }
            Action::AddInput { template_id, label, default_value } => {
                self.update_template(&template_id, |t| Some(t.with_input_added(label, default_value, now)))
            }
            Action::UpdateInput { template_id, input_id, patch } => {
                let template = self.template(&template_id)?;
                let updated = template
                    .with_input_updated(&input_id, patch)
                    .ok_or(AppError::InputNotFound(input_id))?;
                Ok(self.with_template(updated))
            }
            Action::RemoveInput { template_id, input_id } => {
                let template = self.template(&template_id)?;
                let updated =
                    template.with_input_removed(&input_id).ok_or(AppError::InputNotFound(input_id))?;
                Ok(self.with_template(updated))
            }
            Action::AddStep { template_id, name, content } => {
                self.update_template(&template_id, |t| Some(t.with_step_added(name, content, now)))
            }
            Action::UpdateStep { template_id, step_id, patch } => {
                let template = self.template(&template_id)?;
                let updated = template.with_step_updated(&step_id, patch).ok_or_else(|| {
                    AppError::StepNotFound { template: template_id.clone(), step: step_id.clone() }
                })?;
                Ok(self.with_template(updated))
            }
            Action::RemoveStep { template_id, step_id } => {
                let template = self.template(&template_id)?;
                let updated = template.with_step_removed(&step_id).ok_or_else(|| {
                    AppError::StepNotFound { template: template_id.clone(), step: step_id.clone() }
                })?;
                Ok(self.with_template(updated))
            }
            Action::ImportBackup(backup) => Ok(Self {
                templates: backup.templates,
                projects: backup.projects,
                settings: self.settings.clone(),
            }),
            Action::UpdateSettings(change) => {
                Ok(Self { settings: self.settings.apply(change)?, ..self.clone() })
            }
        }
    }
}
