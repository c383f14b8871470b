use crate::domain::{AppError, AppState, Project, Settings, Template};

/// Port for persisting the three user-owned records.
///
/// Loaders recover from unreadable content by falling back to an empty or
/// default record; only genuine I/O failures are returned as errors.
pub trait StateStore {
    /// Stored templates, or the built-in set when none are stored.
    fn load_templates(&self) -> Result<Vec<Template>, AppError>;

    /// Stored projects, or an empty list.
    fn load_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Stored settings, or defaults.
    fn load_settings(&self) -> Result<Settings, AppError>;

    fn save_templates(&self, templates: &[Template]) -> Result<(), AppError>;

    fn save_projects(&self, projects: &[Project]) -> Result<(), AppError>;

    fn save_settings(&self, settings: &Settings) -> Result<(), AppError>;

    fn load_state(&self) -> Result<AppState, AppError> {
        Ok(AppState::new(self.load_templates()?, self.load_projects()?, self.load_settings()?))
    }

    /// Persist only the records that differ between `before` and `after`.
    fn save_changes(&self, before: &AppState, after: &AppState) -> Result<(), AppError> {
        if before.templates != after.templates {
            self.save_templates(&after.templates)?;
        }
        if before.projects != after.projects {
            self.save_projects(&after.projects)?;
        }
        if before.settings != after.settings {
            self.save_settings(&after.settings)?;
        }
        Ok(())
    }
}
