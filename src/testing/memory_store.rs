use std::cell::RefCell;

use crate::domain::{AppError, Project, Settings, Template};
use crate::ports::StateStore;

/// In-memory state store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryStateStore {
    pub templates: RefCell<Vec<Template>>,
    pub projects: RefCell<Vec<Project>>,
    pub settings: RefCell<Settings>,
    /// Names of the records written, in order.
    pub writes: RefCell<Vec<&'static str>>,
}

#[allow(dead_code)]
impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(self, templates: Vec<Template>) -> Self {
        *self.templates.borrow_mut() = templates;
        self
    }

    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        *self.projects.borrow_mut() = projects;
        self
    }
}

impl StateStore for MemoryStateStore {
    fn load_templates(&self) -> Result<Vec<Template>, AppError> {
        Ok(self.templates.borrow().clone())
    }

    fn load_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.borrow().clone())
    }

    fn load_settings(&self) -> Result<Settings, AppError> {
        Ok(self.settings.borrow().clone())
    }

    fn save_templates(&self, templates: &[Template]) -> Result<(), AppError> {
        *self.templates.borrow_mut() = templates.to_vec();
        self.writes.borrow_mut().push("templates");
        Ok(())
    }

    fn save_projects(&self, projects: &[Project]) -> Result<(), AppError> {
        *self.projects.borrow_mut() = projects.to_vec();
        self.writes.borrow_mut().push("projects");
        Ok(())
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), AppError> {
        *self.settings.borrow_mut() = settings.clone();
        self.writes.borrow_mut().push("settings");
        Ok(())
    }
}
