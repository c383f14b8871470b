//! Application commands: load state, apply an action, persist, report.

pub mod backup;
pub mod bake;
pub mod library;
pub mod project;
pub mod render;
pub mod settings;
pub mod step;
pub mod template;
pub mod variable;

use crate::domain::{AppError, AppState, Project, Template};

/// Find a project by id, falling back to its name.
pub(crate) fn find_project<'a>(state: &'a AppState, key: &str) -> Result<&'a Project, AppError> {
    state
        .projects
        .iter()
        .find(|p| p.id == key)
        .or_else(|| state.projects.iter().find(|p| p.name == key))
        .ok_or_else(|| AppError::ProjectNotFound(key.to_string()))
}

/// Find a template by id, falling back to its name.
pub(crate) fn find_template<'a>(state: &'a AppState, key: &str) -> Result<&'a Template, AppError> {
    state
        .templates
        .iter()
        .find(|t| t.id == key)
        .or_else(|| state.templates.iter().find(|t| t.name == key))
        .ok_or_else(|| AppError::TemplateNotFound(key.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::app::AppContext;
    use crate::domain::{AppConfig, Input, Step, Template};
    use crate::testing::{FixedClock, MemoryStateStore};

    pub type TestContext = AppContext<MemoryStateStore, FixedClock>;

    pub fn story_template() -> Template {
        Template {
            id: "t_story".into(),
            name: "Story".into(),
            inputs: vec![Input::new("topic", "Topic").with_default("cats")],
            steps: vec![
                Step::new("s1", "Intro", "A story about <0> (<Topic>)"),
                Step::new("s2", "Follow", "Ref: [[1]]"),
            ],
        }
    }

    pub fn context() -> TestContext {
        AppContext::new(
            MemoryStateStore::new().with_templates(vec![story_template()]),
            FixedClock::at(1_700_000_000_000),
            AppConfig::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;

    #[test]
    fn lookup_prefers_id_over_name() {
        let mut a = fixtures::story_template();
        a.id = "Story".into();
        a.name = "Other".into();
        let b = fixtures::story_template();
        let state = AppState::new(vec![b, a], vec![], Settings::default());
        assert_eq!(find_template(&state, "Story").unwrap().name, "Other");
        assert_eq!(find_template(&state, "t_story").unwrap().name, "Story");
        assert!(matches!(find_template(&state, "x"), Err(AppError::TemplateNotFound(_))));
        assert!(matches!(find_project(&state, "x"), Err(AppError::ProjectNotFound(_))));
    }
}
