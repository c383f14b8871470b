//! Project model: a template instantiated with concrete values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{PROJECT_PREFIX, Timestamp, fresh_id};
use super::template::{Input, Template};

/// Default name given to a project created without one.
pub const DEFAULT_PROJECT_NAME: &str = "New project";

/// Per-project replacement of a step's template content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub created_at: Timestamp,
    pub last_modified_at: Timestamp,
    #[serde(default)]
    pub last_opened_at: Timestamp,
    #[serde(default)]
    pub input_values: BTreeMap<String, String>,
    #[serde(default)]
    pub custom_inputs: Vec<Input>,
    #[serde(default)]
    pub step_outputs: BTreeMap<String, String>,
    #[serde(default)]
    pub step_overrides: BTreeMap<String, StepOverride>,
}

impl Project {
    /// Instantiate `template`, copying every non-empty default into the value table.
    pub fn from_template(
        template: &Template,
        name: impl Into<String>,
        now: Timestamp,
        taken: impl Fn(&str) -> bool,
    ) -> Self {
        let input_values = template
            .inputs
            .iter()
            .filter_map(|input| {
                input
                    .default_value
                    .as_ref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (input.id.clone(), v.clone()))
            })
            .collect();

        Self {
            id: fresh_id(PROJECT_PREFIX, now, taken),
            template_id: template.id.clone(),
            name: name.into(),
            created_at: now,
            last_modified_at: now,
            last_opened_at: now,
            input_values,
            custom_inputs: Vec::new(),
            step_outputs: BTreeMap::new(),
            step_overrides: BTreeMap::new(),
        }
    }

    /// Current value for an input id, empty when unset.
    pub fn value(&self, input_id: &str) -> &str {
        self.input_values.get(input_id).map(String::as_str).unwrap_or("")
    }

    /// Record a modification. Never moves `last_modified_at` before `created_at`.
    pub fn touch(&mut self, now: Timestamp) {
        self.last_modified_at = now.max(self.created_at);
    }

    /// Copy marked as opened at `now`; modification time is left alone.
    pub fn opened(&self, now: Timestamp) -> Self {
        Self { last_opened_at: now, ..self.clone() }
    }

    pub fn renamed(&self, name: impl Into<String>, now: Timestamp) -> Self {
        let mut next = Self { name: name.into(), ..self.clone() };
        next.touch(now);
        next
    }

    /// Copy with `input_id` set to `value`. The id is not checked against the template.
    pub fn with_input_value(
        &self,
        input_id: impl Into<String>,
        value: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        let mut next = self.clone();
        next.input_values.insert(input_id.into(), value.into());
        next.touch(now);
        next
    }

    /// Look a local input up by id, then by label.
    pub fn find_local_input(&self, key: &str) -> Option<&Input> {
        self.custom_inputs
            .iter()
            .find(|i| i.id == key)
            .or_else(|| self.custom_inputs.iter().find(|i| i.label == key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::Step;

    fn template() -> Template {
        Template {
            id: "t".into(),
            name: "T".into(),
            inputs: vec![
                Input::new("topic", "Topic").with_default("cats"),
                Input::new("empty", "Empty").with_default(""),
                Input::new("none", "None"),
            ],
            steps: vec![Step::new("s1", "One", "<0>")],
        }
    }

    #[test]
    fn copies_only_non_empty_defaults() {
        let p = Project::from_template(&template(), "P", 100, |_| false);
        assert_eq!(p.id, "proj_100");
        assert_eq!(p.template_id, "t");
        assert_eq!(p.input_values.len(), 1);
        assert_eq!(p.value("topic"), "cats");
        assert_eq!(p.value("none"), "");
        assert_eq!((p.created_at, p.last_modified_at, p.last_opened_at), (100, 100, 100));
    }

    #[test]
    fn opening_leaves_modification_time() {
        let p = Project::from_template(&template(), "P", 100, |_| false);
        let opened = p.opened(500);
        assert_eq!(opened.last_opened_at, 500);
        assert_eq!(opened.last_modified_at, 100);
    }

    #[test]
    fn modification_never_precedes_creation() {
        let p = Project::from_template(&template(), "P", 100, |_| false);
        let edited = p.with_input_value("topic", "dogs", 50);
        assert_eq!(edited.last_modified_at, 100);
        assert_eq!(edited.value("topic"), "dogs");
        assert_eq!(p.value("topic"), "cats");
    }

    #[test]
    fn loads_records_without_optional_collections() {
        let json = r#"{"id":"p","templateId":"t","name":"n","createdAt":1,"lastModifiedAt":2,
            "inputValues":{"a":"b"},"stepOutputs":{},"stepOverrides":{"s":{}}}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert!(p.custom_inputs.is_empty());
        assert_eq!(p.last_opened_at, 0);
        assert_eq!(p.step_overrides["s"].content, None);
    }
}
