//! Template model and template-authoring operations.
//!
//! Authoring operations never mutate in place: each returns a new
//! [`Template`] that the caller swaps into its collection under the same id.

use serde::{Deserialize, Serialize};

use super::ids::{INPUT_PREFIX, STEP_PREFIX, TEMPLATE_PREFIX, Timestamp, fresh_id};
use super::project::Project;
use super::step_chain;

/// A declared variable. Used both for template inputs and project-local inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Input {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), default_value: None }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// One stage of a prompt pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl Step {
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), description: None, content: content.into() }
    }
}

/// Reusable multi-step prompt blueprint.
///
/// `inputs` order defines the `<0>`, `<1>`, ... tags and `steps` order defines
/// the `[[1]]`, `[[2]]`, ... tags. Both are read at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Partial update for a template input. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPatch {
    pub label: Option<String>,
    /// `Some(None)` clears the default value.
    pub default_value: Option<Option<String>>,
}

/// Partial update for a template step. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepPatch {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub content: Option<String>,
}

impl Template {
    /// Starter template offered by "new template".
    pub fn blank(now: Timestamp, taken: impl Fn(&str) -> bool) -> Self {
        Self {
            id: fresh_id(TEMPLATE_PREFIX, now, taken),
            name: "New template".to_string(),
            inputs: vec![Input::new(format!("{}_{}_0", INPUT_PREFIX, now), "Variable 1")],
            steps: vec![Step::new(format!("{}_{}_0", STEP_PREFIX, now), "Step 1", "Content <0>")],
        }
    }

    /// Deep copy under a fresh `tmpl_<now>_copy` id.
    pub fn duplicate(&self, now: Timestamp, taken: impl Fn(&str) -> bool) -> Self {
        let base = format!("{}_{}_copy", TEMPLATE_PREFIX, now);
        let id = if taken(&base) { fresh_id(&base, 1, &taken) } else { base };
        Self { id, name: format!("{} (copy)", self.name), ..self.clone() }
    }

    /// Build a new template from a project's current effective state.
    ///
    /// Project values become defaults, local inputs are appended after the
    /// global ones, and step overrides become the step content.
    pub fn extract_from(
        project: &Project,
        source: &Template,
        now: Timestamp,
        taken: impl Fn(&str) -> bool,
    ) -> Self {
        let globals = source.inputs.iter().map(|input| {
            let value = project.input_values.get(&input.id).filter(|v| !v.is_empty());
            Input {
                default_value: value.cloned().or_else(|| input.default_value.clone()),
                ..input.clone()
            }
        });
        let locals = project.custom_inputs.iter().map(|input| Input {
            default_value: project.input_values.get(&input.id).cloned(),
            ..input.clone()
        });

        let steps = source
            .steps
            .iter()
            .map(|step| Step {
                content: step_chain::effective_step_content(project, step).to_string(),
                ..step.clone()
            })
            .collect();

        Self {
            id: fresh_id(TEMPLATE_PREFIX, now, taken),
            name: format!("{} (extracted)", project.name),
            inputs: globals.chain(locals).collect(),
            steps,
        }
    }

    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// Look a step up by id, then by name, then by 1-based position.
    pub fn find_step(&self, key: &str) -> Option<&Step> {
        self.step(key).or_else(|| self.steps.iter().find(|s| s.name == key)).or_else(|| {
            key.parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .and_then(|n| self.steps.get(n - 1))
        })
    }

    /// Look an input up by id, then by label.
    pub fn find_input(&self, key: &str) -> Option<&Input> {
        self.inputs
            .iter()
            .find(|i| i.id == key)
            .or_else(|| self.inputs.iter().find(|i| i.label == key))
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }

    pub fn with_input_added(
        &self,
        label: impl Into<String>,
        default_value: Option<String>,
        now: Timestamp,
    ) -> Self {
        let id = fresh_id(INPUT_PREFIX, now, |c| self.inputs.iter().any(|i| i.id == c));
        let mut next = self.clone();
        next.inputs.push(Input { id, label: label.into(), default_value });
        next
    }

    /// Returns `None` when no input has `input_id`.
    pub fn with_input_updated(&self, input_id: &str, patch: InputPatch) -> Option<Self> {
        let mut next = self.clone();
        let input = next.inputs.iter_mut().find(|i| i.id == input_id)?;
        if let Some(label) = patch.label {
            input.label = label;
        }
        if let Some(default_value) = patch.default_value {
            input.default_value = default_value;
        }
        Some(next)
    }

    /// Returns `None` when no input has `input_id`.
    pub fn with_input_removed(&self, input_id: &str) -> Option<Self> {
        let position = self.inputs.iter().position(|i| i.id == input_id)?;
        let mut next = self.clone();
        next.inputs.remove(position);
        Some(next)
    }

    pub fn with_step_added(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        let id = fresh_id(STEP_PREFIX, now, |c| self.steps.iter().any(|s| s.id == c));
        let mut next = self.clone();
        next.steps.push(Step::new(id, name, content));
        next
    }

    /// Returns `None` when no step has `step_id`.
    pub fn with_step_updated(&self, step_id: &str, patch: StepPatch) -> Option<Self> {
        let mut next = self.clone();
        let step = next.steps.iter_mut().find(|s| s.id == step_id)?;
        if let Some(name) = patch.name {
            step.name = name;
        }
        if let Some(description) = patch.description {
            step.description = description;
        }
        if let Some(content) = patch.content {
            step.content = content;
        }
        Some(next)
    }

    /// Returns `None` when no step has `step_id`.
    pub fn with_step_removed(&self, step_id: &str) -> Option<Self> {
        let position = self.steps.iter().position(|s| s.id == step_id)?;
        let mut next = self.clone();
        next.steps.remove(position);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::StepOverride;

    fn sample() -> Template {
        Template {
            id: "t1".into(),
            name: "Story".into(),
            inputs: vec![
                Input::new("topic", "Topic").with_default("cats"),
                Input::new("mood", "Mood"),
            ],
            steps: vec![Step::new("s1", "Intro", "About <0>"), Step::new("s2", "Next", "[[1]]")],
        }
    }

    #[test]
    fn blank_template_references_its_first_input() {
        let t = Template::blank(5, |_| false);
        assert_eq!(t.id, "tmpl_5");
        assert_eq!(t.inputs[0].label, "Variable 1");
        assert_eq!(t.steps[0].content, "Content <0>");
    }

    #[test]
    fn duplicate_keeps_structure_under_new_id() {
        let t = sample();
        let copy = t.duplicate(9, |_| false);
        assert_eq!(copy.id, "tmpl_9_copy");
        assert_eq!(copy.name, "Story (copy)");
        assert_eq!(copy.steps, t.steps);
        assert_eq!(copy.inputs, t.inputs);
    }

    #[test]
    fn find_step_accepts_id_name_or_position() {
        let t = sample();
        assert_eq!(t.find_step("s2").map(|s| s.id.as_str()), Some("s2"));
        assert_eq!(t.find_step("Intro").map(|s| s.id.as_str()), Some("s1"));
        assert_eq!(t.find_step("2").map(|s| s.id.as_str()), Some("s2"));
        assert!(t.find_step("0").is_none());
        assert!(t.find_step("3").is_none());
    }

    #[test]
    fn find_input_prefers_id_over_label() {
        let mut t = sample();
        t.inputs.push(Input::new("Mood", "Other"));
        assert_eq!(t.find_input("Mood").map(|i| i.id.as_str()), Some("Mood"));
        assert_eq!(t.find_input("Topic").map(|i| i.id.as_str()), Some("topic"));
    }

    #[test]
    fn extract_promotes_values_and_overrides() {
        let t = sample();
        let mut p = Project::from_template(&t, "Draft", 1, |_| false);
        p.input_values.insert("mood".into(), "calm".into());
        p.custom_inputs.push(Input::new("local_1", "Tone"));
        p.input_values.insert("local_1".into(), "dry".into());
        p.step_overrides.insert("s2".into(), StepOverride { content: Some("Custom".into()) });

        let extracted = Template::extract_from(&p, &t, 2, |_| false);

        assert_eq!(extracted.name, "Draft (extracted)");
        assert_eq!(extracted.inputs.len(), 3);
        assert_eq!(extracted.inputs[0].default_value.as_deref(), Some("cats"));
        assert_eq!(extracted.inputs[1].default_value.as_deref(), Some("calm"));
        assert_eq!(extracted.inputs[2].label, "Tone");
        assert_eq!(extracted.inputs[2].default_value.as_deref(), Some("dry"));
        assert_eq!(extracted.steps[0].content, "About <0>");
        assert_eq!(extracted.steps[1].content, "Custom");
    }

    #[test]
    fn editing_unknown_ids_reports_none() {
        let t = sample();
        assert!(t.with_input_removed("nope").is_none());
        assert!(t.with_step_updated("nope", StepPatch::default()).is_none());
    }

    #[test]
    fn step_patch_updates_only_given_fields() {
        let t = sample();
        let patch = StepPatch { content: Some("New".into()), ..StepPatch::default() };
        let next = t.with_step_updated("s1", patch).unwrap();
        assert_eq!(next.steps[0].content, "New");
        assert_eq!(next.steps[0].name, "Intro");
        assert_eq!(t.steps[0].content, "About <0>");
    }

    #[test]
    fn added_inputs_get_unique_ids() {
        let t = sample().with_input_added("A", None, 3).with_input_added("B", None, 3);
        assert_eq!(t.inputs[2].id, "input_3");
        assert_eq!(t.inputs[3].id, "input_3_1");
    }

    #[test]
    fn deserializes_camel_case_records() {
        let json = r#"{"id":"t","name":"n","inputs":[{"id":"a","label":"A","defaultValue":"x"}],
            "steps":[{"id":"s","name":"S","content":"c"}]}"#;
        let t: Template = serde_json::from_str(json).unwrap();
        assert_eq!(t.inputs[0].default_value.as_deref(), Some("x"));
        assert!(t.steps[0].description.is_none());
    }
}
