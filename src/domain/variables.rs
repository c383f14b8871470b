//! Variable table: global (template) and local (project) inputs in resolution order.

use super::error::AppError;
use super::ids::{LOCAL_PREFIX, Timestamp, fresh_id};
use super::project::Project;
use super::resolver::{Binding, global_tag, local_tag};
use super::template::{Input, Template};

/// Which placeholder family an input belongs to, with its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableScope {
    Global(usize),
    Local(usize),
}

impl VariableScope {
    /// Positional tag for this slot, e.g. `<0>` or `<l1>`.
    pub fn tag(&self) -> String {
        match self {
            VariableScope::Global(index) => global_tag(*index),
            VariableScope::Local(index) => local_tag(*index),
        }
    }
}

/// Read-only view over a project's inputs and their current values.
#[derive(Debug, Clone, Copy)]
pub struct VariableTable<'a> {
    project: &'a Project,
    template: &'a Template,
}

impl<'a> VariableTable<'a> {
    pub fn new(project: &'a Project, template: &'a Template) -> Self {
        Self { project, template }
    }

    pub fn globals(&self) -> &'a [Input] {
        &self.template.inputs
    }

    pub fn locals(&self) -> &'a [Input] {
        &self.project.custom_inputs
    }

    pub fn value(&self, input_id: &str) -> &'a str {
        self.project.value(input_id)
    }

    pub fn global_bindings(&self) -> Vec<Binding<'a>> {
        self.bindings(self.globals())
    }

    pub fn local_bindings(&self) -> Vec<Binding<'a>> {
        self.bindings(self.locals())
    }

    fn bindings(&self, inputs: &'a [Input]) -> Vec<Binding<'a>> {
        inputs.iter().map(|input| Binding::new(&input.label, self.value(&input.id))).collect()
    }

    /// Every input with its scope, globals first.
    pub fn entries(&self) -> impl Iterator<Item = (VariableScope, &'a Input)> + 'a {
        let globals =
            self.globals().iter().enumerate().map(|(i, input)| (VariableScope::Global(i), input));
        let locals =
            self.locals().iter().enumerate().map(|(i, input)| (VariableScope::Local(i), input));
        globals.chain(locals)
    }

    /// Find an input by id, then by label, searching globals before locals.
    pub fn lookup(&self, key: &str) -> Option<(VariableScope, &'a Input)> {
        self.entries()
            .find(|(_, input)| input.id == key)
            .or_else(|| self.entries().find(|(_, input)| input.label == key))
    }
}

/// Result of a local-variable insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalVariableOutcome {
    Added { project: Project, id: String },
    /// The label was blank after trimming; nothing to add.
    Skipped,
}

/// Append a project-local input labelled `label`.
///
/// Labels are compared case-sensitively against existing local labels only.
pub fn add_local_variable(
    project: &Project,
    template: Option<&Template>,
    label: &str,
    now: Timestamp,
) -> Result<LocalVariableOutcome, AppError> {
    let label = label.trim();
    if label.is_empty() {
        return Ok(LocalVariableOutcome::Skipped);
    }
    if project.custom_inputs.iter().any(|input| input.label == label) {
        return Err(AppError::DuplicateVariableName(label.to_string()));
    }

    let id = fresh_id(LOCAL_PREFIX, now, |candidate| {
        project.custom_inputs.iter().any(|i| i.id == candidate)
            || template.is_some_and(|t| t.inputs.iter().any(|i| i.id == candidate))
    });

    let mut next = project.clone();
    next.custom_inputs.push(Input::new(id.clone(), label));
    next.touch(now);
    Ok(LocalVariableOutcome::Added { project: next, id })
}

/// Remove a local input by id. Returns `None` when no local input has that id.
///
/// Later locals move up one position, so existing `<lN>` tags past the removed
/// slot now point at a different variable.
pub fn remove_local_variable(project: &Project, input_id: &str, now: Timestamp) -> Option<Project> {
    let position = project.custom_inputs.iter().position(|i| i.id == input_id)?;
    let mut next = project.clone();
    next.custom_inputs.remove(position);
    next.touch(now);
    Some(next)
}
