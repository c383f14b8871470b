//! Placeholder resolution.
//!
//! Three placeholder families are recognised, each by plain substring
//! replacement (no tokenizer, no word boundaries):
//!
//! | Family        | Positional  | Named          |
//! |---------------|-------------|----------------|
//! | global input  | `<0>`, `<1>` | `<label>`     |
//! | local input   | `<l1>`, `<l2>` | `<label>`   |
//! | step output   | `[[1]]`, `[[2]]` | `[[name]]` |
//!
//! Passes run in the order global, local, step. Text introduced by one pass is
//! visible to the passes after it. Tags with no matching binding are left in
//! place.

use super::project::Project;
use super::template::Template;
use super::variables::VariableTable;

/// A label/value pair occupying one position in a placeholder family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

impl<'a> Binding<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self { label, value }
    }
}

/// Ordered bindings for the three placeholder families.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext<'a> {
    pub globals: Vec<Binding<'a>>,
    pub locals: Vec<Binding<'a>>,
    pub steps: Vec<Binding<'a>>,
}

impl<'a> ResolutionContext<'a> {
    /// Bindings for `project` as instantiated from `template`.
    ///
    /// Step bindings carry each step's recorded output, not its content.
    pub fn for_project(project: &'a Project, template: &'a Template) -> Self {
        let table = VariableTable::new(project, template);
        let steps = template
            .steps
            .iter()
            .map(|step| {
                let output = project.step_outputs.get(&step.id).map(String::as_str).unwrap_or("");
                Binding::new(&step.name, output)
            })
            .collect();

        Self { globals: table.global_bindings(), locals: table.local_bindings(), steps }
    }
}

pub fn global_tag(index: usize) -> String {
    format!("<{}>", index)
}

/// Local tags are 1-based: position 0 is `<l1>`.
pub fn local_tag(index: usize) -> String {
    format!("<l{}>", index + 1)
}

/// Step tags are 1-based: position 0 is `[[1]]`.
pub fn step_tag(index: usize) -> String {
    format!("[[{}]]", index + 1)
}

pub fn label_tag(label: &str) -> String {
    format!("<{}>", label)
}

pub fn step_name_tag(name: &str) -> String {
    format!("[[{}]]", name)
}

/// Interpolate `raw` against `context`.
pub fn resolve(raw: &str, context: &ResolutionContext<'_>) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut result = raw.to_string();

    for (index, binding) in context.globals.iter().enumerate() {
        result = result.replace(&global_tag(index), binding.value);
        result = result.replace(&label_tag(binding.label), binding.value);
    }

    for (index, binding) in context.locals.iter().enumerate() {
        result = result.replace(&local_tag(index), binding.value);
        result = result.replace(&label_tag(binding.label), binding.value);
    }

    for (index, binding) in context.steps.iter().enumerate() {
        result = result.replace(&step_tag(index), binding.value);
        result = result.replace(&step_name_tag(binding.label), binding.value);
    }

    result
}
