use super::find_project;
use crate::app::AppContext;
use crate::domain::{Action, AppError, Project, Template, VariableScope, VariableTable};
use crate::ports::{Clock, StateStore};

/// One variable of a project as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRow {
    pub scope: VariableScope,
    pub id: String,
    pub label: String,
    pub value: String,
}

impl VariableRow {
    fn collect(project: &Project, template: &Template) -> Vec<Self> {
        let table = VariableTable::new(project, template);
        table
            .entries()
            .map(|(scope, input)| VariableRow {
                scope,
                id: input.id.clone(),
                label: input.label.clone(),
                value: table.value(&input.id).to_string(),
            })
            .collect()
    }
}

/// Globals then locals of a project, with their positional tags' scopes.
pub fn list<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
) -> Result<Vec<VariableRow>, AppError> {
    let state = ctx.state()?;
    let project = find_project(&state, project_key)?;
    let template = state.template_for(project)?;
    Ok(VariableRow::collect(project, template))
}

/// Set a variable's value. `key` is an input id or label, globals searched first.
pub fn set<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    key: &str,
    value: &str,
) -> Result<VariableRow, AppError> {
    let state = ctx.state()?;
    let project = find_project(&state, project_key)?;
    let template = state.template_for(project)?;
    let (scope, input) = VariableTable::new(project, template)
        .lookup(key)
        .ok_or_else(|| AppError::InputNotFound(key.to_string()))?;
    let row = VariableRow {
        scope,
        id: input.id.clone(),
        label: input.label.clone(),
        value: value.to_string(),
    };

    ctx.dispatch(Action::SetInputValue {
        project_id: project.id.clone(),
        input_id: row.id.clone(),
        value: row.value.clone(),
    })?;
    Ok(row)
}

/// Add a project-local variable. `Ok(None)` when the label is blank.
pub fn add<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    label: &str,
) -> Result<Option<VariableRow>, AppError> {
    let project_id = find_project(&ctx.state()?, project_key)?.id.clone();
    let state = ctx.dispatch(Action::AddLocalVariable {
        project_id: project_id.clone(),
        label: label.to_string(),
    })?;
    let project = state.project(&project_id)?;
    if label.trim().is_empty() {
        return Ok(None);
    }

    let position = project.custom_inputs.len().saturating_sub(1);
    Ok(project.custom_inputs.last().map(|input| VariableRow {
        scope: VariableScope::Local(position),
        id: input.id.clone(),
        label: input.label.clone(),
        value: String::new(),
    }))
}

/// Remove a project-local variable by id or label.
pub fn remove<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    key: &str,
) -> Result<VariableRow, AppError> {
    let state = ctx.state()?;
    let project = find_project(&state, project_key)?;
    let input =
        project.find_local_input(key).ok_or_else(|| AppError::InputNotFound(key.to_string()))?;
    let position = project.custom_inputs.iter().position(|i| i.id == input.id).unwrap_or_default();
    let row = VariableRow {
        scope: VariableScope::Local(position),
        id: input.id.clone(),
        label: input.label.clone(),
        value: project.value(&input.id).to_string(),
    };

    ctx.dispatch(Action::RemoveLocalVariable {
        project_id: project.id.clone(),
        input_id: row.id.clone(),
    })?;
    Ok(row)
}
