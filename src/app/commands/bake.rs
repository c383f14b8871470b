use std::fs;
use std::path::PathBuf;

use super::find_project;
use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::bake::{bake, default_file_name};
use crate::ports::{Clock, StateStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakedDocument {
    pub file_name: String,
    pub text: String,
}

/// Flatten a project into its plain-text export, stamped with the current time.
pub fn render<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
) -> Result<BakedDocument, AppError> {
    let state = ctx.state()?;
    let project = find_project(&state, project_key)?;
    let template = state.template_for(project)?;
    let exported_at =
        ctx.clock().now().format(&ctx.config().export.timestamp_format).to_string();
    Ok(BakedDocument { file_name: default_file_name(project), text: bake(project, template, &exported_at) })
}

/// Bake a project to `output`, or to `<name>_baked.txt` in the working directory.
pub fn write<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    project_key: &str,
    output: Option<PathBuf>,
) -> Result<PathBuf, AppError> {
    let document = render(ctx, project_key)?;
    let path = output.unwrap_or_else(|| PathBuf::from(&document.file_name));
    fs::write(&path, document.text)?;
    tracing::debug!(path = %path.display(), "baked project");
    Ok(path)
}
