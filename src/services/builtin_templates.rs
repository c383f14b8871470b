use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Template};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates shipped with the binary, used when no templates are stored yet.
pub fn builtin_templates() -> Result<Vec<Template>, AppError> {
    let mut files: Vec<_> = TEMPLATES_DIR
        .files()
        .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let mut templates = Vec::with_capacity(files.len());
    for file in files {
        let path = file.path().display().to_string();
        let content = file
            .contents_utf8()
            .ok_or_else(|| AppError::Internal(format!("Built-in template {} is not UTF-8", path)))?;
        let template: Template = serde_json::from_str(content).map_err(|e| {
            AppError::Internal(format!("Built-in template {} is malformed: {}", path, e))
        })?;
        templates.push(template);
    }

    if templates.is_empty() {
        return Err(AppError::Internal("No built-in templates are embedded".into()));
    }
    Ok(templates)
}
