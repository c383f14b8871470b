//! API facade: builds the filesystem-backed context commands run against.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::config::{load_config, resolve_data_dir};
use crate::domain::AppError;
use crate::services::{FilesystemStateStore, SystemClock, builtin_templates};

pub use crate::app::commands::backup::BackupCounts;
pub use crate::app::commands::bake::BakedDocument;
pub use crate::app::commands::library::{LibraryGroup, ProjectSummary};
pub use crate::app::commands::render::RenderOutcome;
pub use crate::app::commands::step::StepRef;
pub use crate::app::commands::template::{DeletedTemplate, TemplateSummary};
pub use crate::app::commands::variable::VariableRow;

pub type FilesystemContext = AppContext<FilesystemStateStore, SystemClock>;

/// Context over the data directory chosen by `data_dir`, `SPLICER_HOME` or `$HOME/.splicer`.
pub fn context(data_dir: Option<PathBuf>) -> Result<FilesystemContext, AppError> {
    let root = resolve_data_dir(data_dir)?;
    let config = load_config(&root)?;
    tracing::debug!(data_dir = %root.display(), "opening data directory");
    let store = FilesystemStateStore::new(root)
        .with_pretty(config.storage.pretty)
        .with_default_templates(builtin_templates()?);
    Ok(AppContext::new(store, SystemClock, config))
}
