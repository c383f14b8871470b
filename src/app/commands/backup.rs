//! Whole-library export and import.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{Action, AppError, Backup};
use crate::ports::{Clock, StateStore};

/// Sizes of the collections an export wrote or an import brought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupCounts {
    pub projects: usize,
    pub templates: usize,
}

impl From<&Backup> for BackupCounts {
    fn from(backup: &Backup) -> Self {
        Self { projects: backup.projects.len(), templates: backup.templates.len() }
    }
}

/// Write every project and template to `output`, or to a dated file in the
/// working directory.
pub fn export<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    output: Option<PathBuf>,
) -> Result<(PathBuf, BackupCounts), AppError> {
    let state = ctx.state()?;
    let backup = Backup::new(state.projects, state.templates);
    let path = output.unwrap_or_else(|| {
        let date = ctx.clock().now().format("%Y-%m-%d").to_string();
        PathBuf::from(Backup::default_file_name(&date))
    });
    fs::write(&path, backup.to_json()?)?;
    Ok((path, BackupCounts::from(&backup)))
}

/// Read and validate a backup file without applying it.
pub fn load(path: &Path) -> Result<Backup, AppError> {
    let text = fs::read_to_string(path)?;
    Backup::parse(&text)
}

/// Replace all projects and templates with the backup's. Settings are kept.
pub fn import<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    backup: Backup,
) -> Result<BackupCounts, AppError> {
    let counts = BackupCounts::from(&backup);
    ctx.dispatch(Action::ImportBackup(backup))?;
    Ok(counts)
}
