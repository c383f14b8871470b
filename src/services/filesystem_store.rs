use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{AppError, Project, Settings, Template};
use crate::ports::StateStore;

pub const PROJECTS_FILE: &str = "projects.json";
pub const TEMPLATES_FILE: &str = "templates.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// JSON-file-backed state store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FilesystemStateStore {
    root: PathBuf,
    pretty: bool,
    default_templates: Vec<Template>,
}

impl FilesystemStateStore {
    /// Create a store for the given data directory. Nothing is touched on disk yet.
    pub fn new(root: PathBuf) -> Self {
        Self { root, pretty: true, default_templates: Vec::new() }
    }

    /// Templates returned when no template record exists (or it is corrupt).
    pub fn with_default_templates(mut self, templates: Vec<Template>) -> Self {
        self.default_templates = templates;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Read a record. `Ok(None)` when it is missing or had to be discarded.
    fn read_record<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, AppError> {
        let path = self.record_path(file);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&text) {
            Ok(value) => {
                tracing::debug!(path = %path.display(), "loaded record");
                Ok(Some(value))
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "discarding unreadable record"
                );
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
                Ok(None)
            }
        }
    }

    /// Write a record through a sibling temp file so readers never see a partial file.
    fn write_record<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), AppError> {
        fs::create_dir_all(&self.root)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let path = self.record_path(file);
        let tmp = self.record_path(&format!(".{}.tmp", file));
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), "saved record");
        Ok(())
    }
}

impl StateStore for FilesystemStateStore {
    fn load_templates(&self) -> Result<Vec<Template>, AppError> {
        Ok(self.read_record(TEMPLATES_FILE)?.unwrap_or_else(|| self.default_templates.clone()))
    }

    fn load_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.read_record(PROJECTS_FILE)?.unwrap_or_default())
    }

    fn load_settings(&self) -> Result<Settings, AppError> {
        Ok(self.read_record(SETTINGS_FILE)?.unwrap_or_default())
    }

    fn save_templates(&self, templates: &[Template]) -> Result<(), AppError> {
        self.write_record(TEMPLATES_FILE, templates)
    }

    fn save_projects(&self, projects: &[Project]) -> Result<(), AppError> {
        self.write_record(PROJECTS_FILE, projects)
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), AppError> {
        self.write_record(SETTINGS_FILE, settings)
    }
}
