use std::io;

use thiserror::Error;

/// Library-wide error type for splicer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON serialization failure while writing a record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file loaded but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No template with the given id (or the project's template was deleted).
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// No project with the given id.
    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    /// Step key matched no step of the template.
    #[error("Step '{step}' not found in template '{template}'")]
    StepNotFound { template: String, step: String },

    /// Input key matched neither a global nor a local variable.
    #[error("Variable '{0}' not found")]
    InputNotFound(String),

    /// A local variable with this label already exists in the project.
    #[error("A variable named '{0}' already exists")]
    DuplicateVariableName(String),

    /// Backup document does not have the expected shape.
    #[error("Invalid backup file: {0}")]
    ImportFormat(String),

    /// Settings value outside its allowed set.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// Embedded asset missing or unreadable.
    #[error("Internal error: {0}")]
    Internal(String),

    /// User declined a confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Json(_)
            | AppError::TomlParseError(_)
            | AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::ImportFormat(_)
            | AppError::InvalidSetting(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_)
            | AppError::ProjectNotFound(_)
            | AppError::StepNotFound { .. }
            | AppError::InputNotFound(_) => io::ErrorKind::NotFound,
            AppError::DuplicateVariableName(_) => io::ErrorKind::AlreadyExists,
            AppError::Internal(_) => io::ErrorKind::Other,
            AppError::Cancelled => io::ErrorKind::Interrupted,
        }
    }
}
