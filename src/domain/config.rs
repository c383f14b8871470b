//! User configuration loaded from `config.toml` in the data directory.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::error::AppError;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.export.validate()
    }
}

/// Bake and backup export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// chrono `strftime` pattern for the `Exported:` header line.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { timestamp_format: default_timestamp_format() }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timestamp_format.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "export.timestamp_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::InvalidConfig(format!(
                "export.timestamp_format '{}' is not a valid strftime pattern",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Pretty-print stored JSON records.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { pretty: default_pretty() }
    }
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_pretty() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.storage.pretty);
        assert_eq!(config.export.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn reads_sections() {
        let config = AppConfig::parse(
            "[export]\ntimestamp_format = \"%d/%m/%Y\"\n\n[storage]\npretty = false\n",
        )
        .unwrap();
        assert_eq!(config.export.timestamp_format, "%d/%m/%Y");
        assert!(!config.storage.pretty);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = AppConfig::parse("[storage]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn rejects_blank_timestamp_format() {
        let err = AppConfig::parse("[export]\ntimestamp_format = \"  \"\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_strftime_specifier() {
        let err = AppConfig::parse("[export]\ntimestamp_format = \"%Y-%\"\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
