//! Data directory resolution and `config.toml` loading.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::{AppConfig, CONFIG_FILE};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "SPLICER_HOME";

const DEFAULT_DIR_NAME: &str = ".splicer";

/// Pick the data directory: explicit flag, then `SPLICER_HOME`, then `$HOME/.splicer`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::config_error("HOME is not set; pass --data-dir or set SPLICER_HOME"))?;
    Ok(PathBuf::from(home).join(DEFAULT_DIR_NAME))
}

/// Load `config.toml` from `data_dir`. A missing file yields defaults.
pub fn load_config(data_dir: &Path) -> Result<AppConfig, AppError> {
    let path = data_dir.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded config");
            AppConfig::parse(&content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(err) => Err(err.into()),
    }
}
