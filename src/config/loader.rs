//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::schema::Settings;
use crate::error::{Result, StayshelfError};

/// Get the default settings file location (`<config dir>/stayshelf/config.yml`).
pub fn default_settings_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("stayshelf").join("config.yml"))
}

/// Get the default data directory (`<local data dir>/stayshelf`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stayshelf")
}

/// Load settings.
///
/// An explicit path must exist. Without one, the default location is used
/// if a file is there; otherwise defaults apply.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    match default_settings_path() {
        Some(path) if path.is_file() => load_settings_file(&path),
        _ => {
            tracing::debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Load and parse a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StayshelfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StayshelfError::Io(e)
        }
    })?;

    tracing::debug!("Loading settings from {:?}", path);
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty file yields defaults. A leading `~/` in `data_dir` expands to
/// the home directory.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let mut settings: Settings =
        serde_yaml::from_str(content).map_err(|e| StayshelfError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    settings.data_dir = settings.data_dir.map(|dir| expand_home(&dir));
    Ok(settings)
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
