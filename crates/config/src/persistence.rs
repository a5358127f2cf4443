//! Settings file discovery, reading, and writing.
//!
//! Settings are read as JSON5 (which also accepts plain JSON) and written
//! back as pretty-printed JSON.
//!
//! # File Locations
//!
//! Candidates are tried in the following order; the first existing file wins:
//!
//! 1. Working directory: `./nextbday.json5`, `./nextbday.json`
//! 2. User config directory: `~/.config/nextbday/config.json5`,
//!    `~/.config/nextbday/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["nextbday.json5", "nextbday.json"];

/// Application directory inside the platform config directory.
const APP_DIR: &str = "nextbday";

/// File names looked up in the application config directory.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists every settings file candidate, in lookup order.
///
/// `user_dir` is the platform config directory (for instance
/// `~/.config`); it is skipped when unknown.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use nextbday_config::persistence::settings_candidates;
///
/// let candidates = settings_candidates(Path::new("."), None);
/// assert_eq!(candidates.len(), 2);
/// assert!(candidates[0].ends_with("nextbday.json5"));
/// ```
#[must_use]
pub fn settings_candidates(local_dir: &Path, user_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(APP_DIR).join(name)));
    local.chain(user).collect()
}

/// Finds the settings file to load, if any.
///
/// Searches the working directory, then the user config directory.
#[must_use]
pub fn find_settings_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir();
    settings_candidates(Path::new("."), user_dir.as_deref())
        .into_iter()
        .find(|path| path.exists())
}

/// Reads and parses a JSON5 (or JSON) file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
pub fn read_json5_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file (or one of
/// its parent directories) cannot be written.
pub fn write_json_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}
