use std::io;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Returns the config directory: `~/.config/mwtm/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("mwtm"))
}

/// Returns the config file path: `~/.config/mwtm/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(None)` if the file does not exist. Loaded values are
/// clamped via [`Config::validate`].
pub fn try_load() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    load_from(&path)
}

pub(super) fn load_from(path: &Path) -> Result<Option<Config>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(config_error(path, e)),
    };
    let mut config: Config = toml::from_str(&content).map_err(|e| config_error(path, e))?;
    config.validate();
    Ok(Some(config))
}

fn config_error(path: &Path, e: impl std::fmt::Display) -> Error {
    Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
