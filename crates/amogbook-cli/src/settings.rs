//! Loading [`NotebookConfig`] from a TOML file

use amogbook_core::NotebookConfig;
use std::path::{Path, PathBuf};

/// Config file could not be used
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File unreadable
    #[error("cannot read {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid config table
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Read config from `path`, or defaults when no path is given
///
/// # Errors
/// Returns [`SettingsError`] if the file cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<NotebookConfig, SettingsError> {
    let Some(path) = path else {
        return Ok(NotebookConfig::default());
    };

    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}
