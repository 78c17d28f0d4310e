//! Configuration loading (imperative shell over [`pylon_core::config`]).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use pylon_core::config::{self, Settings};

use crate::error::{ClientError, Result};

/// File name of the rc file in the home directory.
pub const RC_FILE_NAME: &str = ".pylonrc";

/// Returns `~/.pylonrc`, or `None` when the home directory cannot be found.
pub fn default_rc_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(RC_FILE_NAME))
}

/// Reads an rc file. A missing file yields `Ok(None)`.
pub fn read_rc(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), "loaded rc file");
            Ok(Some(contents))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no rc file, using defaults");
            Ok(None)
        }
        Err(source) => Err(ClientError::ConfigFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolves the configuration for this invocation.
///
/// Reads `path` (or `~/.pylonrc` when `None`) and overlays the `PYLON_*`
/// environment variables. Only I/O failures other than "not found" are
/// reported.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let path = path.map(Path::to_path_buf).or_else(default_rc_path);
    let contents = match &path {
        Some(path) => read_rc(path)?,
        None => {
            tracing::debug!("home directory unavailable, skipping rc file");
            None
        }
    };
    Ok(config::resolve(contents.as_deref(), |key| {
        std::env::var(key).ok()
    }))
}
