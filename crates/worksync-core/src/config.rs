use crate::error::SyncError;
use crate::models::SyncOptionsPatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = "worksync.yaml";

/// The local declarative file. Top-level fields form one partial settings
/// layer; `overrides` holds higher-precedence blocks keyed by
/// `{remote}:{workspace_id}:{repo}` or the workspace-level
/// `{remote}:{workspace_id}:*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(flatten)]
    pub base: SyncOptionsPatch,
    // Always written, even when empty, so the file round-trips stably.
    #[serde(default)]
    pub overrides: BTreeMap<String, SyncOptionsPatch>,
}

/// Walk parent directories looking for the declarative file.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// A missing file is an absent configuration layer, not an error.
/// Malformed content aborts resolution with a typed parse error.
pub fn read_config_file(path: &Path) -> Result<LocalConfig, SyncError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "no configuration file found, using built-in defaults"
            );
            return Ok(LocalConfig::default());
        }
        Err(source) => return Err(SyncError::io(path, source)),
    };

    serde_yaml::from_str(&text).map_err(|e| SyncError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn write_config_file(path: &Path, config: &LocalConfig) -> Result<(), SyncError> {
    let payload = serde_yaml::to_string(config).map_err(|e| SyncError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, payload).map_err(|e| SyncError::io(path, e))
}
