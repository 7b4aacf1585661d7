use crate::error::SyncError;
use crate::models::{InclusionState, RepositorySettings};
use serde::Deserialize;

/// Parse a textual inclusion-set payload as handed over by the remote
/// service or a `--with-backend-settings` style flag.
pub fn parse_settings_payload(text: &str) -> Result<InclusionState, SyncError> {
    serde_json::from_str(text).map_err(|e| SyncError::SettingsPayload(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct RepositoriesPayload {
    #[serde(default)]
    repositories: Vec<RepositorySettings>,
}

/// Parse the remote settings payload: an object carrying a `repositories`
/// list, one entry per configured repository.
pub fn parse_repositories_payload(text: &str) -> Result<Vec<RepositorySettings>, SyncError> {
    let payload: RepositoriesPayload =
        serde_json::from_str(text).map_err(|e| SyncError::SettingsPayload(e.to_string()))?;
    Ok(payload.repositories)
}
