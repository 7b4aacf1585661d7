use crate::error::SyncError;
use crate::models::WorkspaceProfile;
use crate::paths::RegistryPaths;
use tracing::debug;

/// Durable registry of named remote workspace connections.
///
/// The store is newline-delimited JSON, one profile per line. The current
/// state is the replay of the file with the last write for a given name
/// winning; writes always persist the collapsed state atomically.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    paths: RegistryPaths,
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self {
            paths: RegistryPaths::detect(),
        }
    }
}

impl WorkspaceStore {
    pub fn new(paths: RegistryPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &RegistryPaths {
        &self.paths
    }

    pub fn list(&self) -> Vec<WorkspaceProfile> {
        let Ok(text) = std::fs::read_to_string(&self.paths.workspaces_path) else {
            return Vec::new();
        };

        let mut profiles: Vec<WorkspaceProfile> = Vec::new();
        for line in text.lines() {
            if line.trim().len() <= 2 {
                continue;
            }
            let Ok(profile) = serde_json::from_str::<WorkspaceProfile>(line) else {
                continue;
            };
            match profiles.iter_mut().find(|p| p.name == profile.name) {
                Some(existing) => *existing = profile,
                None => profiles.push(profile),
            }
        }
        profiles
    }

    pub fn find(&self, name: &str) -> Option<WorkspaceProfile> {
        self.list().into_iter().find(|p| p.name == name)
    }

    pub fn add(&self, profile: &WorkspaceProfile, force: bool) -> Result<(), SyncError> {
        let mut profile = profile.clone();
        profile.remote = normalize_remote(&profile.remote);

        let mut profiles = self.list();

        if let Some(pos) = profiles.iter().position(|p| p.name == profile.name) {
            if profiles[pos].same_backend(&profile) {
                // Same identity tuple: token rotation, no force required.
                debug!(name = %profile.name, "updating token for existing workspace");
                profiles[pos].token = profile.token;
                return self.write_profiles(&profiles);
            }
            if !force {
                return Err(SyncError::NameConflict {
                    name: profile.name,
                    existing_remote: profiles[pos].remote.clone(),
                    existing_workspace_id: profiles[pos].workspace_id.clone(),
                });
            }
            profiles[pos] = profile;
            return self.write_profiles(&profiles);
        }

        if let Some(existing) = profiles.iter().find(|p| p.same_backend(&profile)) {
            if !force {
                return Err(SyncError::BackendConstraint {
                    existing_name: existing.name.clone(),
                    remote: profile.remote,
                    workspace_id: profile.workspace_id,
                });
            }
            profiles.retain(|p| !p.same_backend(&profile));
        }

        profiles.push(profile);
        self.write_profiles(&profiles)
    }

    pub fn remove(&self, name: &str) -> Result<bool, SyncError> {
        let mut profiles = self.list();
        let before = profiles.len();
        profiles.retain(|p| p.name != name);
        if profiles.len() == before {
            return Ok(false);
        }
        self.write_profiles(&profiles)?;
        Ok(true)
    }

    pub fn set_active(&self, name: &str) -> Result<(), SyncError> {
        self.paths
            .ensure_config_dir()
            .map_err(|e| SyncError::io(&self.paths.config_directory, e))?;
        std::fs::write(&self.paths.active_workspace_path, name)
            .map_err(|e| SyncError::io(&self.paths.active_workspace_path, e))
    }

    pub fn active(&self) -> Option<String> {
        let name = std::fs::read_to_string(&self.paths.active_workspace_path).ok()?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(name.to_owned())
    }

    pub fn resolve_active(&self) -> Option<WorkspaceProfile> {
        self.find(&self.active()?)
    }

    // Replace-on-write so a concurrent reader never observes a partial
    // store.
    fn write_profiles(&self, profiles: &[WorkspaceProfile]) -> Result<(), SyncError> {
        self.paths
            .ensure_config_dir()
            .map_err(|e| SyncError::io(&self.paths.config_directory, e))?;

        let mut payload = String::new();
        for profile in profiles {
            payload.push_str(&serde_json::to_string(profile)?);
            payload.push('\n');
        }

        let staging = self.paths.workspaces_path.with_extension("ndjson.tmp");
        std::fs::write(&staging, payload).map_err(|e| SyncError::io(&staging, e))?;
        std::fs::rename(&staging, &self.paths.workspaces_path)
            .map_err(|e| SyncError::io(&self.paths.workspaces_path, e))
    }
}

/// Remote URLs always carry a trailing slash in the store.
pub fn normalize_remote(remote: &str) -> String {
    if remote.ends_with('/') {
        remote.to_owned()
    } else {
        format!("{remote}/")
    }
}
