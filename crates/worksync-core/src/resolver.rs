use crate::config::LocalConfig;
use crate::error::SyncError;
use crate::mapper;
use crate::models::{RepositorySettings, SyncOptions, SyncOptionsPatch, WorkspaceProfile};
use tracing::{debug, info};

/// External transport seam: hands back the per-repository settings the
/// remote workspace exposes. Fetching happens at most once per resolve
/// and never when the remote layer is bypassed.
pub trait RemoteSettingsSource {
    fn fetch_repositories(&self) -> Result<Vec<RepositorySettings>, SyncError>;
}

/// A source over already-fetched (or test-provided) repository settings.
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsSource {
    repositories: Vec<RepositorySettings>,
}

impl StaticSettingsSource {
    pub fn new(repositories: Vec<RepositorySettings>) -> Self {
        Self { repositories }
    }
}

impl RemoteSettingsSource for StaticSettingsSource {
    fn fetch_repositories(&self) -> Result<Vec<RepositorySettings>, SyncError> {
        Ok(self.repositories.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub options: SyncOptions,
    /// Identity of the remote repository whose settings were applied, when
    /// the remote layer participated.
    pub repo: Option<String>,
}

/// Merge all configuration layers into one effective settings record.
///
/// Ascending precedence: built-in defaults, the local declarative file,
/// the selected remote repository (unless bypassed) together with its
/// local override blocks, then explicit caller overrides.
pub fn resolve(
    local: &LocalConfig,
    workspace: &WorkspaceProfile,
    source: &dyn RemoteSettingsSource,
    selected_repo: Option<&str>,
    cli_overrides: Option<&SyncOptionsPatch>,
    bypass_remote: bool,
) -> Result<ResolvedSettings, SyncError> {
    let mut options = SyncOptions::default();
    local.base.apply(&mut options);

    let mut active_repo = None;
    if bypass_remote {
        debug!("remote settings layer bypassed");
    } else {
        let repositories = source.fetch_repositories()?;
        if repositories.is_empty() {
            debug!("remote workspace exposes no repository settings");
        } else {
            let repository = select_repository(&repositories, selected_repo)?;
            let repo_path = repository.normalized_repo_path().to_owned();
            info!(repository = %repo_path, "applying remote repository settings");

            let mapped = mapper::to_sync_options(&repository.settings);
            SyncOptionsPatch::from_selection(&mapped).apply(&mut options);

            // Within the remote layer, local override blocks refine the
            // repository settings: the workspace-level block first, then
            // the repository-scoped one.
            let keys = [
                workspace_override_key(workspace),
                repository_override_key(workspace, &repo_path),
            ];
            for key in keys {
                if let Some(patch) = local.overrides.get(&key) {
                    debug!(key = %key, "applying local override block");
                    patch.apply(&mut options);
                }
            }

            active_repo = Some(repo_path);
        }
    }

    if let Some(patch) = cli_overrides {
        patch.apply(&mut options);
    }

    // The resolved record never selects nothing.
    if options.includes.is_empty() {
        options.includes = mapper::default_includes();
    }

    Ok(ResolvedSettings {
        options,
        repo: active_repo,
    })
}

/// Pick the repository the sync operates against: an explicit selection
/// must match exactly, a sole entry is used as-is, anything else is
/// ambiguous and must be disambiguated by the caller.
pub fn select_repository<'a>(
    repositories: &'a [RepositorySettings],
    selected: Option<&str>,
) -> Result<&'a RepositorySettings, SyncError> {
    if let Some(wanted) = selected {
        let wanted = wanted.strip_prefix("$res:").unwrap_or(wanted);
        return repositories
            .iter()
            .find(|r| r.normalized_repo_path() == wanted)
            .ok_or_else(|| SyncError::RepositoryNotFound(wanted.to_owned()));
    }

    match repositories {
        [single] => Ok(single),
        _ => Err(SyncError::AmbiguousRepository {
            candidates: repositories
                .iter()
                .map(RepositorySettings::normalized_repo_path)
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

pub fn workspace_override_key(workspace: &WorkspaceProfile) -> String {
    format!("{}:{}:*", workspace.remote, workspace.workspace_id)
}

pub fn repository_override_key(workspace: &WorkspaceProfile, repo_path: &str) -> String {
    format!("{}:{}:{}", workspace.remote, workspace.workspace_id, repo_path)
}
