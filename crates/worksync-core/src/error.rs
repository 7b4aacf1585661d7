use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Invalid JSON in settings parameter: {0}")]
    SettingsPayload(String),

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error(
        "Workspace name \"{name}\" already exists for {existing_workspace_id} on {existing_remote}"
    )]
    NameConflict {
        name: String,
        existing_remote: String,
        existing_workspace_id: String,
    },

    #[error("Workspace \"{existing_name}\" already targets {workspace_id} on {remote}")]
    BackendConstraint {
        existing_name: String,
        remote: String,
        workspace_id: String,
    },

    #[error("Multiple repositories are configured, select one of: {candidates}")]
    AmbiguousRepository { candidates: String },

    #[error("Repository {0} not found")]
    RepositoryNotFound(String),

    #[error("Invalid glob pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
