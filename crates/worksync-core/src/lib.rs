pub mod config;
pub mod error;
pub mod filter;
pub mod mapper;
pub mod models;
pub mod paths;
pub mod payload;
pub mod registry;
pub mod resolver;

pub use config::{
    find_config_file, read_config_file, write_config_file, LocalConfig, CONFIG_FILE_NAME,
};
pub use error::SyncError;
pub use filter::PathFilter;
pub use mapper::{to_inclusion_state, to_sync_options};
pub use models::{
    InclusionState, RepositorySettings, ResourceKind, SyncOptions, SyncOptionsPatch,
    WorkspaceProfile, DEFAULT_INCLUDE_PATTERN, DEFAULT_RUNTIME,
};
pub use paths::RegistryPaths;
pub use payload::{parse_repositories_payload, parse_settings_payload};
pub use registry::WorkspaceStore;
pub use resolver::{
    resolve, select_repository, RemoteSettingsSource, ResolvedSettings, StaticSettingsSource,
};
