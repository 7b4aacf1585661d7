use serde::{Deserialize, Serialize};

/// Applied whenever a resolved settings record would otherwise select nothing.
pub const DEFAULT_INCLUDE_PATTERN: &str = "f/**";

pub const DEFAULT_RUNTIME: &str = "bun";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Script,
    Flow,
    App,
    Folder,
    Variable,
    Resource,
    ResourceType,
    Secret,
    Schedule,
    Trigger,
    User,
    Group,
    Settings,
    Key,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 14] = [
        Self::Script,
        Self::Flow,
        Self::App,
        Self::Folder,
        Self::Variable,
        Self::Resource,
        Self::ResourceType,
        Self::Secret,
        Self::Schedule,
        Self::Trigger,
        Self::User,
        Self::Group,
        Self::Settings,
        Self::Key,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Flow => "flow",
            Self::App => "app",
            Self::Folder => "folder",
            Self::Variable => "variable",
            Self::Resource => "resource",
            Self::ResourceType => "resourcetype",
            Self::Secret => "secret",
            Self::Schedule => "schedule",
            Self::Trigger => "trigger",
            Self::User => "user",
            Self::Group => "group",
            Self::Settings => "settings",
            Self::Key => "key",
        }
    }

    /// Privileged kinds are excluded unless explicitly requested.
    pub fn is_privileged(self) -> bool {
        matches!(
            self,
            Self::Schedule | Self::Trigger | Self::User | Self::Group | Self::Settings | Self::Key
        )
    }
}

impl TryFrom<&str> for ResourceKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "script" => Ok(Self::Script),
            "flow" => Ok(Self::Flow),
            "app" => Ok(Self::App),
            "folder" => Ok(Self::Folder),
            "variable" => Ok(Self::Variable),
            "resource" => Ok(Self::Resource),
            "resourcetype" | "resource_type" => Ok(Self::ResourceType),
            "secret" => Ok(Self::Secret),
            "schedule" => Ok(Self::Schedule),
            "trigger" => Ok(Self::Trigger),
            "user" => Ok(Self::User),
            "group" => Ok(Self::Group),
            "settings" => Ok(Self::Settings),
            "key" => Ok(Self::Key),
            other => Err(format!("unsupported resource kind: {other}")),
        }
    }
}

/// UI-facing view of what participates in a sync: path globs plus a flat
/// list of resource-kind tags. Unrecognized tags are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionState {
    #[serde(default)]
    pub include_path: Vec<String>,
    #[serde(default)]
    pub include_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_include_path: Option<Vec<String>>,
}

/// Canonical settings record consumed by the sync engine.
///
/// The dual skip/include polarity across kind families is a compatibility
/// shape for existing configuration files; code should go through
/// `includes_kind`/`set_kind_included` instead of the raw flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncOptions {
    pub default_ts: String,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub codebases: Vec<String>,
    pub skip_scripts: bool,
    pub skip_flows: bool,
    pub skip_apps: bool,
    pub skip_folders: bool,
    pub skip_variables: bool,
    pub skip_resources: bool,
    pub skip_resource_types: bool,
    pub skip_secrets: bool,
    pub include_schedules: bool,
    pub include_triggers: bool,
    pub include_users: bool,
    pub include_groups: bool,
    pub include_settings: bool,
    pub include_key: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            default_ts: String::from(DEFAULT_RUNTIME),
            includes: vec![String::from(DEFAULT_INCLUDE_PATTERN)],
            excludes: Vec::new(),
            codebases: Vec::new(),
            skip_scripts: false,
            skip_flows: false,
            skip_apps: false,
            skip_folders: false,
            skip_variables: false,
            skip_resources: false,
            skip_resource_types: false,
            skip_secrets: false,
            include_schedules: false,
            include_triggers: false,
            include_users: false,
            include_groups: false,
            include_settings: false,
            include_key: false,
        }
    }
}

impl SyncOptions {
    pub fn includes_kind(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Script => !self.skip_scripts,
            ResourceKind::Flow => !self.skip_flows,
            ResourceKind::App => !self.skip_apps,
            ResourceKind::Folder => !self.skip_folders,
            ResourceKind::Variable => !self.skip_variables,
            ResourceKind::Resource => !self.skip_resources,
            ResourceKind::ResourceType => !self.skip_resource_types,
            ResourceKind::Secret => !self.skip_secrets,
            ResourceKind::Schedule => self.include_schedules,
            ResourceKind::Trigger => self.include_triggers,
            ResourceKind::User => self.include_users,
            ResourceKind::Group => self.include_groups,
            ResourceKind::Settings => self.include_settings,
            ResourceKind::Key => self.include_key,
        }
    }

    pub fn set_kind_included(&mut self, kind: ResourceKind, included: bool) {
        match kind {
            ResourceKind::Script => self.skip_scripts = !included,
            ResourceKind::Flow => self.skip_flows = !included,
            ResourceKind::App => self.skip_apps = !included,
            ResourceKind::Folder => self.skip_folders = !included,
            ResourceKind::Variable => self.skip_variables = !included,
            ResourceKind::Resource => self.skip_resources = !included,
            ResourceKind::ResourceType => self.skip_resource_types = !included,
            ResourceKind::Secret => self.skip_secrets = !included,
            ResourceKind::Schedule => self.include_schedules = included,
            ResourceKind::Trigger => self.include_triggers = included,
            ResourceKind::User => self.include_users = included,
            ResourceKind::Group => self.include_groups = included,
            ResourceKind::Settings => self.include_settings = included,
            ResourceKind::Key => self.include_key = included,
        }
    }
}

/// Partial settings record. Layers of configuration are expressed as an
/// ordered list of patches applied left-to-right; absent fields fall
/// through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codebases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_flows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_apps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_folders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_variables: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_resources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_resource_types: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_secrets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_schedules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_triggers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_key: Option<bool>,
}

impl SyncOptionsPatch {
    /// Patch carrying only the path- and kind-selection fields of a full
    /// record. Runtime and codebase fields are deliberately left out so a
    /// remote repository layer cannot clobber them.
    pub fn from_selection(options: &SyncOptions) -> Self {
        Self {
            default_ts: None,
            codebases: None,
            includes: Some(options.includes.clone()),
            excludes: Some(options.excludes.clone()),
            skip_scripts: Some(options.skip_scripts),
            skip_flows: Some(options.skip_flows),
            skip_apps: Some(options.skip_apps),
            skip_folders: Some(options.skip_folders),
            skip_variables: Some(options.skip_variables),
            skip_resources: Some(options.skip_resources),
            skip_resource_types: Some(options.skip_resource_types),
            skip_secrets: Some(options.skip_secrets),
            include_schedules: Some(options.include_schedules),
            include_triggers: Some(options.include_triggers),
            include_users: Some(options.include_users),
            include_groups: Some(options.include_groups),
            include_settings: Some(options.include_settings),
            include_key: Some(options.include_key),
        }
    }

    pub fn apply(&self, options: &mut SyncOptions) {
        if let Some(value) = &self.default_ts {
            options.default_ts = value.clone();
        }
        if let Some(value) = &self.includes {
            options.includes = value.clone();
        }
        if let Some(value) = &self.excludes {
            options.excludes = value.clone();
        }
        if let Some(value) = &self.codebases {
            options.codebases = value.clone();
        }
        if let Some(value) = self.skip_scripts {
            options.skip_scripts = value;
        }
        if let Some(value) = self.skip_flows {
            options.skip_flows = value;
        }
        if let Some(value) = self.skip_apps {
            options.skip_apps = value;
        }
        if let Some(value) = self.skip_folders {
            options.skip_folders = value;
        }
        if let Some(value) = self.skip_variables {
            options.skip_variables = value;
        }
        if let Some(value) = self.skip_resources {
            options.skip_resources = value;
        }
        if let Some(value) = self.skip_resource_types {
            options.skip_resource_types = value;
        }
        if let Some(value) = self.skip_secrets {
            options.skip_secrets = value;
        }
        if let Some(value) = self.include_schedules {
            options.include_schedules = value;
        }
        if let Some(value) = self.include_triggers {
            options.include_triggers = value;
        }
        if let Some(value) = self.include_users {
            options.include_users = value;
        }
        if let Some(value) = self.include_groups {
            options.include_groups = value;
        }
        if let Some(value) = self.include_settings {
            options.include_settings = value;
        }
        if let Some(value) = self.include_key {
            options.include_key = value;
        }
    }
}

/// One remote-supplied settings block, one per configured repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "git_repo_resource_path")]
    pub repo_path: String,
    #[serde(default)]
    pub script_path: String,
    #[serde(default)]
    pub group_by_folder: bool,
    #[serde(default)]
    pub use_individual_branch: bool,
    pub settings: InclusionState,
}

impl RepositorySettings {
    /// Repository identity without the resource-reference prefix.
    pub fn normalized_repo_path(&self) -> &str {
        self.repo_path
            .strip_prefix("$res:")
            .unwrap_or(&self.repo_path)
    }
}

/// A named, persisted connection to a remote workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceProfile {
    pub name: String,
    pub remote: String,
    #[serde(rename = "workspaceId")]
    pub workspace_id: String,
    pub token: String,
}

impl WorkspaceProfile {
    /// Two profiles point at the same backend when both the remote URL and
    /// the workspace id match. The same workspace id under a different
    /// remote is a different backend.
    pub fn same_backend(&self, other: &WorkspaceProfile) -> bool {
        self.remote == other.remote && self.workspace_id == other.workspace_id
    }
}
