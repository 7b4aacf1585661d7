use directories::ProjectDirs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RegistryPaths {
    pub config_directory: PathBuf,
    pub workspaces_path: PathBuf,
    pub active_workspace_path: PathBuf,
}

impl RegistryPaths {
    pub fn detect() -> Self {
        if let Ok(override_dir) = std::env::var("WORKSYNC_CONFIG_DIR") {
            if !override_dir.trim().is_empty() {
                return Self::from_config_dir(PathBuf::from(override_dir));
            }
        }

        if let Some(project_dirs) = ProjectDirs::from("dev", "worksync", "worksync") {
            return Self::from_config_dir(project_dirs.config_dir().to_path_buf());
        }

        if let Some(home) = home_dir() {
            return Self::from_config_dir(home.join(".worksync"));
        }

        Self::from_config_dir(PathBuf::from(".worksync"))
    }

    pub fn from_config_dir(config_directory: PathBuf) -> Self {
        let workspaces_path = config_directory.join("workspaces.ndjson");
        let active_workspace_path = config_directory.join("active_workspace");
        Self {
            config_directory,
            workspaces_path,
            active_workspace_path,
        }
    }

    pub fn ensure_config_dir(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(&self.config_directory)
    }
}

pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()))
}
