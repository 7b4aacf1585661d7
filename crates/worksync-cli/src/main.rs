use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use worksync_core::{
    find_config_file, parse_repositories_payload, read_config_file, resolve, write_config_file,
    LocalConfig, PathFilter, RegistryPaths, ResolvedSettings, StaticSettingsSource, SyncOptionsPatch,
    WorkspaceProfile, WorkspaceStore, CONFIG_FILE_NAME, DEFAULT_INCLUDE_PATTERN, DEFAULT_RUNTIME,
};

#[derive(Parser, Debug)]
#[command(name = "worksync")]
#[command(about = "Sync a local directory against a remote workspace")]
struct Cli {
    #[arg(long, global = true)]
    verbose: bool,
    #[arg(long = "config-dir", global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage named remote workspace connections
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
    /// Inspect the effective sync settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Report which paths the effective settings select
    Filter {
        paths: Vec<String>,
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Write a default configuration file in the current directory
    Init,
}

#[derive(Subcommand, Debug)]
enum WorkspaceCommands {
    Add {
        name: String,
        workspace_id: String,
        remote: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        force: bool,
    },
    List {
        #[arg(long)]
        json: bool,
    },
    Remove {
        name: String,
    },
    Switch {
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommands {
    Resolve {
        #[command(flatten)]
        settings: SettingsArgs,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct SettingsArgs {
    /// Repository to select when the workspace exposes several
    #[arg(long)]
    repository: Option<String>,
    /// Skip the remote settings layer entirely
    #[arg(long = "use-default")]
    use_default: bool,
    /// Require the remote settings layer to be applied
    #[arg(long = "use-backend", conflicts_with = "use_default")]
    use_backend: bool,
    /// JSON repositories payload standing in for the remote fetch
    #[arg(long = "with-backend-settings")]
    with_backend_settings: Option<String>,
    #[arg(long = "include")]
    includes: Vec<String>,
    #[arg(long = "exclude")]
    excludes: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("failed to set tracing subscriber")?;
    }

    let store = match &cli.config_dir {
        Some(dir) => WorkspaceStore::new(RegistryPaths::from_config_dir(dir.clone())),
        None => WorkspaceStore::default(),
    };

    match cli.command {
        Commands::Workspace { command } => match command {
            WorkspaceCommands::Add {
                name,
                workspace_id,
                remote,
                token,
                force,
            } => {
                let profile = WorkspaceProfile {
                    name: name.clone(),
                    remote,
                    workspace_id,
                    token,
                };
                store.add(&profile, force)?;
                store.set_active(&name)?;
                let stored = store
                    .find(&name)
                    .ok_or_else(|| anyhow!("workspace {name} missing after add"))?;
                println!(
                    "Added workspace {} for {} on {}",
                    stored.name, stored.workspace_id, stored.remote
                );
            }
            WorkspaceCommands::List { json } => {
                let profiles = store.list();
                let active = store.active();
                if json {
                    let listed: Vec<_> = profiles
                        .iter()
                        .map(|p| {
                            serde_json::json!({
                                "name": p.name,
                                "workspaceId": p.workspace_id,
                                "remote": p.remote,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&listed)?);
                } else {
                    for profile in &profiles {
                        let marker = if active.as_deref() == Some(profile.name.as_str()) {
                            "*"
                        } else {
                            " "
                        };
                        println!(
                            "{marker} {}\t{}\t{}",
                            profile.name, profile.workspace_id, profile.remote
                        );
                    }
                    println!("active: {}", active.as_deref().unwrap_or("none"));
                }
            }
            WorkspaceCommands::Remove { name } => {
                if store.remove(&name)? {
                    println!("Removed workspace {name}");
                } else {
                    println!("Workspace profile {name} does not exist locally");
                }
            }
            WorkspaceCommands::Switch { name } => {
                let profile = store
                    .find(&name)
                    .ok_or_else(|| anyhow!("workspace profile {name} does not exist locally"))?;
                store.set_active(&name)?;
                println!(
                    "Switched to workspace {} ({} on {})",
                    profile.name, profile.workspace_id, profile.remote
                );
            }
        },
        Commands::Settings { command } => match command {
            SettingsCommands::Resolve { settings, json } => {
                let resolved = resolve_settings(&store, &settings)?;
                if json {
                    let output = serde_json::json!({
                        "repository": resolved.repo,
                        "settings": resolved.options,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                } else {
                    if let Some(repo) = &resolved.repo {
                        println!("repository: {repo}");
                    }
                    print!("{}", serde_yaml::to_string(&resolved.options)?);
                }
            }
        },
        Commands::Filter { paths, settings } => {
            let resolved = resolve_settings(&store, &settings)?;
            let filter = PathFilter::for_options(&resolved.options)?;
            for path in &paths {
                let verdict = if filter.is_selected(path) {
                    "selected"
                } else {
                    "ignored"
                };
                println!("{path}\t{verdict}");
            }
        }
        Commands::Init => {
            let path = std::env::current_dir()
                .context("failed to determine current directory")?
                .join(CONFIG_FILE_NAME);
            if path.exists() {
                bail!("{CONFIG_FILE_NAME} already exists in this directory");
            }
            let config = LocalConfig {
                base: SyncOptionsPatch {
                    default_ts: Some(String::from(DEFAULT_RUNTIME)),
                    includes: Some(vec![String::from(DEFAULT_INCLUDE_PATTERN)]),
                    excludes: Some(Vec::new()),
                    ..SyncOptionsPatch::default()
                },
                overrides: Default::default(),
            };
            write_config_file(&path, &config)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn resolve_settings(store: &WorkspaceStore, args: &SettingsArgs) -> Result<ResolvedSettings> {
    let workspace = store.resolve_active().ok_or_else(|| {
        anyhow!("no active workspace, run 'worksync workspace add' or 'worksync workspace switch' first")
    })?;

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let config_path = find_config_file(&cwd).unwrap_or_else(|| cwd.join(CONFIG_FILE_NAME));
    let local = read_config_file(&config_path)?;

    let repositories = match &args.with_backend_settings {
        Some(payload) => parse_repositories_payload(payload)?,
        None => {
            if args.use_backend {
                bail!(
                    "--use-backend requires a remote settings payload, pass --with-backend-settings"
                );
            }
            Vec::new()
        }
    };
    let source = StaticSettingsSource::new(repositories);

    let cli_patch = SyncOptionsPatch {
        includes: (!args.includes.is_empty()).then(|| args.includes.clone()),
        excludes: (!args.excludes.is_empty()).then(|| args.excludes.clone()),
        ..SyncOptionsPatch::default()
    };

    let resolved = resolve(
        &local,
        &workspace,
        &source,
        args.repository.as_deref(),
        Some(&cli_patch),
        args.use_default,
    )?;
    Ok(resolved)
}
