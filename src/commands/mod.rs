//! Command implementations for the transition-tracker CLI
//!
//! Every lifecycle command builds one [`Transition`] wired to the real host
//! collaborators (apt, libgit2, systemctl) and runs a single operation on it.

pub mod completions;
pub mod hook;
pub mod status;

use tracing::debug;

use crate::assets::{AssetLoader, DirAssetLoader, EmbeddedAssets};
use crate::cli::{Cli, Commands, GlobalArgs};
use crate::config::{ProxyConfig, Settings, SettingsFile, WorkspaceLayout};
use crate::error::Result;
use crate::git::Git2Client;
use crate::packages::AptPackageManager;
use crate::systemd::Systemctl;
use crate::transition::{Collaborators, Transition};

/// Resolve settings from flags, environment and the optional settings file
pub fn settings(global: &GlobalArgs, url: Option<String>) -> Result<Settings> {
    let file = match &global.config {
        Some(path) => SettingsFile::load(path)?,
        None => SettingsFile::default(),
    };

    let proxy = ProxyConfig::new(global.http_proxy.as_deref(), global.https_proxy.as_deref());
    Ok(Settings::resolve(
        proxy,
        url,
        global.repo_url.clone(),
        global.branch.clone(),
        file,
    ))
}

/// Build a controller wired to the host
pub fn transition(global: &GlobalArgs, url: Option<String>) -> Result<Transition> {
    let settings = settings(global, url)?;
    let layout = match &global.root {
        Some(root) => WorkspaceLayout::under(root),
        None => WorkspaceLayout::system(),
    };
    let assets: Box<dyn AssetLoader> = match &global.assets {
        Some(dir) => Box::new(DirAssetLoader::new(dir)),
        None => Box::new(EmbeddedAssets),
    };
    debug!("Using tracker root {}", layout.tracker_root.display());

    Ok(Transition::new(
        settings,
        layout,
        std::env::vars(),
        Collaborators {
            packages: Box::new(AptPackageManager::new()),
            vcs: Box::new(Git2Client::new()),
            services: Box::new(Systemctl::new()),
            assets,
        },
    ))
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::Install => transition(&global, None)?.install(),
        Commands::SetupSystemdUnits => transition(&global, None)?.setup_systemd_units(),
        Commands::Start => transition(&global, None)?.start(),
        Commands::Configure(args) => {
            let transition = transition(&global, args.url)?;
            configure(&transition);
            Ok(())
        }
        Commands::RefreshReport => transition(&global, None)?.refresh_report(),
        Commands::Hook(args) => {
            let transition = transition(&global, args.url)?;
            hook::run(&transition, args.event)
        }
        Commands::Status(args) => status::run(&transition(&global, None)?, args.json),
        Commands::Completions(args) => completions::run(&args),
    }
}

/// Apply the resolved endpoint URL, if any
pub fn configure(transition: &Transition) {
    match transition.settings().url.as_deref() {
        Some(url) => transition.configure(url),
        None => debug!("No url configured"),
    }
}

