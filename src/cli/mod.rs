//! CLI definitions using clap derive API
//!
//! One subcommand per lifecycle operation, plus:
//! - hook: dispatch a host lifecycle event
//! - status: report what is provisioned
//! - completions: shell completions

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod hook;

pub use completions::CompletionsArgs;
pub use hook::{Event, HookArgs};

/// transition-tracker - provision and operate the Ubuntu transition tracker
#[derive(Parser, Debug)]
#[command(
    name = "transition-tracker",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision and operate the Ubuntu transition tracker service",
    after_help = "EXAMPLES:\n  \
                  transition-tracker hook install        # Run everything the install event needs\n  \
                  transition-tracker start               # Restart nginx and start the tracker\n  \
                  transition-tracker refresh-report      # Regenerate the report now\n  \
                  transition-tracker status --json       # Show what is provisioned"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// HTTP proxy supplied by the host runtime
    #[arg(long, global = true, env = "JUJU_CHARM_HTTP_PROXY", value_name = "URL")]
    pub http_proxy: Option<String>,

    /// HTTPS proxy supplied by the host runtime
    #[arg(long, global = true, env = "JUJU_CHARM_HTTPS_PROXY", value_name = "URL")]
    pub https_proxy: Option<String>,

    /// Prefix for every host path (defaults to /)
    #[arg(long, global = true, env = "TRANSITION_TRACKER_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Read static assets from this directory instead of the built-in copies
    #[arg(long, global = true, env = "TRANSITION_TRACKER_ASSETS", value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// YAML settings file
    #[arg(long, global = true, env = "TRANSITION_TRACKER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Configuration repository to clone
    #[arg(long, global = true, env = "TRANSITION_TRACKER_REPO_URL", value_name = "URL")]
    pub repo_url: Option<String>,

    /// Branch of the configuration repository
    #[arg(long, global = true, env = "TRANSITION_TRACKER_BRANCH")]
    pub branch: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install packages and provision the workspace (once)
    Install,

    /// Write the systemd service and timer and enable the timer
    SetupSystemdUnits,

    /// Restart nginx and start the tracker service
    Start,

    /// Record the public URL of the report
    Configure(ConfigureArgs),

    /// Run the tracker service now
    RefreshReport,

    /// Handle a host lifecycle event
    Hook(HookArgs),

    /// Show what is provisioned on this host
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the configure command
#[derive(Args, Debug, Default)]
pub struct ConfigureArgs {
    /// Public URL of the report
    #[arg(env = "TRANSITION_TRACKER_URL")]
    pub url: Option<String>,
}

/// Arguments for the status command
#[derive(Args, Debug, Default)]
pub struct StatusArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
