use clap::{Parser, ValueEnum};

/// Host lifecycle events understood by the hook command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// First installation of the unit
    Install,
    /// New version of the tracker deployed
    UpgradeCharm,
    /// Settings or proxy configuration changed
    ConfigChanged,
    /// Unit started
    Start,
    /// Scheduled or operator-triggered report refresh
    Refresh,
}

/// Arguments for the hook command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   transition-tracker hook install\n  \
                   transition-tracker hook config-changed --url https://transitions.example\n  \
                   transition-tracker hook refresh")]
pub struct HookArgs {
    /// Event to handle
    #[arg(value_enum)]
    pub event: Event,

    /// Public URL of the report (used by config-changed)
    #[arg(long, env = "TRANSITION_TRACKER_URL")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::super::{Cli, Commands};
    use super::*;

    #[test]
    fn test_cli_parsing_hook_events() {
        for (name, event) in [
            ("install", Event::Install),
            ("upgrade-charm", Event::UpgradeCharm),
            ("config-changed", Event::ConfigChanged),
            ("start", Event::Start),
            ("refresh", Event::Refresh),
        ] {
            let cli = Cli::try_parse_from(["transition-tracker", "hook", name]).unwrap();
            match cli.command {
                Commands::Hook(args) => assert_eq!(args.event, event),
                other => panic!("Expected Hook command, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_cli_parsing_hook_url() {
        let cli = Cli::try_parse_from([
            "transition-tracker",
            "hook",
            "config-changed",
            "--url",
            "https://transitions.example",
        ])
        .unwrap();
        match cli.command {
            Commands::Hook(args) => {
                assert_eq!(args.url.as_deref(), Some("https://transitions.example"));
            }
            other => panic!("Expected Hook command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_event() {
        assert!(Cli::try_parse_from(["transition-tracker", "hook", "stop"]).is_err());
    }
}
