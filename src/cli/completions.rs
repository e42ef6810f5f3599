use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    transition-tracker completions bash > /etc/bash_completion.d/transition-tracker\n\n\
                  Generate zsh completions:\n    transition-tracker completions zsh > ~/.zfunc/_transition-tracker")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
