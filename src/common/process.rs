//! Blocking subprocess execution
//!
//! Every external tool (apt, dpkg, systemctl) is run through [`run`], which
//! replaces the child's environment with a [`ProcessEnvironment`] when one is
//! given and captures stdout and stderr together for diagnostics.

use std::process::{Command, Output};

use tracing::debug;

use crate::config::ProcessEnvironment;
use crate::error::{Result, TrackerError};

/// Outcome of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub output: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Self {
            success: output.status.success(),
            code: output.status.code(),
            output: text.trim().to_string(),
        }
    }

    /// Short failure description for error messages
    pub fn failure_reason(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        if self.output.is_empty() {
            status
        } else {
            format!("{status}: {}", self.output)
        }
    }
}

/// Run `program` with `args` and wait for it to finish.
///
/// Only failure to start the program is an error here; a non-zero exit is
/// reported through [`CommandOutput::success`].
pub fn run(program: &str, args: &[&str], env: Option<&ProcessEnvironment>) -> Result<CommandOutput> {
    debug!("Running {} {}", program, args.join(" "));

    let mut command = Command::new(program);
    command.args(args);
    if let Some(env) = env {
        command.env_clear().envs(env.iter());
    }

    let output = command
        .output()
        .map_err(|e| TrackerError::CommandSpawnFailed {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

    Ok(CommandOutput::from_output(&output))
}
