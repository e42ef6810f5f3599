//! Service manager integration
//!
//! - [`ServiceManager`]: the calls the tracker makes into systemd
//! - [`Systemctl`]: implementation driving `systemctl`
//! - [`units`]: rendering and installing the tracker's service and timer

pub mod units;

use tracing::debug;

use crate::common::process;
use crate::error::{Result, TrackerError};

/// Reverse proxy fronting the report
pub const NGINX_SERVICE: &str = "nginx";

/// Host service manager
pub trait ServiceManager {
    fn restart(&self, unit: &str) -> Result<()>;

    fn start(&self, unit: &str) -> Result<()>;

    /// Enable a unit and start it immediately
    fn enable_now(&self, unit: &str) -> Result<()>;

    /// Re-read unit files from disk
    fn daemon_reload(&self) -> Result<()>;
}

/// Drives systemd through `systemctl`
#[derive(Debug, Clone, Default)]
pub struct Systemctl;

impl Systemctl {
    pub fn new() -> Self {
        Self
    }

    fn systemctl(action: &str, args: &[&str], unit: &str) -> Result<()> {
        let out = process::run("systemctl", args, None)?;
        if out.success {
            debug!("systemctl {} {} succeeded", action, unit);
            Ok(())
        } else {
            Err(TrackerError::ServiceFailed {
                action: action.to_string(),
                unit: unit.to_string(),
                reason: out.failure_reason(),
            })
        }
    }
}

impl ServiceManager for Systemctl {
    fn restart(&self, unit: &str) -> Result<()> {
        Self::systemctl("restart", &["restart", unit], unit)
    }

    fn start(&self, unit: &str) -> Result<()> {
        Self::systemctl("start", &["start", unit], unit)
    }

    fn enable_now(&self, unit: &str) -> Result<()> {
        Self::systemctl("enable", &["enable", "--now", unit], unit)
    }

    fn daemon_reload(&self) -> Result<()> {
        Self::systemctl("reload", &["daemon-reload"], "systemd")
    }
}
