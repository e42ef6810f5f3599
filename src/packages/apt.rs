//! apt backed package manager

use tracing::debug;

use super::PackageManager;
use crate::common::process;
use crate::config::ProcessEnvironment;
use crate::error::{Result, TrackerError};

/// Installs packages with `apt-get`, checking state with `dpkg-query` and
/// `apt-cache`.
#[derive(Debug, Clone, Default)]
pub struct AptPackageManager;

impl AptPackageManager {
    pub fn new() -> Self {
        Self
    }

    fn noninteractive(env: &ProcessEnvironment) -> ProcessEnvironment {
        env.clone().with("DEBIAN_FRONTEND", "noninteractive")
    }

    fn is_installed(name: &str, env: &ProcessEnvironment) -> Result<bool> {
        let out = process::run(
            "dpkg-query",
            &["--show", "--showformat=${Status}", name],
            Some(env),
        )?;
        Ok(out.success && is_installed_status(&out.output))
    }

    fn is_known(name: &str, env: &ProcessEnvironment) -> Result<bool> {
        let out = process::run("apt-cache", &["show", "--no-all-versions", name], Some(env))?;
        Ok(out.success && !out.output.is_empty())
    }
}

/// `dpkg-query` status of a fully installed package
fn is_installed_status(status: &str) -> bool {
    status.trim() == "install ok installed"
}

impl PackageManager for AptPackageManager {
    fn refresh_index(&self, env: &ProcessEnvironment) -> Result<()> {
        let out = process::run("apt-get", &["update", "--quiet"], Some(&Self::noninteractive(env)))?;
        if out.success {
            Ok(())
        } else {
            Err(TrackerError::IndexRefreshFailed {
                reason: out.failure_reason(),
            })
        }
    }

    fn install(&self, name: &str, env: &ProcessEnvironment) -> Result<()> {
        if Self::is_installed(name, env)? {
            debug!("Package {} already installed", name);
            return Ok(());
        }

        if !Self::is_known(name, env)? {
            return Err(TrackerError::PackageNotFound {
                name: name.to_string(),
            });
        }

        let out = process::run(
            "apt-get",
            &["install", "--yes", "--quiet", "--option=Dpkg::Options::=--force-confold", name],
            Some(&Self::noninteractive(env)),
        )?;
        if out.success {
            Ok(())
        } else {
            Err(TrackerError::PackageInstallFailed {
                name: name.to_string(),
                reason: out.failure_reason(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_status() {
        assert!(is_installed_status("install ok installed"));
        assert!(is_installed_status("install ok installed\n"));
        assert!(!is_installed_status("deinstall ok config-files"));
        assert!(!is_installed_status("install ok half-configured"));
        assert!(!is_installed_status(""));
    }

    #[test]
    fn test_noninteractive_overlay() {
        let env = AptPackageManager::noninteractive(&ProcessEnvironment::default());
        assert_eq!(env.get("DEBIAN_FRONTEND"), Some("noninteractive"));
    }
}
