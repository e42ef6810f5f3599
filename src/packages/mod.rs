//! OS package installation
//!
//! The tracker needs a small fixed set of Debian packages. They are installed
//! through the [`PackageManager`] seam so the sequencing in
//! [`ensure_packages`] can be exercised without touching the host.

pub mod apt;

use tracing::{debug, error};

use crate::config::ProcessEnvironment;
use crate::error::{Result, TrackerError};

pub use apt::AptPackageManager;

/// Packages installed as part of the tracker setup, in install order
pub const PACKAGES: &[&str] = &["ben", "dctrl-tools", "git", "nginx-light", "rsync"];

/// Host package manager
pub trait PackageManager {
    /// Refresh the package index
    fn refresh_index(&self, env: &ProcessEnvironment) -> Result<()>;

    /// Install a single package, failing with `PackageNotFound` or
    /// `PackageInstallFailed`
    fn install(&self, name: &str, env: &ProcessEnvironment) -> Result<()>;
}

/// Refresh the index, then install every package in order.
///
/// Stops at the first failure. Packages installed before it stay installed.
pub fn ensure_packages(
    manager: &dyn PackageManager,
    packages: &[&str],
    env: &ProcessEnvironment,
) -> Result<()> {
    if let Err(e) = manager.refresh_index(env) {
        error!("Failed to update package cache: {}", e);
        return Err(e);
    }
    debug!("Apt index refreshed.");

    for name in packages {
        match manager.install(name, env) {
            Ok(()) => debug!("Package {} installed", name),
            Err(e @ TrackerError::PackageNotFound { .. }) => {
                error!("Failed to find package {} in package cache", name);
                return Err(e);
            }
            Err(e) => {
                error!("Failed to install {}: {}", name, e);
                return Err(e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::test_fixtures::{FakePackages, Journal};

    #[test]
    fn test_refresh_precedes_installs() {
        let journal = Journal::default();
        let manager = FakePackages::new(&journal);

        ensure_packages(&manager, PACKAGES, &ProcessEnvironment::default()).unwrap();

        assert_eq!(
            journal.entries(),
            [
                "apt update",
                "apt install ben",
                "apt install dctrl-tools",
                "apt install git",
                "apt install nginx-light",
                "apt install rsync",
            ]
        );
    }

    #[test]
    fn test_refresh_failure_stops_everything() {
        let journal = Journal::default();
        let manager = FakePackages::new(&journal).fail_refresh();

        let err = ensure_packages(&manager, PACKAGES, &ProcessEnvironment::default()).unwrap_err();

        assert!(matches!(err, TrackerError::IndexRefreshFailed { .. }));
        assert_eq!(journal.entries(), ["apt update"]);
    }

    #[test]
    fn test_missing_package_stops_loop() {
        let journal = Journal::default();
        let manager = FakePackages::new(&journal).missing("git");

        let err = ensure_packages(&manager, PACKAGES, &ProcessEnvironment::default()).unwrap_err();

        assert!(matches!(err, TrackerError::PackageNotFound { ref name } if name == "git"));
        assert_eq!(
            journal.entries(),
            ["apt update", "apt install ben", "apt install dctrl-tools", "apt install git"]
        );
    }

    #[test]
    fn test_install_failure_is_propagated() {
        let journal = Journal::default();
        let manager = FakePackages::new(&journal).broken("ben");

        let err = ensure_packages(&manager, PACKAGES, &ProcessEnvironment::default()).unwrap_err();

        assert!(matches!(err, TrackerError::PackageInstallFailed { .. }));
        assert_eq!(journal.entries(), ["apt update", "apt install ben"]);
    }
}
