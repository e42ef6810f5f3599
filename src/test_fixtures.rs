//! Test fixtures: recording fakes for the host collaborators.
//!
//! Every fake appends a line to a shared [`Journal`] for each call it
//! receives, so tests can assert both which calls happened and their order.
//!
//! ```ignore
//! let journal = Journal::default();
//! let packages = FakePackages::new(&journal).missing("git");
//! // ... run the code under test ...
//! assert_eq!(journal.entries(), ["apt update", "apt install ben"]);
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tempfile::TempDir;

use crate::config::{ProcessEnvironment, WorkspaceLayout};
use crate::error::{Result, TrackerError};
use crate::git::{CloneRequest, VcsClient};
use crate::packages::PackageManager;
use crate::systemd::ServiceManager;

/// Ordered record of collaborator calls shared between fakes
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Temp directory with a layout rooted inside it
pub fn rooted_layout() -> (TempDir, WorkspaceLayout) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let layout = WorkspaceLayout::under(temp.path());
    (temp, layout)
}

/// Package manager that records calls
pub struct FakePackages {
    journal: Journal,
    fail_refresh: bool,
    missing: HashSet<String>,
    broken: HashSet<String>,
}

impl FakePackages {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_refresh: false,
            missing: HashSet::new(),
            broken: HashSet::new(),
        }
    }

    pub fn fail_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    pub fn missing(mut self, name: &str) -> Self {
        self.missing.insert(name.to_string());
        self
    }

    pub fn broken(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }
}

impl PackageManager for FakePackages {
    fn refresh_index(&self, _env: &ProcessEnvironment) -> Result<()> {
        self.journal.record("apt update");
        if self.fail_refresh {
            return Err(TrackerError::IndexRefreshFailed {
                reason: "exit status 100".to_string(),
            });
        }
        Ok(())
    }

    fn install(&self, name: &str, _env: &ProcessEnvironment) -> Result<()> {
        self.journal.record(format!("apt install {name}"));
        if self.missing.contains(name) {
            return Err(TrackerError::PackageNotFound {
                name: name.to_string(),
            });
        }
        if self.broken.contains(name) {
            return Err(TrackerError::PackageInstallFailed {
                name: name.to_string(),
                reason: "exit status 100".to_string(),
            });
        }
        Ok(())
    }
}

/// VCS client that "clones" by creating the destination with one file.
///
/// Records the proxy the clone would use as a separate `git proxy` entry.
///
/// Fails like git would when the destination's parent is missing.
pub struct FakeVcs {
    journal: Journal,
    fail: bool,
}

impl FakeVcs {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl VcsClient for FakeVcs {
    fn clone_repo(&self, request: &CloneRequest<'_>) -> Result<()> {
        self.journal
            .record(format!("git clone -b {} {}", request.branch, request.url));
        if let Some(proxy) = request.env.proxy_for_url(request.url) {
            self.journal.record(format!("git proxy {proxy}"));
        }

        let parent_exists = request.dest.parent().is_some_and(std::path::Path::is_dir);
        if self.fail || !parent_exists {
            return Err(TrackerError::CloneFailed {
                url: request.url.to_string(),
                reason: "Repository not found".to_string(),
                output: "fatal: repository not found".to_string(),
            });
        }

        std::fs::create_dir_all(request.dest).unwrap();
        std::fs::write(request.dest.join("README"), "configs\n").unwrap();
        Ok(())
    }
}

/// Service manager that records calls
pub struct FakeServices {
    journal: Journal,
    failing: HashSet<String>,
}

impl FakeServices {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            failing: HashSet::new(),
        }
    }

    pub fn failing(mut self, unit: &str) -> Self {
        self.failing.insert(unit.to_string());
        self
    }

    fn call(&self, action: &str, command: &str, unit: &str) -> Result<()> {
        self.journal.record(format!("systemctl {command}"));
        if self.failing.contains(unit) {
            return Err(TrackerError::ServiceFailed {
                action: action.to_string(),
                unit: unit.to_string(),
                reason: "exit status 1".to_string(),
            });
        }
        Ok(())
    }
}

impl ServiceManager for FakeServices {
    fn restart(&self, unit: &str) -> Result<()> {
        self.call("restart", &format!("restart {unit}"), unit)
    }

    fn start(&self, unit: &str) -> Result<()> {
        self.call("start", &format!("start {unit}"), unit)
    }

    fn enable_now(&self, unit: &str) -> Result<()> {
        self.call("enable", &format!("enable --now {unit}"), unit)
    }

    fn daemon_reload(&self) -> Result<()> {
        self.call("reload", "daemon-reload", "systemd")
    }
}
