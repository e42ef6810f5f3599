//! Common test utilities for transition-tracker integration tests

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;
use transition_tracker::config::{ProcessEnvironment, Settings, WorkspaceLayout};
use transition_tracker::packages::PackageManager;
use transition_tracker::systemd::ServiceManager;
use transition_tracker::{Collaborators, Result, Transition};

/// A host filesystem rooted in a temporary directory
pub struct TestHost {
    pub temp: TempDir,
    pub layout: WorkspaceLayout,
}

impl TestHost {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let layout = WorkspaceLayout::under(temp.path());
        Self { temp, layout }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file below the host root
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read file")
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered record of calls made to the fake host tools
#[derive(Clone, Default)]
pub struct Calls(Rc<RefCell<Vec<String>>>);

impl Calls {
    pub fn push(&self, call: String) {
        self.0.borrow_mut().push(call);
    }

    pub fn all(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Package manager that accepts every package
pub struct RecordingPackages(pub Calls);

impl PackageManager for RecordingPackages {
    fn refresh_index(&self, _env: &ProcessEnvironment) -> Result<()> {
        self.0.push("apt update".to_string());
        Ok(())
    }

    fn install(&self, name: &str, _env: &ProcessEnvironment) -> Result<()> {
        self.0.push(format!("apt install {name}"));
        Ok(())
    }
}

/// Service manager that accepts every call
pub struct RecordingServices(pub Calls);

impl ServiceManager for RecordingServices {
    fn restart(&self, unit: &str) -> Result<()> {
        self.0.push(format!("restart {unit}"));
        Ok(())
    }

    fn start(&self, unit: &str) -> Result<()> {
        self.0.push(format!("start {unit}"));
        Ok(())
    }

    fn enable_now(&self, unit: &str) -> Result<()> {
        self.0.push(format!("enable --now {unit}"));
        Ok(())
    }

    fn daemon_reload(&self) -> Result<()> {
        self.0.push("daemon-reload".to_string());
        Ok(())
    }
}

/// Create a git repository with one commit on `main` and return its URL
pub fn create_config_repo(dir: &Path) -> String {
    let mut opts = git2::RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = git2::Repository::init_opts(dir, &opts).expect("Failed to init repository");

    std::fs::create_dir_all(dir.join("config")).unwrap();
    std::fs::write(dir.join("config/transitions.conf"), "# transitions\n").unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("config/transitions.conf")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();

    format!("file://{}", dir.display())
}

/// Controller with fake apt/systemd, real libgit2 and the built-in assets
pub fn transition(host: &TestHost, settings: Settings, calls: &Calls) -> Transition {
    Transition::new(
        settings,
        host.layout.clone(),
        [("PATH", "/usr/bin:/bin")],
        Collaborators {
            packages: Box::new(RecordingPackages(calls.clone())),
            vcs: Box::new(transition_tracker::git::Git2Client::new()),
            services: Box::new(RecordingServices(calls.clone())),
            assets: Box::new(transition_tracker::assets::EmbeddedAssets),
        },
    )
}

/// Tracker binary rooted at `root`, isolated from the caller's environment
pub fn tracker_cmd(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("transition-tracker").unwrap();
    for name in [
        "JUJU_CHARM_HTTP_PROXY",
        "JUJU_CHARM_HTTPS_PROXY",
        "TRANSITION_TRACKER_ASSETS",
        "TRANSITION_TRACKER_CONFIG",
        "TRANSITION_TRACKER_REPO_URL",
        "TRANSITION_TRACKER_BRANCH",
        "TRANSITION_TRACKER_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(name);
    }
    cmd.env("TRANSITION_TRACKER_ROOT", root);
    cmd
}
