//! Repository cloning with libgit2

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;

use git2::{FetchOptions, ProxyOptions, RemoteCallbacks, build::RepoBuilder};
use tracing::{debug, warn};

use super::error::interpret_git_error;
use super::{CloneRequest, VcsClient};
use crate::error::{Result, TrackerError};

/// Clones over HTTPS with libgit2.
///
/// The clone runs on a worker thread and the caller waits at most
/// `request.timeout` for it, whether or not the remote sends anything.
/// On expiry the worker is told to abort at its next callback and is left
/// to wind down on its own.
#[derive(Debug, Clone, Default)]
pub struct Git2Client;

impl Git2Client {
    pub fn new() -> Self {
        Self
    }
}

/// Owned copy of a clone request, handed to the worker thread
struct CloneJob {
    url: String,
    branch: String,
    dest: PathBuf,
    proxy: Option<String>,
}

impl CloneJob {
    fn run(
        &self,
        cancelled: &AtomicBool,
        output: &Mutex<String>,
    ) -> std::result::Result<(), git2::Error> {
        let mut callbacks = RemoteCallbacks::new();
        callbacks.sideband_progress(|data| {
            if let Ok(mut out) = output.lock() {
                out.push_str(&String::from_utf8_lossy(data));
            }
            !cancelled.load(Ordering::Relaxed)
        });
        callbacks.transfer_progress(|_| !cancelled.load(Ordering::Relaxed));

        let mut proxy = ProxyOptions::new();
        match &self.proxy {
            Some(url) => {
                debug!("Cloning {} through proxy {}", self.url, url);
                proxy.url(url);
            }
            None => {
                proxy.auto();
            }
        }

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        fetch_options.proxy_options(proxy);

        let mut builder = RepoBuilder::new();
        builder.branch(&self.branch);
        builder.fetch_options(fetch_options);
        builder.clone(&self.url, &self.dest).map(|_| ())
    }
}

fn captured(output: &Mutex<String>) -> String {
    output.lock().map(|out| out.clone()).unwrap_or_default()
}

impl VcsClient for Git2Client {
    fn clone_repo(&self, request: &CloneRequest<'_>) -> Result<()> {
        let job = CloneJob {
            url: request.url.to_string(),
            branch: request.branch.to_string(),
            dest: request.dest.to_path_buf(),
            proxy: request.env.proxy_for_url(request.url).map(str::to_string),
        };
        let cancelled = Arc::new(AtomicBool::new(false));
        let output = Arc::new(Mutex::new(String::new()));
        let (tx, rx) = mpsc::channel();

        {
            let cancelled = Arc::clone(&cancelled);
            let output = Arc::clone(&output);
            thread::Builder::new()
                .name("git-clone".to_string())
                .spawn(move || {
                    // The receiver is gone once the caller timed out
                    let _ = tx.send(job.run(&cancelled, &output));
                })
                .map_err(|e| TrackerError::CloneFailed {
                    url: request.url.to_string(),
                    reason: format!("Could not start clone worker: {e}"),
                    output: String::new(),
                })?;
        }

        match rx.recv_timeout(request.timeout) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(TrackerError::CloneFailed {
                url: request.url.to_string(),
                reason: interpret_git_error(&e),
                output: captured(&output),
            }),
            Err(RecvTimeoutError::Timeout) => {
                cancelled.store(true, Ordering::Relaxed);
                warn!(
                    "Clone of {} still running after {}s, abandoning it",
                    request.url,
                    request.timeout.as_secs()
                );
                Err(TrackerError::CloneTimedOut {
                    url: request.url.to_string(),
                    timeout_secs: request.timeout.as_secs(),
                })
            }
            Err(RecvTimeoutError::Disconnected) => Err(TrackerError::CloneFailed {
                url: request.url.to_string(),
                reason: "Clone worker exited without a result".to_string(),
                output: captured(&output),
            }),
        }
    }
}
