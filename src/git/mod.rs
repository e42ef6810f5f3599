//! Git operations for fetching the tracker configuration
//!
//! This module handles:
//! - Cloning the configuration repository at a fixed branch
//! - Routing the clone through the configured HTTP(S) proxy
//! - Bounding the transfer with a timeout
//! - Capturing remote progress output for diagnostics

mod clone;
mod error;

use std::path::Path;
use std::time::Duration;

use crate::config::ProcessEnvironment;
use crate::error::Result;

pub use clone::Git2Client;
pub use error::interpret_git_error;

/// Everything needed to clone one repository
#[derive(Debug, Clone, Copy)]
pub struct CloneRequest<'a> {
    pub url: &'a str,
    pub branch: &'a str,
    pub dest: &'a Path,
    pub env: &'a ProcessEnvironment,
    pub timeout: Duration,
}

/// Version control client used by the workspace provisioner
pub trait VcsClient {
    /// Clone `request.url` into `request.dest`, failing with `CloneFailed`
    /// or `CloneTimedOut`
    fn clone_repo(&self, request: &CloneRequest<'_>) -> Result<()>;
}
