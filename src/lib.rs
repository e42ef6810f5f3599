//! transition-tracker - provisioning and lifecycle for the Ubuntu transition tracker
//!
//! Installs the packages the tracker needs, clones its configuration
//! repository, stages the nginx site and the mirror sync helper, installs the
//! systemd service and timer, and drives them. [`transition::Transition`] is
//! the entry point; everything else is a step it sequences.

pub mod assets;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod git;
pub mod packages;
pub mod provision;
pub mod systemd;
pub mod transaction;
pub mod transition;

#[cfg(test)]
mod test_fixtures;

pub use error::{Result, TrackerError};
pub use transition::{Collaborators, TrackerStatus, Transition};
