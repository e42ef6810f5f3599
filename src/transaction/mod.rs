//! Rollback of a partially provisioned tracker root
//!
//! The tracker root directory is the "already provisioned" flag, so it must
//! only survive a provisioning run that finished. A [`Transaction`] tracks the
//! directories a run creates and removes them again when dropped without a
//! [`commit`](Transaction::commit).
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! ensure_dir(&layout.tracker_root)?;
//! transaction.track_dir_created(&layout.tracker_root);
//!
//! // Perform the remaining steps...
//!
//! // On success:
//! transaction.commit();
//!
//! // On error the tracked directories are removed when `transaction` drops.
//! ```
//!
//! Files staged outside tracked directories are left alone.

use std::path::PathBuf;

use tracing::warn;

use crate::common::fs::remove_dir_all_if_exists;

/// Directories created by an in-flight provisioning run
#[derive(Debug, Default)]
pub struct Transaction {
    /// Directories created during this transaction
    created_dirs: Vec<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a directory that was created during this transaction
    pub fn track_dir_created(&mut self, path: impl Into<PathBuf>) {
        self.created_dirs.push(path.into());
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    fn rollback(&mut self) {
        // Newest first, so nested directories go before their parents
        for path in self.created_dirs.iter().rev() {
            if let Err(e) = remove_dir_all_if_exists(path) {
                warn!("Rollback could not remove {}: {}", path.display(), e);
            } else {
                warn!("Rolled back {}", path.display());
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_transaction_commit_keeps_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tracker");
        fs::create_dir_all(root.join("config")).unwrap();

        let mut transaction = Transaction::new();
        transaction.track_dir_created(&root);
        transaction.commit();

        assert!(root.join("config").is_dir());
    }

    #[test]
    fn test_transaction_rollback_on_drop() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tracker");

        {
            fs::create_dir_all(root.join("config/monitor")).unwrap();
            let mut transaction = Transaction::new();
            transaction.track_dir_created(&root);
            // Dropped without commit
        }

        assert!(!root.exists());
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_rollback_tolerates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let mut transaction = Transaction::new();
        transaction.track_dir_created(temp.path().join("never-created"));
        drop(transaction);
    }
}
