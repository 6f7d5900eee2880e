//! Advisory cross-process lock on a sidecar file.
//!
//! Serializes list-file writers across processes; the in-process writer
//! mutex lives in the store. The lock file itself carries no data and is
//! left in place between runs.

use std::fs::{File, OpenOptions};
use std::path::Path;

use fs2::FileExt;

use crate::error::{DirectoryError, Result};

/// Exclusive advisory lock, released on drop.
#[derive(Debug)]
pub(crate) struct FileLock {
    file: File,
}

impl FileLock {
    /// Open (creating if missing) and exclusively lock the file at `path`.
    /// Blocks until the lock is available.
    pub(crate) fn acquire(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        file.lock_exclusive().map_err(|err| DirectoryError::Lock {
            reason: format!("exclusive lock on {}: {err}", path.display()),
        })?;
        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock failure leaves the lock to be released by the OS at close.
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
