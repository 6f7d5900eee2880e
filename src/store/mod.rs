//! Durable supplier list storage.
//!
//! Responsibilities:
//! - Define the repository seam (`SupplierStore`) between the ingestion
//!   pipeline and persistence.
//! - Keep the JSON list file consistent under concurrent registrations:
//!   writers are serialized in-process by a mutex and cross-process by an
//!   advisory lock, and every rewrite replaces the file atomically.
//! - Recover a missing or unparsable list file as an empty list on read.

pub mod assets;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::constants::LOCK_FILE_SUFFIX;
use crate::error::{DirectoryError, Result};
use crate::lock::FileLock;
use crate::types::SupplierRecord;

/// Repository seam over the durable supplier list.
///
/// The list is ordered newest-first: `append` prepends. Records are never
/// updated or deleted.
pub trait SupplierStore: Send + Sync {
    /// Read the full list. A missing or unreadable store reads as empty.
    fn load_all(&self) -> Result<Vec<SupplierRecord>>;

    /// Durably prepend one record.
    fn append(&self, record: SupplierRecord) -> Result<()>;
}

/// File-backed [`SupplierStore`] over a single pretty-printed JSON array.
#[derive(Debug)]
pub struct JsonFileStore {
    list_path: PathBuf,
    lock_path: PathBuf,
    writer: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the list file at `list_path`. The file is not
    /// created until the first append; the sidecar lock file sits next to it.
    #[must_use]
    pub fn new(list_path: impl Into<PathBuf>) -> Self {
        let list_path = list_path.into();
        let mut lock_name = list_path
            .file_name()
            .map_or_else(|| "suppliers.json".into(), |n| n.to_os_string());
        lock_name.push(LOCK_FILE_SUFFIX);
        let lock_path = list_path.with_file_name(lock_name);
        Self {
            list_path,
            lock_path,
            writer: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn list_path(&self) -> &Path {
        &self.list_path
    }

    /// Tolerant read of the list file. Any failure (missing file, I/O error,
    /// invalid JSON) recovers as an empty list; this is the store's bootstrap
    /// path, not an error.
    fn read_list(&self) -> Vec<SupplierRecord> {
        let bytes = match fs::read(&self.list_path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(
                    store.path = %self.list_path.display(),
                    error = %err,
                    "list file unreadable, starting from empty"
                );
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    store.path = %self.list_path.display(),
                    error = %err,
                    "list file unparsable, starting from empty"
                );
                Vec::new()
            }
        }
    }

    fn parent_dir(&self) -> &Path {
        self.list_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Serialize `records` and atomically replace the list file: write to a
    /// temp file in the same directory, fsync, then rename over the target.
    fn replace_list(&self, records: &[SupplierRecord]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        serde_json::to_writer_pretty(&mut tmp, records)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.list_path)
            .map_err(|err| DirectoryError::Io(err.error))?;
        Ok(())
    }
}

impl SupplierStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<SupplierRecord>> {
        Ok(self.read_list())
    }

    fn append(&self, record: SupplierRecord) -> Result<()> {
        let _writer = self.writer.lock().map_err(|_| DirectoryError::Lock {
            reason: "writer mutex poisoned".to_string(),
        })?;
        // The lock file sits next to the list file, so the directory must
        // exist before the lock can be taken.
        fs::create_dir_all(self.parent_dir())?;
        let _flock = FileLock::acquire(&self.lock_path)?;

        let mut records = self.read_list();
        records.insert(0, record);
        self.replace_list(&records)?;

        tracing::debug!(
            store.path = %self.list_path.display(),
            store.len = records.len(),
            "supplier list rewritten"
        );
        Ok(())
    }
}
