//! Flat on-disk store for uploaded logo assets.

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::constants::{ASSET_NONCE_MAX, PUBLIC_ASSET_PREFIX};
use crate::error::Result;

/// A stored asset: its on-disk file name and the public path recorded in
/// supplier records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub filename: String,
    pub public_path: String,
}

/// Writes uploaded binaries into a single flat directory with
/// collision-resistant generated names.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist `bytes` under a freshly generated name and return the stored
    /// asset. The directory is created on demand.
    ///
    /// The write itself is not atomic; a crash mid-write leaves a partial
    /// file, but the supplier record referencing it is only appended after
    /// this returns, so a committed record never points at a partial asset.
    pub fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredAsset> {
        fs::create_dir_all(&self.root)?;

        let filename = unique_filename(original_name);
        let path = self.root.join(&filename);
        fs::write(&path, bytes)?;

        tracing::debug!(
            asset.path = %path.display(),
            asset.bytes = bytes.len(),
            "logo asset stored"
        );
        Ok(StoredAsset {
            public_path: format!("{PUBLIC_ASSET_PREFIX}/{filename}"),
            filename,
        })
    }

    /// Resolve a served asset name to its on-disk path. Returns `None` for
    /// names that are empty or would escape the asset directory.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let relative = Path::new(name);
        let single_normal_component = {
            let mut components = relative.components();
            matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            )
        };
        if !single_normal_component {
            return None;
        }
        Some(self.root.join(relative))
    }
}

/// `{epoch-ms}-{nonce}-{sanitized original name}`.
///
/// Two uploads within the same millisecond still get distinct names with
/// overwhelming probability thanks to the random nonce. Only the final path
/// component of the client-supplied name is kept, and spaces become
/// underscores.
fn unique_filename(original_name: &str) -> String {
    let base = Path::new(original_name)
        .file_name()
        .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
    let sanitized = base.replace(' ', "_");
    let millis = Utc::now().timestamp_millis();
    let nonce: u32 = rand::thread_rng().gen_range(0..=ASSET_NONCE_MAX);
    format!("{millis}-{nonce}-{sanitized}")
}
