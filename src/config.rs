//! Environment-driven server configuration.

use std::env;
use std::path::PathBuf;

use crate::constants::{ASSET_DIR_NAME, LIST_FILE_NAME};

/// Runtime configuration for the HTTP server. All values come from the
/// environment with sensible defaults; the file layout under the public
/// root is fixed (see [`crate::constants`]).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SUPPLIER_BIND`, default `0.0.0.0:3000`.
    pub bind_addr: String,
    /// `SUPPLIER_PUBLIC_ROOT`, default `public`. Holds the supplier list
    /// file and the asset directory.
    pub public_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            public_root: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("SUPPLIER_BIND").unwrap_or(defaults.bind_addr),
            public_root: env::var("SUPPLIER_PUBLIC_ROOT")
                .map_or(defaults.public_root, PathBuf::from),
        }
    }

    /// Path of the durable supplier list file.
    #[must_use]
    pub fn list_path(&self) -> PathBuf {
        self.public_root.join(LIST_FILE_NAME)
    }

    /// Directory holding uploaded logo assets.
    #[must_use]
    pub fn asset_dir(&self) -> PathBuf {
        self.public_root.join(ASSET_DIR_NAME)
    }
}
