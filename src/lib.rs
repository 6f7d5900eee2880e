#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Strategic lint exceptions - allowed project-wide for pragmatic reasons:
//
// Documentation lints: Many internal/self-documenting functions don't need extensive docs.
// Public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Return value wrapping: Some functions use Result for consistency even when they
// currently can't fail, allowing future error conditions to be added without breaking API.
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

//! Supplier directory core: a file-backed record store, an ingestion pipeline
//! for supplier registrations with logo uploads, and the session-side list and
//! search state that fronts it.
//!
//! The durable list is a single pretty-printed JSON array on disk, newest
//! record first. Writers are serialized (in-process mutex plus a cross-process
//! advisory lock) and the file is replaced atomically, so concurrent
//! registrations cannot lose appends. A missing or unparsable list file is
//! recovered as an empty list rather than surfaced as an error.

/// The supplier-directory crate version (matches `Cargo.toml`).
pub const SUPPLIER_DIRECTORY_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod http;
pub mod ingest;
mod lock;
pub mod store;
pub mod types;

pub use config::ServerConfig;
pub use directory::{DirectorySession, PendingUpload, SubmitOutcome, SupplierForm, filter_records};
pub use error::{DirectoryError, Result};
pub use ingest::{IngestReceipt, Ingestor, Submission, UploadedFile};
pub use store::assets::{AssetStore, StoredAsset};
pub use store::{JsonFileStore, SupplierStore};
pub use types::{SearchOutcome, SearchQuery, SupplierRecord, UploadResponse};
