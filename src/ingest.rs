//! Record ingestion: validate one registration, persist its logo asset, and
//! append the supplier record to the durable list.
//!
//! The asset write happens before the record append. A crash between the two
//! leaves an orphaned asset file with no referencing record; the reverse (a
//! committed record pointing at a missing asset) cannot happen.

use std::sync::Arc;

use crate::error::{DirectoryError, Result};
use crate::store::SupplierStore;
use crate::store::assets::AssetStore;
use crate::types::SupplierRecord;

/// An uploaded file part: the client-supplied name and its raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// One registration, typed at the boundary. Text fields arrive as-sent;
/// required-field checks happen in [`Ingestor::ingest`].
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub logo: Option<UploadedFile>,
    pub company_name: String,
    pub job_type: String,
    pub contact_info: String,
    pub job_responsibilities: String,
}

/// Successful ingestion result: the record as committed to the durable list.
#[derive(Debug, Clone)]
pub struct IngestReceipt {
    pub record: SupplierRecord,
}

/// The ingestion pipeline: asset store plus the durable-list repository.
pub struct Ingestor {
    assets: AssetStore,
    store: Arc<dyn SupplierStore>,
}

impl Ingestor {
    #[must_use]
    pub fn new(assets: AssetStore, store: Arc<dyn SupplierStore>) -> Self {
        Self { assets, store }
    }

    /// Validate and persist one registration.
    ///
    /// Fails with [`DirectoryError::MissingField`] when the file part is
    /// absent or either required text field is blank; the file requirement
    /// matches the shipped client, which only calls this path when a logo is
    /// attached. Nothing is written before validation passes.
    pub fn ingest(&self, submission: Submission) -> Result<IngestReceipt> {
        let logo = submission
            .logo
            .ok_or(DirectoryError::MissingField { field: "file" })?;
        let company_name = required(&submission.company_name, "companyName")?;
        let job_type = required(&submission.job_type, "jobType")?;

        let asset = self.assets.store(&logo.name, &logo.bytes)?;

        let record = SupplierRecord::new(
            company_name,
            job_type,
            submission.contact_info,
            submission.job_responsibilities,
            asset.public_path,
        );
        self.store.append(record.clone())?;

        tracing::info!(
            supplier.id = record.id,
            supplier.company = %record.company_name,
            supplier.logo = %record.company_logo_url,
            "supplier registered"
        );
        Ok(IngestReceipt { record })
    }
}

fn required(value: &str, field: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DirectoryError::MissingField { field });
    }
    Ok(value.to_string())
}
