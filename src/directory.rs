//! Session-side directory state: the in-memory supplier list, the
//! registration form, and the search filter.
//!
//! Responsibilities:
//! - Hold one session's view of the list: loaded once, sorted newest-first,
//!   never refetched.
//! - Apply optimistic appends on submit, decoupled from the durable write:
//!   the visible list gains the record immediately and unconditionally, and
//!   the asynchronous upload (driven by the caller) reconciles the logo
//!   reference later via [`DirectorySession::resolve_upload`].
//! - Answer search queries as a pure, synchronous filter over the list.
//!
//! The two writes are intentionally not transactional; within a session the
//! visible list can diverge from the durable store (an upload that fails or
//! is abandoned leaves the optimistic record with an empty logo reference).

use std::cmp::Ordering;
use std::fmt::Display;
use std::mem;

use crate::ingest::{Submission, UploadedFile};
use crate::types::{SearchOutcome, SearchQuery, SupplierRecord, UploadResponse};

/// Registration form state. Field values mirror the submission payload;
/// `logo`/`logo_preview` carry the attached file and its preview reference.
#[derive(Debug, Clone, Default)]
pub struct SupplierForm {
    pub company_name: String,
    pub job_type: String,
    pub contact_info: String,
    pub job_responsibilities: String,
    pub logo: Option<UploadedFile>,
    pub logo_preview: Option<String>,
}

impl SupplierForm {
    /// Attach a logo file and its preview reference (e.g. a data URL).
    pub fn attach_logo(&mut self, file: UploadedFile, preview: impl Into<String>) {
        self.logo = Some(file);
        self.logo_preview = Some(preview.into());
    }
}

/// Handle for a durable write still in flight after an optimistic append.
///
/// The caller POSTs [`PendingUpload::submission`] to the upload endpoint
/// (fire-and-forget; no retry, no timeout) and, if the response ever
/// arrives, feeds it back through [`DirectorySession::resolve_upload`].
#[derive(Debug, Clone)]
pub struct PendingUpload {
    record_id: i64,
    submission: Submission,
}

impl PendingUpload {
    /// Id of the optimistic record this upload reconciles.
    #[must_use]
    pub fn record_id(&self) -> i64 {
        self.record_id
    }

    /// The payload to send to the upload endpoint.
    #[must_use]
    pub fn submission(&self) -> &Submission {
        &self.submission
    }
}

/// Result of a form submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A required field was blank; nothing was appended and a message was
    /// surfaced.
    Rejected,
    /// The optimistic record was prepended. `pending` is `Some` when a logo
    /// was attached and a durable upload should be driven.
    Added { pending: Option<PendingUpload> },
}

/// One browser-session equivalent of the directory view.
///
/// Starts in the loading phase; the caller performs the single list fetch
/// and reports it through [`DirectorySession::load_ok`] or
/// [`DirectorySession::load_err`]. There is no retry.
#[derive(Debug, Default)]
pub struct DirectorySession {
    suppliers: Vec<SupplierRecord>,
    search_results: Vec<SupplierRecord>,
    search_term: String,
    job_type_search_term: String,
    message: Option<String>,
    loading: bool,
    /// The registration form; edited directly by the frontend.
    pub form: SupplierForm,
}

impl DirectorySession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// The list fetch succeeded: populate and sort descending by creation
    /// time. Records with unparsable timestamps sort last.
    pub fn load_ok(&mut self, mut records: Vec<SupplierRecord>) {
        records.sort_by(|a, b| match (a.created_at_instant(), b.created_at_instant()) {
            (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self.suppliers = records;
        self.loading = false;
    }

    /// The list fetch failed: surface a message and leave the list empty.
    /// The form stays usable.
    pub fn load_err(&mut self, error: impl Display) {
        self.message = Some(format!("Failed to load supplier list: {error}"));
        self.loading = false;
    }

    /// Submit the form.
    ///
    /// When the supplier name or job type is blank the append is blocked and
    /// a message is surfaced. Otherwise an ephemeral record (fresh
    /// timestamp id, empty logo reference) is prepended immediately,
    /// independent of whether the durable upload later succeeds, and the
    /// form is cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.form.company_name.trim().is_empty() || self.form.job_type.trim().is_empty() {
            self.message = Some("Please enter a supplier name and select a job type.".to_string());
            return SubmitOutcome::Rejected;
        }

        let form = mem::take(&mut self.form);
        let record = SupplierRecord::new(
            form.company_name.clone(),
            form.job_type.clone(),
            form.contact_info.clone(),
            form.job_responsibilities.clone(),
            String::new(),
        );
        let pending = form.logo.map(|file| PendingUpload {
            record_id: record.id,
            submission: Submission {
                logo: Some(file),
                company_name: form.company_name,
                job_type: form.job_type,
                contact_info: form.contact_info,
                job_responsibilities: form.job_responsibilities,
            },
        });

        self.suppliers.insert(0, record);
        self.message = Some("Added new supplier successfully!".to_string());
        SubmitOutcome::Added { pending }
    }

    /// Reconcile an optimistic record with the upload endpoint's response.
    ///
    /// On success the record picks up the server-confirmed logo path; on
    /// failure a message is surfaced and the record keeps its empty logo
    /// reference.
    pub fn resolve_upload(&mut self, pending: &PendingUpload, response: &UploadResponse) {
        if response.success {
            if let Some(path) = &response.company_logo_path {
                if let Some(record) = self
                    .suppliers
                    .iter_mut()
                    .find(|record| record.id == pending.record_id)
                {
                    record.company_logo_url = path.clone();
                    tracing::debug!(
                        supplier.id = record.id,
                        supplier.logo = %path,
                        "optimistic record reconciled"
                    );
                }
            }
        } else {
            self.message = Some(format!("Logo upload failed: {}", response.message));
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_job_type_filter(&mut self, job_type: impl Into<String>) {
        self.job_type_search_term = job_type.into();
    }

    /// Run the current search terms against the in-memory list.
    ///
    /// Both terms blank means search is not active: results and message are
    /// cleared, which renders differently from an active search with zero
    /// matches.
    pub fn run_search(&mut self) -> SearchOutcome {
        let query = SearchQuery {
            term: self.search_term.clone(),
            job_type: self.job_type_search_term.clone(),
        };
        if !query.is_active() {
            self.search_results.clear();
            self.message = None;
            return SearchOutcome::Inactive;
        }

        let results = filter_records(&self.suppliers, &query);
        self.message = Some(format!("Found {} matching suppliers.", results.len()));
        self.search_results.clone_from(&results);
        SearchOutcome::Matches(results)
    }

    #[must_use]
    pub fn suppliers(&self) -> &[SupplierRecord] {
        &self.suppliers
    }

    #[must_use]
    pub fn search_results(&self) -> &[SupplierRecord] {
        &self.search_results
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Pure filter behind [`DirectorySession::run_search`]: case-insensitive
/// substring match on the company name AND exact job-type match, either
/// predicate vacuously true when its term is blank.
#[must_use]
pub fn filter_records(records: &[SupplierRecord], query: &SearchQuery) -> Vec<SupplierRecord> {
    let term = query.term.trim().to_lowercase();
    let job_type = query.job_type.trim();
    records
        .iter()
        .filter(|record| {
            let company_match =
                term.is_empty() || record.company_name.to_lowercase().contains(&term);
            let type_match = job_type.is_empty() || record.job_type == job_type;
            company_match && type_match
        })
        .cloned()
        .collect()
}
