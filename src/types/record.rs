//! The persisted supplier record.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One supplier registration, as stored in the durable list and mirrored in
/// the session list.
///
/// Serialized with camelCase field names for compatibility with the existing
/// `suppliers.json` data format. Field declaration order matches the on-disk
/// key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    /// Epoch milliseconds at creation time. Not guaranteed unique across
    /// near-simultaneous registrations; callers must not treat it as a key.
    pub id: i64,
    pub company_name: String,
    /// One of the fixed service categories (see [`crate::constants::JOB_TYPES`]).
    /// Presence-checked at ingestion; membership is not enforced.
    pub job_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_info: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_responsibilities: String,
    /// Public path of the stored logo asset (`/image/{filename}`), or an
    /// empty string when no logo was attached.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_logo_url: String,
    /// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
    pub created_at: String,
}

impl SupplierRecord {
    /// Build a record stamped with the current time.
    #[must_use]
    pub fn new(
        company_name: String,
        job_type: String,
        contact_info: String,
        job_responsibilities: String,
        company_logo_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            company_name,
            job_type,
            contact_info,
            job_responsibilities,
            company_logo_url,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parse `created_at` back into a timestamp. `None` when the stored
    /// string is not valid RFC 3339 (legacy hand-edited data).
    #[must_use]
    pub fn created_at_instant(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

// Lists written by the original tool contain `null` for form fields the
// submitter left out; fold those to empty strings on read.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
