//! Wire types shared by the upload endpoint and the directory session.

use serde::{Deserialize, Serialize};

/// Response body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// Public path of the stored logo asset; present on success so the
    /// session can reconcile its optimistic record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo_path: Option<String>,
}

impl UploadResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>, company_logo_path: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            company_logo_path: Some(company_logo_path.into()),
        }
    }

    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            company_logo_path: None,
        }
    }
}
