//! HTTP surface: the multipart upload endpoint plus read-side routes for the
//! list file and stored assets.
//!
//! Handlers are thin: multipart parts are collected into a typed
//! [`Submission`] at the boundary, the blocking ingestion pipeline runs on
//! the blocking pool, and every failure is converted to the structured
//! `{success, message}` wire contract. Nothing here is allowed to take the
//! process down.

use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::ingest::{Ingestor, Submission, UploadedFile};
use crate::store::JsonFileStore;
use crate::store::assets::AssetStore;
use crate::types::UploadResponse;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    ingestor: Arc<Ingestor>,
    assets: AssetStore,
    store: Arc<JsonFileStore>,
}

impl AppState {
    #[must_use]
    pub fn new(ingestor: Arc<Ingestor>, assets: AssetStore, store: Arc<JsonFileStore>) -> Self {
        Self {
            ingestor,
            assets,
            store,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload))
        .route("/suppliers.json", get(suppliers_json))
        .route("/image/:name", get(asset))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<UploadResponse>) {
    let submission = match read_submission(&mut multipart).await {
        Ok(submission) => submission,
        Err(message) => return (StatusCode::BAD_REQUEST, Json(UploadResponse::err(message))),
    };

    let ingestor = state.ingestor.clone();
    match tokio::task::spawn_blocking(move || ingestor.ingest(submission)).await {
        Ok(Ok(receipt)) => (
            StatusCode::OK,
            Json(UploadResponse::ok(
                "Supplier registered and logo stored.",
                receipt.record.company_logo_url,
            )),
        ),
        Ok(Err(err)) if err.is_validation() => (
            StatusCode::BAD_REQUEST,
            Json(UploadResponse::err(err.to_string())),
        ),
        Ok(Err(err)) => {
            tracing::error!(error = %err, "upload ingestion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadResponse::err(format!("server error: {err}"))),
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "upload ingestion task aborted");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadResponse::err("server error: ingestion task aborted")),
            )
        }
    }
}

/// Collect the multipart parts into a typed submission. Unknown parts are
/// skipped; required-field checks happen in the pipeline, not here.
async fn read_submission(multipart: &mut Multipart) -> Result<Submission, String> {
    let mut submission = Submission::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| format!("malformed multipart payload: {err}"))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| format!("failed to read file part: {err}"))?;
                submission.logo = Some(UploadedFile {
                    name: file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "companyName" => submission.company_name = text_part(field).await?,
            "jobType" => submission.job_type = text_part(field).await?,
            "contactInfo" => submission.contact_info = text_part(field).await?,
            "jobResponsibilities" => submission.job_responsibilities = text_part(field).await?,
            _ => {}
        }
    }
    Ok(submission)
}

async fn text_part(field: Field<'_>) -> Result<String, String> {
    field
        .text()
        .await
        .map_err(|err| format!("failed to read text part: {err}"))
}

/// Serve the durable list verbatim. A missing or unreadable file serves an
/// empty array, matching the store's recovery semantics.
async fn suppliers_json(State(state): State<AppState>) -> Response {
    let path = state.store.list_path().to_path_buf();
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(err) => {
            tracing::debug!(
                store.path = %path.display(),
                error = %err,
                "list file unreadable, serving empty list"
            );
            ([(header::CONTENT_TYPE, "application/json")], "[]").into_response()
        }
    }
}

async fn asset(State(state): State<AppState>, UrlPath(name): UrlPath<String>) -> Response {
    let Some(path) = state.assets.resolve(&name) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&name))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn healthz() -> &'static str {
    "ok"
}

fn content_type_for(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
