use crate::errors::AppError;
use crate::ingest;
use crate::models::{LeadList, UploadResponse};
use crate::storage::LeadStore;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding the full lead collection.
    pub store: LeadStore,
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "leadshift-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/leads/upload
///
/// Accepts a multipart form with a `file` part containing a CSV of company
/// leads. The filename must end in `.csv`; extension checking happens here,
/// before the ingestion pipeline sees any bytes.
///
/// # Returns
///
/// * `Result<Json<UploadResponse>, AppError>` - The ingested count or an error.
pub async fn upload_leads(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    tracing::info!("POST /api/leads/upload");

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.ends_with(".csv") {
            return Err(AppError::BadRequest("File must be a CSV".to_string()));
        }

        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        let count = ingest::ingest_csv(&state.store, &contents).await?;
        tracing::info!("Uploaded {} leads from {}", count, filename);

        return Ok(Json(UploadResponse {
            message: format!("Successfully uploaded {} leads", count),
            count,
        }));
    }

    Err(AppError::BadRequest(
        "Missing file upload field".to_string(),
    ))
}

/// GET /api/leads
///
/// Returns every currently stored lead. Empty state is an empty list, never
/// an error.
pub async fn get_all_leads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeadList>, AppError> {
    let leads = state.store.get_all().await?;
    tracing::debug!("Returning {} leads", leads.len());
    Ok(Json(LeadList { leads }))
}
