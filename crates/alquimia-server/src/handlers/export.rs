//! Export handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Response, StatusCode},
};
use tracing::info;

use crate::{AppError, AppState};
use alquimia_core::models::now_local;
use alquimia_core::{export_json as render_json, scores_csv, ExportFormat};

fn download(format: ExportFormat, body: String) -> Result<Response<Body>, AppError> {
    let file_name = format.file_name(now_local().date());
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format.content_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )
        .body(Body::from(body))
        .map_err(|e| AppError::internal(&e.to_string()))
}

/// GET /api/export/json - Wheel, goals and yearly reflections as JSON
pub async fn export_json(State(state): State<Arc<AppState>>) -> Result<Response<Body>, AppError> {
    let json = {
        let life = state.lock()?;
        render_json(&life, now_local())?
    };
    info!("Exported data to JSON");
    download(ExportFormat::Json, json)
}

/// GET /api/export/csv - Wheel scores as CSV
pub async fn export_csv(State(state): State<Arc<AppState>>) -> Result<Response<Body>, AppError> {
    let csv = {
        let life = state.lock()?;
        scores_csv(&life.scores)?
    };
    let rows = csv.lines().count().saturating_sub(1);
    info!("Exported {} areas to CSV", rows);
    download(ExportFormat::Csv, csv)
}
