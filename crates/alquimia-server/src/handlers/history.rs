//! Check-in history handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState, Saved, SuccessResponse};
use alquimia_core::models::{now_local, HISTORY_LIMIT};
use alquimia_core::{recent_history, HistoryEntry};

/// Query parameters for listing history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    HISTORY_LIMIT
}

/// GET /api/history - Check-ins, newest first
pub async fn list_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let life = state.lock()?;
    let entries = recent_history(&life.history, params.limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(entries))
}

/// POST /api/history - Snapshot the current wheel
pub async fn check_in(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Saved<HistoryEntry>>, AppError> {
    let mut life = state.lock()?;
    let entry = life.check_in(now_local()).clone();
    info!(avg = entry.avg_score, "Check-in recorded");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(entry, warning)))
}

/// DELETE /api/history - Remove every check-in
pub async fn clear_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Saved<SuccessResponse>>, AppError> {
    let mut life = state.lock()?;
    life.clear_history();
    info!("History cleared");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(SuccessResponse { success: true }, warning)))
}
