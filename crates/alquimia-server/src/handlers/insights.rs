//! Insight handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use alquimia_core::{InsightResult, InsightThresholds};

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    /// False once the wheel average reaches the celebration level
    pub show_insights: bool,
    pub result: InsightResult,
    pub thresholds: InsightThresholds,
}

/// GET /api/insights - Recompute insights from the current wheel and goals
///
/// The result is always returned; `show_insights` tells the UI whether to
/// render the panel or the celebration message.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InsightsResponse>, AppError> {
    let life = state.lock()?;
    Ok(Json(InsightsResponse {
        show_insights: life.should_show_insights(&state.engine),
        result: life.insights(&state.engine),
        thresholds: *state.engine.thresholds(),
    }))
}
