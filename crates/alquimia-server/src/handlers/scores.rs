//! Wheel of Life score handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState, Saved};
use alquimia_core::WheelScores;

/// Request body for setting a score
#[derive(Debug, Deserialize)]
pub struct SetScoreRequest {
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub area: String,
    pub score: f64,
    pub average: f64,
}

/// GET /api/scores - Current wheel, in wheel order
pub async fn get_scores(State(state): State<Arc<AppState>>) -> Result<Json<WheelScores>, AppError> {
    let life = state.lock()?;
    Ok(Json(life.scores.clone()))
}

/// PUT /api/scores/:area - Set one area's score
pub async fn set_score(
    State(state): State<Arc<AppState>>,
    Path(area): Path<String>,
    Json(req): Json<SetScoreRequest>,
) -> Result<Json<Saved<ScoreResponse>>, AppError> {
    let mut life = state.lock()?;
    life.set_score(&area, req.score)
        .map_err(AppError::from_core)?;
    info!(area = %area, score = req.score, "Score updated");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(
        ScoreResponse {
            area,
            score: req.score,
            average: life.average_score(),
        },
        warning,
    )))
}
