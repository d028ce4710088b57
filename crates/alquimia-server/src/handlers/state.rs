//! Whole-state and dashboard summary handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{AppError, AppState};
use alquimia_core::{
    goal_stats, goals_by_area, goals_by_priority, wheel_summary, GoalStats, LifeState,
    PriorityBreakdown, WheelSummary,
};

/// Dashboard summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub wheel: WheelSummary,
    pub goals: GoalStats,
    pub goals_by_area: IndexMap<String, usize>,
    pub goals_by_priority: Vec<PriorityBreakdown>,
    pub check_ins: usize,
}

/// GET /api/state - Full session state
pub async fn get_state(State(state): State<Arc<AppState>>) -> Result<Json<LifeState>, AppError> {
    let life = state.lock()?;
    Ok(Json(life.clone()))
}

/// GET /api/summary - Wheel summary, goal progress and breakdowns
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, AppError> {
    let life = state.lock()?;
    Ok(Json(SummaryResponse {
        wheel: wheel_summary(&life.scores),
        goals: goal_stats(&life.goals),
        goals_by_area: goals_by_area(&life.goals),
        goals_by_priority: goals_by_priority(&life.goals),
        check_ins: life.history.len(),
    }))
}
