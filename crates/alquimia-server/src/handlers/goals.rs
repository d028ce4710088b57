//! SMART goal handlers
//!
//! Goals are addressed by their position in the goal list. Deleting a goal
//! shifts later indices down by one, so clients should refetch after a delete.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState, Saved};
use alquimia_core::{filter_goals, Goal, GoalDraft, GoalFilter, GoalStatus, Priority};

/// Query parameters for listing goals
#[derive(Debug, Default, Deserialize)]
pub struct GoalQuery {
    /// Exact area name
    pub area: Option<String>,
    /// completed | pending
    pub status: Option<String>,
    /// Baixa | Média | Alta | Crítica (English names accepted)
    pub priority: Option<String>,
}

impl GoalQuery {
    fn into_filter(self) -> Result<GoalFilter, AppError> {
        let status = self
            .status
            .filter(|s| !s.is_empty() && s != "all")
            .map(|s| s.parse::<GoalStatus>())
            .transpose()
            .map_err(|e| AppError::bad_request(&e))?;
        let priority = self
            .priority
            .filter(|s| !s.is_empty() && s != "all")
            .map(|s| s.parse::<Priority>())
            .transpose()
            .map_err(|e| AppError::bad_request(&e))?;
        Ok(GoalFilter {
            area: self.area.filter(|a| !a.is_empty()),
            status,
            priority,
        })
    }
}

/// A goal with its position in the full list
#[derive(Debug, Serialize)]
pub struct IndexedGoal {
    pub index: usize,
    #[serde(flatten)]
    pub goal: Goal,
}

impl IndexedGoal {
    fn new(index: usize, goal: &Goal) -> Self {
        Self {
            index,
            goal: goal.clone(),
        }
    }
}

/// GET /api/goals - List goals, optionally filtered
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GoalQuery>,
) -> Result<Json<Vec<IndexedGoal>>, AppError> {
    let filter = params.into_filter()?;
    let life = state.lock()?;
    let goals = filter_goals(&life.goals, &filter)
        .into_iter()
        .map(|(index, goal)| IndexedGoal::new(index, goal))
        .collect();
    Ok(Json(goals))
}

/// GET /api/goals/:index - Get a single goal
pub async fn get_goal(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<IndexedGoal>, AppError> {
    let life = state.lock()?;
    let goal = life.goal(index).map_err(AppError::from_core)?;
    Ok(Json(IndexedGoal::new(index, goal)))
}

/// POST /api/goals - Create a goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<GoalDraft>,
) -> Result<Json<Saved<IndexedGoal>>, AppError> {
    let mut life = state.lock()?;
    let index = life.add_goal(draft).map_err(AppError::from_core)?;
    let created = IndexedGoal::new(index, &life.goals[index]);
    info!(index, area = %created.goal.area, "Goal created");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(created, warning)))
}

/// PUT /api/goals/:index - Replace a goal's editable fields
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(draft): Json<GoalDraft>,
) -> Result<Json<Saved<IndexedGoal>>, AppError> {
    let mut life = state.lock()?;
    let updated = life
        .update_goal(index, draft)
        .map(|goal| IndexedGoal::new(index, goal))
        .map_err(AppError::from_core)?;
    info!(index, "Goal updated");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(updated, warning)))
}

/// POST /api/goals/:index/complete - Mark a goal completed
pub async fn complete_goal(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<Saved<IndexedGoal>>, AppError> {
    set_completed(&state, index, true)
}

/// POST /api/goals/:index/reopen - Mark a goal pending again
pub async fn reopen_goal(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<Saved<IndexedGoal>>, AppError> {
    set_completed(&state, index, false)
}

fn set_completed(
    state: &AppState,
    index: usize,
    completed: bool,
) -> Result<Json<Saved<IndexedGoal>>, AppError> {
    let mut life = state.lock()?;
    let goal = life
        .set_goal_completed(index, completed)
        .map(|goal| IndexedGoal::new(index, goal))
        .map_err(AppError::from_core)?;
    info!(index, completed, "Goal status changed");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(goal, warning)))
}

/// DELETE /api/goals/:index - Delete a goal, returning it
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<Saved<IndexedGoal>>, AppError> {
    let mut life = state.lock()?;
    let removed = life.delete_goal(index).map_err(AppError::from_core)?;
    info!(index, "Goal deleted");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(
        IndexedGoal {
            index,
            goal: removed,
        },
        warning,
    )))
}
