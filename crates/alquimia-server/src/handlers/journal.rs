//! Reflection, vision board and archetype handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppState, Saved};

/// Request body for free-text entries
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Request body for archetype scores
#[derive(Debug, Deserialize)]
pub struct ArchetypeRequest {
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct TextEntry {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ArchetypeEntry {
    pub name: String,
    pub score: f64,
}

/// PUT /api/reflections/:key - Save a reflection answer
pub async fn set_reflection(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(req): Json<TextRequest>,
) -> Result<Json<Saved<TextEntry>>, AppError> {
    let mut life = state.lock()?;
    life.set_reflection(&key, &req.text)
        .map_err(AppError::from_core)?;
    info!(key = %key, "Reflection saved");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(
        TextEntry {
            key,
            text: req.text,
        },
        warning,
    )))
}

/// PUT /api/vision/:area - Save a vision board intention
pub async fn set_vision_intention(
    State(state): State<Arc<AppState>>,
    Path(area): Path<String>,
    Json(req): Json<TextRequest>,
) -> Result<Json<Saved<TextEntry>>, AppError> {
    let mut life = state.lock()?;
    life.set_vision_intention(&area, &req.text)
        .map_err(AppError::from_core)?;
    info!(area = %area, "Vision intention saved");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(
        TextEntry {
            key: area,
            text: req.text,
        },
        warning,
    )))
}

/// PUT /api/archetypes/:name - Score an archetype's presence
pub async fn set_archetype_score(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<ArchetypeRequest>,
) -> Result<Json<Saved<ArchetypeEntry>>, AppError> {
    let mut life = state.lock()?;
    life.set_archetype_score(&name, req.score)
        .map_err(AppError::from_core)?;
    info!(archetype = %name, score = req.score, "Archetype scored");

    let warning = state.persist(&life);
    Ok(Json(Saved::new(
        ArchetypeEntry {
            name,
            score: req.score,
        },
        warning,
    )))
}
