//! Session state
//!
//! `LifeState` holds everything the screens edit: wheel scores, goals,
//! reflections, vision intentions, archetype scores and check-in history.
//! It is loaded once from a `DocumentStore`, mutated through explicit calls,
//! and written back with `persist`.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::insights::{InsightEngine, InsightResult};
use crate::models::{
    default_scores, mean_score, now_local, validate_score, Document, Goal, GoalDraft,
    HistoryEntry, WheelScores, DEFAULT_AREAS, HISTORY_LIMIT, MAX_SCORE, MIN_SCORE,
};
use crate::store::DocumentStore;

/// Clamp a loaded score into range and onto the nearest 0.5 step
fn repair_score(name: &str, score: f64) -> f64 {
    if validate_score(score).is_ok() {
        return score;
    }
    let repaired = if score.is_finite() {
        ((score * 2.0).round() / 2.0).clamp(MIN_SCORE, MAX_SCORE)
    } else {
        MIN_SCORE
    };
    warn!(key = name, score, repaired, "Repaired invalid saved score");
    repaired
}

/// In-memory application state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeState {
    pub scores: WheelScores,
    pub goals: Vec<Goal>,
    pub reflections: IndexMap<String, String>,
    pub vision_intentions: IndexMap<String, String>,
    pub archetype_scores: IndexMap<String, f64>,
    pub history: Vec<HistoryEntry>,
}

impl Default for LifeState {
    fn default() -> Self {
        Self {
            scores: default_scores(),
            goals: Vec::new(),
            reflections: IndexMap::new(),
            vision_intentions: IndexMap::new(),
            archetype_scores: IndexMap::new(),
            history: Vec::new(),
        }
    }
}

impl LifeState {
    /// Build state from a stored document.
    ///
    /// Any default area missing from the document is added with a zero
    /// score; areas outside the default set are kept.
    /// Scores outside 0-10 or off the 0.5 grid are repaired.
    pub fn from_document(doc: Document) -> Self {
        let mut scores = doc.roda_scores;
        for (area, score) in scores.iter_mut() {
            *score = repair_score(area, *score);
        }
        let mut archetype_scores = doc.archetype_scores;
        for (name, score) in archetype_scores.iter_mut() {
            *score = repair_score(name, *score);
        }
        for area in DEFAULT_AREAS {
            scores.entry(area.to_string()).or_insert(0.0);
        }

        let mut history = doc.history;
        if history.len() > HISTORY_LIMIT {
            history.drain(..history.len() - HISTORY_LIMIT);
        }

        Self {
            scores,
            goals: doc.smart_goals,
            reflections: doc.reflections,
            vision_intentions: doc.vision_intentions,
            archetype_scores,
            history,
        }
    }

    /// Snapshot the state as a document stamped with `last_updated`
    pub fn to_document(&self, last_updated: NaiveDateTime) -> Document {
        Document {
            roda_scores: self.scores.clone(),
            smart_goals: self.goals.clone(),
            reflections: self.reflections.clone(),
            vision_intentions: self.vision_intentions.clone(),
            archetype_scores: self.archetype_scores.clone(),
            history: self.history.clone(),
            last_updated: Some(last_updated),
        }
    }

    /// Load from the store, falling back to defaults.
    ///
    /// A missing or unreadable document is treated as "no prior data".
    /// Scores of zero are taken as saved; nothing is reloaded behind them.
    pub fn load_from(store: &dyn DocumentStore) -> Self {
        match store.load() {
            Ok(Some(doc)) => {
                info!(
                    store = store.name(),
                    goals = doc.smart_goals.len(),
                    check_ins = doc.history.len(),
                    "Loaded saved data"
                );
                Self::from_document(doc)
            }
            Ok(None) => {
                info!(store = store.name(), "No saved data, starting fresh");
                Self::default()
            }
            Err(e) => {
                warn!(store = store.name(), error = %e, "Could not read saved data, starting fresh");
                match store.backup_unreadable() {
                    Ok(Some(backup)) => {
                        warn!(backup = %backup.display(), "Unreadable data kept as a backup")
                    }
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "Could not back up unreadable data"),
                }
                Self::default()
            }
        }
    }

    /// Write the whole state to the store
    pub fn persist(&self, store: &dyn DocumentStore) -> Result<()> {
        store.save(&self.to_document(now_local()))?;
        info!(store = store.name(), "Saved data");
        Ok(())
    }

    // ========== Wheel ==========

    /// Set the score of an existing area
    pub fn set_score(&mut self, area: &str, score: f64) -> Result<()> {
        validate_score(score)?;
        let slot = self
            .scores
            .get_mut(area)
            .ok_or_else(|| Error::NotFound(format!("Life area '{}'", area)))?;
        *slot = score;
        Ok(())
    }

    /// Mean of all scores, 0 for an empty wheel
    pub fn average_score(&self) -> f64 {
        mean_score(&self.scores).unwrap_or(0.0)
    }

    // ========== Goals ==========

    /// Add a goal, returning its index
    pub fn add_goal(&mut self, draft: GoalDraft) -> Result<usize> {
        let goal = Goal::from_draft(draft, now_local())?;
        if !self.scores.contains_key(&goal.area) {
            warn!(area = %goal.area, "Goal area is not on the wheel");
        }
        self.goals.push(goal);
        Ok(self.goals.len() - 1)
    }

    pub fn goal(&self, index: usize) -> Result<&Goal> {
        self.goals
            .get(index)
            .ok_or_else(|| Error::NotFound(format!("Goal #{}", index)))
    }

    fn goal_mut(&mut self, index: usize) -> Result<&mut Goal> {
        self.goals
            .get_mut(index)
            .ok_or_else(|| Error::NotFound(format!("Goal #{}", index)))
    }

    /// Replace every editable field of a goal
    pub fn update_goal(&mut self, index: usize, draft: GoalDraft) -> Result<&Goal> {
        let goal = self.goal_mut(index)?;
        goal.apply(draft)?;
        Ok(goal)
    }

    pub fn set_goal_completed(&mut self, index: usize, completed: bool) -> Result<&Goal> {
        let goal = self.goal_mut(index)?;
        goal.completed = completed;
        Ok(goal)
    }

    /// Remove a goal; later goals shift down by one index
    pub fn delete_goal(&mut self, index: usize) -> Result<Goal> {
        if index >= self.goals.len() {
            return Err(Error::NotFound(format!("Goal #{}", index)));
        }
        Ok(self.goals.remove(index))
    }

    // ========== History ==========

    /// Record a check-in of the current wheel, keeping the last 12
    pub fn check_in(&mut self, at: NaiveDateTime) -> &HistoryEntry {
        self.history.push(HistoryEntry {
            date: at,
            roda_scores: self.scores.clone(),
            avg_score: self.average_score(),
        });
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        &self.history[self.history.len() - 1]
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ========== Reflections, vision board, archetypes ==========

    pub fn set_reflection(&mut self, key: &str, text: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidData("Reflection key is empty".to_string()));
        }
        self.reflections.insert(key.to_string(), text.to_string());
        Ok(())
    }

    pub fn set_vision_intention(&mut self, area: &str, text: &str) -> Result<()> {
        let area = area.trim();
        if area.is_empty() {
            return Err(Error::InvalidData("Vision area is empty".to_string()));
        }
        self.vision_intentions
            .insert(area.to_string(), text.to_string());
        Ok(())
    }

    pub fn set_archetype_score(&mut self, name: &str, score: f64) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData("Archetype name is empty".to_string()));
        }
        validate_score(score)?;
        self.archetype_scores.insert(name.to_string(), score);
        Ok(())
    }

    // ========== Insights ==========

    pub fn insights(&self, engine: &InsightEngine) -> InsightResult {
        engine.compute(&self.scores, &self.goals)
    }

    pub fn should_show_insights(&self, engine: &InsightEngine) -> bool {
        engine.should_show(&self.scores)
    }
}
