//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How urgently a low area needs goal-setting attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "critical",
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(PriorityLevel::Critical),
            "high" => Ok(PriorityLevel::High),
            "medium" => Ok(PriorityLevel::Medium),
            _ => Err(format!("Unknown priority level: {}", s)),
        }
    }
}

/// Severity tag on a low area that has no goals yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the user should do next for an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Start with a first goal
    CreateFirst,
    /// Every goal is done but the score is still low
    CreateMore,
    /// Keep working on the pending goals
    FocusExisting,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::CreateFirst => "create_first",
            RecommendedAction::CreateMore => "create_more",
            RecommendedAction::FocusExisting => "focus_existing",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An area together with its current score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScore {
    pub area: String,
    pub score: f64,
}

impl AreaScore {
    pub fn new(area: impl Into<String>, score: f64) -> Self {
        Self {
            area: area.into(),
            score,
        }
    }
}

/// Goal counts for one area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTally {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// A low-scoring area with no goals attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaWithoutGoals {
    pub area: String,
    pub score: f64,
    pub severity: Severity,
}

/// Recommendation for one of the lowest-scoring areas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecommendation {
    pub area: String,
    pub score: f64,
    pub has_goals: bool,
    pub goal_count: usize,
    pub pending_count: usize,
    pub completed_count: usize,
    pub priority_level: PriorityLevel,
    pub message: String,
    pub action: RecommendedAction,
}

/// Everything the insight screen needs, recomputed on every render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightResult {
    /// Lowest-scoring areas, ascending (ties keep wheel order)
    pub bottom_3: Vec<AreaScore>,
    /// Areas at or below the critical threshold
    pub critical_areas: Vec<AreaScore>,
    /// Areas at or below the low threshold
    pub low_areas: Vec<AreaScore>,
    pub areas_without_goals: Vec<AreaWithoutGoals>,
    /// One entry per `bottom_3` area, same order
    pub priority_recommendations: Vec<InsightRecommendation>,
}
