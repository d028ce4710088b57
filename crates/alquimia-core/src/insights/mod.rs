//! Insight Engine - which life areas need attention next
//!
//! Given the wheel scores and the goal list, the engine ranks the lowest
//! areas, flags critical and low areas, finds low areas that have no goals
//! yet, and recommends an action for each of the lowest areas:
//!
//! - **create_first** - no goals exist for the area
//! - **create_more** - every goal is done but the score is still low
//! - **focus_existing** - goals are still pending
//!
//! Everything here is a pure function of its inputs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use alquimia_core::insights::{compute_insights, should_show_insights};
//!
//! if should_show_insights(&state.scores) {
//!     let result = compute_insights(&state.scores, &state.goals);
//! }
//! ```

pub mod engine;
pub mod types;

pub use engine::{
    aggregate_goals, compute_insights, recommend, should_show_insights, InsightEngine,
    InsightThresholds, CELEBRATION_AVERAGE, CRITICAL_THRESHOLD, FOCUS_AREA_COUNT,
    LOW_SCORE_THRESHOLD,
};
pub use types::{
    AreaScore, AreaWithoutGoals, GoalTally, InsightRecommendation, InsightResult, PriorityLevel,
    RecommendedAction, Severity,
};
