//! Alquimia Core Library
//!
//! Shared functionality for the Alquimia life-planning tool:
//! - Wheel of Life scores and SMART goals
//! - Insight Engine ranking the areas that need attention
//! - Whole-document JSON persistence with legacy migration
//! - Check-in history, dashboard statistics and exports
//! - TOML configuration for insight thresholds

pub mod config;
pub mod error;
pub mod export;
pub mod insights;
pub mod migrate;
pub mod models;
pub mod state;
pub mod stats;
pub mod store;

pub use config::{load_insight_engine, load_insight_thresholds, resolve_data_file};
pub use error::{Error, Result};
pub use export::{export_bundle, export_json, scores_csv, ExportBundle, ExportFormat};
pub use insights::{
    compute_insights, should_show_insights, InsightEngine, InsightResult, InsightThresholds,
};
pub use migrate::migrate_document;
pub use models::{
    Deadline, Document, Goal, GoalDraft, GoalStatus, HistoryEntry, Priority, WheelScores,
    DEFAULT_AREAS,
};
pub use state::LifeState;
pub use stats::{
    filter_goals, goal_stats, goals_by_area, goals_by_priority, recent_history, wheel_summary,
    GoalFilter, GoalStats, Outlook, PriorityBreakdown, WheelSummary,
};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
