//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Session handling and `init`
//! - `export` - JSON and CSV exports
//! - `goals` - SMART goal commands (list, add, edit, complete, reopen, delete)
//! - `history` - Check-ins and history
//! - `insights` - Insights and dashboard summary
//! - `journal` - Reflections, vision board, archetypes
//! - `scores` - Wheel of Life scores
//! - `serve` - Web server command

pub mod core;
pub mod export;
pub mod goals;
pub mod history;
pub mod insights;
pub mod journal;
pub mod scores;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use export::*;
pub use goals::*;
pub use history::*;
pub use insights::*;
pub use journal::*;
pub use scores::*;
pub use serve::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Ten-cell bar for a 0-10 score, half cells rounded up
pub fn score_bar(score: f64) -> String {
    let filled = score.clamp(0.0, 10.0).ceil() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
