//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod export;
pub mod goals;
pub mod history;
pub mod insights;
pub mod journal;
pub mod scores;
pub mod state;

// Re-export all handlers for use in router
pub use export::*;
pub use goals::*;
pub use history::*;
pub use insights::*;
pub use journal::*;
pub use scores::*;
pub use state::*;
