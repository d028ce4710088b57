//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `Session` - Loaded state plus the store it is saved to
//! - `cmd_init` - Create the data file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use alquimia_core::{config, DocumentStore, InsightEngine, JsonFileStore, LifeState};

/// State for one CLI invocation
pub struct Session {
    pub state: LifeState,
    pub store: Box<dyn DocumentStore>,
    pub engine: InsightEngine,
}

impl Session {
    /// Open the data file and insight config
    pub fn open(data_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let engine = config::load_insight_engine(config_path)
            .context("Failed to load insight config")?;
        debug!(path = %data_path.display(), "Opening data file");
        Ok(Self::with_store(Box::new(JsonFileStore::new(data_path)), engine))
    }

    pub fn with_store(store: Box<dyn DocumentStore>, engine: InsightEngine) -> Self {
        let state = LifeState::load_from(store.as_ref());
        Self {
            state,
            store,
            engine,
        }
    }

    /// Throwaway session that is never written to disk
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_store(
            Box::new(alquimia_core::MemoryStore::new()),
            InsightEngine::new(),
        )
    }

    /// Save the state. A failed save is reported but the command still succeeds.
    pub fn save(&self) -> bool {
        match self.state.persist(self.store.as_ref()) {
            Ok(()) => true,
            Err(e) => {
                println!("   ⚠️  Could not save changes: {}", e);
                false
            }
        }
    }
}

/// Resolve the data file from the `--data` flag and environment
pub fn data_file(explicit: Option<&Path>) -> PathBuf {
    config::resolve_data_file(explicit.map(Path::to_path_buf))
}

pub fn cmd_init(data_path: &Path) -> Result<()> {
    println!("🔧 Initializing Alquimia at {}...", data_path.display());

    let store = JsonFileStore::new(data_path);
    if data_path.exists() {
        let state = LifeState::load_from(&store);
        println!(
            "   Data file already exists ({} goals, {} check-ins)",
            state.goals.len(),
            state.history.len()
        );
        return Ok(());
    }

    LifeState::default()
        .persist(&store)
        .with_context(|| format!("Failed to create {}", data_path.display()))?;

    println!("✅ Data file created!");
    println!();
    println!("Next steps:");
    println!("  1. Score your wheel: alquimia scores set \"Saúde\" 6.5");
    println!("  2. See what needs attention: alquimia insights");
    println!("  3. Start web UI: alquimia serve");

    Ok(())
}
