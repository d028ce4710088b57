//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Alquimia - Wheel of Life and SMART goal planner
#[derive(Parser)]
#[command(name = "alquimia")]
#[command(about = "Personal life-planning tool: Wheel of Life, SMART goals and insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file (defaults to $ALQUIMIA_DATA_FILE, then the local data directory)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Insight threshold config (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data file with an empty wheel
    Init,

    /// Show or set Wheel of Life scores
    Scores {
        #[command(subcommand)]
        action: Option<ScoresAction>,
    },

    /// Show which areas need attention next
    Insights,

    /// Show the dashboard summary
    Summary,

    /// Manage SMART goals (list, add, edit, complete, reopen, delete)
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Record a check-in of the current wheel
    Checkin,

    /// Show or clear check-in history
    History {
        /// Number of check-ins to show, newest first
        #[arg(short, long, default_value = "12")]
        limit: usize,

        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Answer a reflection prompt
    Reflect {
        /// Reflection key (e.g. gratidao_2025)
        key: String,
        /// Answer text
        text: String,
    },

    /// Set a vision board intention
    Vision {
        /// Vision area (e.g. "💰 Abundância")
        area: String,
        /// Intention text
        text: String,
    },

    /// Score how present an archetype is in your life
    Archetype {
        /// Archetype name (e.g. "👑 Queen/Rainha")
        name: String,
        /// Score 0-10 in 0.5 steps
        score: f64,
    },

    /// Export the wheel and goals
    Export {
        #[command(subcommand)]
        export_type: ExportType,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory with the static web UI
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ScoresAction {
    /// Show all scores
    Show,
    /// Set one area's score
    Set {
        /// Life area (e.g. "Saúde")
        area: String,
        /// Score 0-10 in 0.5 steps
        score: f64,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals
    List {
        /// Only goals in this area
        #[arg(long)]
        area: Option<String>,

        /// Filter by status: completed, pending
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority: Baixa, Média, Alta, Crítica
        #[arg(long)]
        priority: Option<String>,
    },

    /// Add a goal
    Add {
        /// Life area
        #[arg(short, long)]
        area: String,

        /// Specific: what exactly you want to achieve
        #[arg(short, long)]
        specific: String,

        /// Measurable: how you will know it is done
        #[arg(short, long, default_value = "")]
        measurable: String,

        /// Achievable: why it is realistic
        #[arg(long, default_value = "")]
        achievable: String,

        /// Relevant: why it matters
        #[arg(short, long, default_value = "")]
        relevant: String,

        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,

        /// Supporting archetype
        #[arg(long)]
        archetype: Option<String>,

        /// Priority: Baixa, Média, Alta, Crítica
        #[arg(short, long, default_value = "Média")]
        priority: String,
    },

    /// Edit a goal; omitted fields keep their values
    Edit {
        /// Goal index (see `goals list`)
        index: usize,

        #[arg(short, long)]
        area: Option<String>,

        #[arg(short, long)]
        specific: Option<String>,

        #[arg(short, long)]
        measurable: Option<String>,

        #[arg(long)]
        achievable: Option<String>,

        #[arg(short, long)]
        relevant: Option<String>,

        /// Deadline (YYYY-MM-DD, empty to clear)
        #[arg(short, long)]
        deadline: Option<String>,

        #[arg(long)]
        archetype: Option<String>,

        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Mark a goal completed
    Complete {
        /// Goal index
        index: usize,
    },

    /// Mark a goal pending again
    Reopen {
        /// Goal index
        index: usize,
    },

    /// Delete a goal
    Delete {
        /// Goal index
        index: usize,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Delete every check-in
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ExportType {
    /// Wheel, goals and yearly reflections as JSON
    Json {
        /// Output file (defaults to alquimia_YYYYMMDD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Wheel scores as CSV
    Csv {
        /// Output file (defaults to alquimia_roda_vida_YYYYMMDD.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
