//! Alquimia CLI - Wheel of Life and SMART goal planner
//!
//! Usage:
//!   alquimia init                       Create the data file
//!   alquimia scores set "Saúde" 6.5     Score a life area
//!   alquimia insights                   See which areas need attention
//!   alquimia serve --port 3000          Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use alquimia_core::{ExportFormat, GoalDraft};
use cli::*;
use commands::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let data_path = commands::data_file(cli.data.as_deref());
    let config_path = cli.config.as_deref();
    let open = || Session::open(&data_path, config_path);

    match cli.command {
        Commands::Init => commands::cmd_init(&data_path),
        Commands::Scores { action } => {
            let mut session = open()?;
            match action {
                None | Some(ScoresAction::Show) => commands::cmd_scores_show(&session),
                Some(ScoresAction::Set { area, score }) => {
                    commands::cmd_scores_set(&mut session, &area, score)
                }
            }
        }
        Commands::Insights => commands::cmd_insights(&open()?),
        Commands::Summary => commands::cmd_summary(&open()?),
        Commands::Goals { action } => {
            let mut session = open()?;
            match action {
                None => commands::cmd_goals_list(&session, &Default::default()),
                Some(GoalsAction::List {
                    area,
                    status,
                    priority,
                }) => {
                    let filter =
                        commands::build_filter(area, status.as_deref(), priority.as_deref())?;
                    commands::cmd_goals_list(&session, &filter)
                }
                Some(GoalsAction::Add {
                    area,
                    specific,
                    measurable,
                    achievable,
                    relevant,
                    deadline,
                    archetype,
                    priority,
                }) => {
                    let draft = GoalDraft {
                        area,
                        specific,
                        measurable,
                        achievable,
                        relevant,
                        time_bound: match deadline {
                            Some(raw) => commands::parse_deadline(&raw)?,
                            None => None,
                        },
                        archetype,
                        priority: commands::parse_priority(&priority)?,
                    };
                    commands::cmd_goals_add(&mut session, draft)
                }
                Some(GoalsAction::Edit {
                    index,
                    area,
                    specific,
                    measurable,
                    achievable,
                    relevant,
                    deadline,
                    archetype,
                    priority,
                }) => {
                    let edit = commands::GoalEdit {
                        area,
                        specific,
                        measurable,
                        achievable,
                        relevant,
                        deadline,
                        archetype,
                        priority,
                    };
                    commands::cmd_goals_edit(&mut session, index, edit)
                }
                Some(GoalsAction::Complete { index }) => {
                    commands::cmd_goals_set_completed(&mut session, index, true)
                }
                Some(GoalsAction::Reopen { index }) => {
                    commands::cmd_goals_set_completed(&mut session, index, false)
                }
                Some(GoalsAction::Delete { index }) => {
                    commands::cmd_goals_delete(&mut session, index)
                }
            }
        }
        Commands::Checkin => commands::cmd_checkin(&mut open()?),
        Commands::History { limit, action } => {
            let mut session = open()?;
            match action {
                None => commands::cmd_history(&session, limit),
                Some(HistoryAction::Clear { yes }) => {
                    commands::cmd_history_clear(&mut session, yes)
                }
            }
        }
        Commands::Reflect { key, text } => commands::cmd_reflect(&mut open()?, &key, &text),
        Commands::Vision { area, text } => commands::cmd_vision(&mut open()?, &area, &text),
        Commands::Archetype { name, score } => {
            commands::cmd_archetype(&mut open()?, &name, score)
        }
        Commands::Export { export_type } => {
            let session = open()?;
            let (format, output) = match export_type {
                ExportType::Json { output } => (ExportFormat::Json, output),
                ExportType::Csv { output } => (ExportFormat::Csv, output),
            };
            commands::cmd_export(&session, format, output.as_deref()).map(|_| ())
        }
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(&data_path, config_path, &host, port, static_dir.as_deref())
                .await
        }
    }
}
