//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use chrono::NaiveDate;
use clap::Parser;
use tempfile::TempDir;

use alquimia_core::{
    Deadline, DocumentStore, ExportFormat, GoalDraft, GoalStatus, JsonFileStore, LifeState,
    Priority,
};

use crate::cli::{Cli, Commands, GoalsAction, HistoryAction};
use crate::commands::{self, score_bar, truncate, GoalEdit, Session};

fn session_with_goal() -> Session {
    let mut session = Session::in_memory();
    commands::cmd_goals_add(
        &mut session,
        GoalDraft {
            area: "Saúde".to_string(),
            specific: "Caminhar 30 minutos".to_string(),
            measurable: "5x por semana".to_string(),
            time_bound: NaiveDate::from_ymd_opt(2026, 6, 30).map(Deadline::Date),
            priority: Priority::High,
            ..Default::default()
        },
    )
    .unwrap();
    session
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Crescimento Pessoal", 10), "Crescim...");
    // Multi-byte characters are never split
    assert_eq!(truncate("Espiritualidade çãé", 18), "Espiritualidade...");
}

#[test]
fn test_score_bar() {
    assert_eq!(score_bar(0.0), "░░░░░░░░░░");
    assert_eq!(score_bar(6.5), "███████░░░");
    assert_eq!(score_bar(10.0), "██████████");
}

#[test]
fn test_parse_deadline() {
    assert_eq!(
        commands::parse_deadline("2026-12-31").unwrap(),
        NaiveDate::from_ymd_opt(2026, 12, 31).map(Deadline::Date)
    );
    assert_eq!(commands::parse_deadline("").unwrap(), None);
    assert!(commands::parse_deadline("31/12/2026").is_err());
}

#[test]
fn test_build_filter() {
    let filter = commands::build_filter(None, Some("pending"), Some("critical")).unwrap();
    assert_eq!(filter.status, Some(GoalStatus::Pending));
    assert_eq!(filter.priority, Some(Priority::Critical));

    assert!(commands::build_filter(None, Some("later"), None).is_err());
    assert!(commands::build_filter(None, None, Some("urgent")).is_err());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_goals_add() {
    let cli = Cli::try_parse_from([
        "alquimia",
        "--data",
        "/tmp/alquimia.json",
        "goals",
        "add",
        "--area",
        "Carreira",
        "--specific",
        "Curso",
        "--deadline",
        "2026-03-01",
    ])
    .unwrap();

    assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("/tmp/alquimia.json")));
    match cli.command {
        Commands::Goals {
            action:
                Some(GoalsAction::Add {
                    area,
                    priority,
                    deadline,
                    ..
                }),
        } => {
            assert_eq!(area, "Carreira");
            assert_eq!(priority, "Média");
            assert_eq!(deadline.as_deref(), Some("2026-03-01"));
        }
        _ => panic!("expected goals add"),
    }
}

#[test]
fn test_parse_history_clear() {
    let cli = Cli::try_parse_from(["alquimia", "history", "clear", "--yes"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::History {
            limit: 12,
            action: Some(HistoryAction::Clear { yes: true })
        }
    ));
}

// ========== Score Command Tests ==========

#[test]
fn test_cmd_scores_set() {
    let mut session = Session::in_memory();
    commands::cmd_scores_set(&mut session, "Família", 8.5).unwrap();
    assert_eq!(session.state.scores["Família"], 8.5);
    assert!(commands::cmd_scores_show(&session).is_ok());
}

#[test]
fn test_cmd_scores_set_invalid() {
    let mut session = Session::in_memory();
    assert!(commands::cmd_scores_set(&mut session, "Família", 10.5).is_err());
    assert!(commands::cmd_scores_set(&mut session, "Astronomia", 5.0).is_err());
}

// ========== Goal Command Tests ==========

#[test]
fn test_cmd_goals_add_and_list() {
    let session = session_with_goal();
    assert_eq!(session.state.goals.len(), 1);
    assert!(commands::cmd_goals_list(&session, &Default::default()).is_ok());
}

#[test]
fn test_cmd_goals_add_requires_specific() {
    let mut session = Session::in_memory();
    let result = commands::cmd_goals_add(
        &mut session,
        GoalDraft {
            area: "Saúde".to_string(),
            ..Default::default()
        },
    );
    assert!(result.is_err());
    assert!(session.state.goals.is_empty());
}

#[test]
fn test_cmd_goals_edit_keeps_unset_fields() {
    let mut session = session_with_goal();
    commands::cmd_goals_edit(
        &mut session,
        0,
        GoalEdit {
            specific: Some("Caminhar 45 minutos".to_string()),
            priority: Some("Crítica".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let goal = &session.state.goals[0];
    assert_eq!(goal.specific, "Caminhar 45 minutos");
    assert_eq!(goal.priority, Priority::Critical);
    assert_eq!(goal.measurable, "5x por semana");
    assert_eq!(
        goal.time_bound,
        NaiveDate::from_ymd_opt(2026, 6, 30).map(Deadline::Date)
    );
}

#[test]
fn test_cmd_goals_edit_clears_deadline() {
    let mut session = session_with_goal();
    commands::cmd_goals_edit(
        &mut session,
        0,
        GoalEdit {
            deadline: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(session.state.goals[0].time_bound, None);
}

#[test]
fn test_cmd_goals_complete_reopen_delete() {
    let mut session = session_with_goal();

    commands::cmd_goals_set_completed(&mut session, 0, true).unwrap();
    assert!(session.state.goals[0].completed);
    commands::cmd_goals_set_completed(&mut session, 0, false).unwrap();
    assert!(!session.state.goals[0].completed);

    assert!(commands::cmd_goals_delete(&mut session, 3).is_err());
    commands::cmd_goals_delete(&mut session, 0).unwrap();
    assert!(session.state.goals.is_empty());
}

// ========== Insight & Summary Tests ==========

#[test]
fn test_cmd_insights_and_summary() {
    let mut session = session_with_goal();
    assert!(commands::cmd_insights(&session).is_ok());
    assert!(commands::cmd_summary(&session).is_ok());

    for area in alquimia_core::DEFAULT_AREAS {
        session.state.set_score(area, 9.0).unwrap();
    }
    // Celebration path
    assert!(commands::cmd_insights(&session).is_ok());
}

// ========== History Tests ==========

#[test]
fn test_cmd_checkin_and_clear() {
    let mut session = Session::in_memory();
    session.state.set_score("Carreira", 6.0).unwrap();

    commands::cmd_checkin(&mut session).unwrap();
    commands::cmd_checkin(&mut session).unwrap();
    assert_eq!(session.state.history.len(), 2);
    assert!(commands::cmd_history(&session, 5).is_ok());

    commands::cmd_history_clear(&mut session, true).unwrap();
    assert!(session.state.history.is_empty());
}

// ========== Journal Tests ==========

#[test]
fn test_cmd_journal_entries() {
    let mut session = Session::in_memory();
    commands::cmd_reflect(&mut session, "gratidao_2025", "Amigos").unwrap();
    commands::cmd_vision(&mut session, "💰 Abundância", "Reserva").unwrap();
    commands::cmd_archetype(&mut session, "👑 Queen/Rainha", 6.5).unwrap();

    assert_eq!(session.state.reflections["gratidao_2025"], "Amigos");
    assert_eq!(session.state.vision_intentions["💰 Abundância"], "Reserva");
    assert_eq!(session.state.archetype_scores["👑 Queen/Rainha"], 6.5);

    assert!(commands::cmd_archetype(&mut session, "👑 Queen/Rainha", -1.0).is_err());
}

// ========== File-backed Tests ==========

#[test]
fn test_cmd_init_creates_data_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("alquimia_data.json");

    commands::cmd_init(&path).unwrap();
    assert!(path.exists());

    let doc = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(doc.roda_scores.len(), 10);

    // Second run leaves the file alone
    assert!(commands::cmd_init(&path).is_ok());
}

#[test]
fn test_session_saves_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alquimia_data.json");

    let mut session = Session::open(&path, None).unwrap();
    commands::cmd_scores_set(&mut session, "Saúde", 7.0).unwrap();

    let reloaded = LifeState::load_from(&JsonFileStore::new(&path));
    assert_eq!(reloaded.scores["Saúde"], 7.0);
}

#[test]
fn test_cmd_export_writes_files() {
    let dir = TempDir::new().unwrap();
    let session = session_with_goal();

    let csv_path = dir.path().join("wheel.csv");
    let written = commands::cmd_export(&session, ExportFormat::Csv, Some(&csv_path)).unwrap();
    assert_eq!(written, csv_path);
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Área,Pontuação"));

    let json_path = dir.path().join("bundle.json");
    commands::cmd_export(&session, ExportFormat::Json, Some(&json_path)).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["smart_goals"][0]["specific"], "Caminhar 30 minutos");
}
