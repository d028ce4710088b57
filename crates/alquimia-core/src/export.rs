//! Export of the wheel and goals
//!
//! Supports:
//! - JSON bundle with the wheel, goals and the yearly reflections
//! - CSV of the wheel scores (`Área,Pontuação`)

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Goal, WheelScores};
use crate::state::LifeState;

/// Reflections carried in the JSON export, in bundle order
pub const EXPORTED_REFLECTIONS: [&str; 4] = [
    "conquistas_2025",
    "desafios_2025",
    "aprendizados_2025",
    "gratidao_2025",
];

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }

    /// Suggested download name for an export taken on `date`
    pub fn file_name(&self, date: NaiveDate) -> String {
        match self {
            ExportFormat::Json => format!("alquimia_{}.json", date.format("%Y%m%d")),
            ExportFormat::Csv => format!("alquimia_roda_vida_{}.csv", date.format("%Y%m%d")),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JSON export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub roda_da_vida: WheelScores,
    pub smart_goals: Vec<Goal>,
    /// The yearly reflections, flattened to top-level keys
    #[serde(flatten)]
    pub reflections: IndexMap<String, String>,
    pub exported_at: NaiveDateTime,
}

/// Build the JSON export. Missing reflections export as empty strings.
pub fn export_bundle(state: &LifeState, exported_at: NaiveDateTime) -> ExportBundle {
    let reflections = EXPORTED_REFLECTIONS
        .iter()
        .map(|key| {
            let text = state.reflections.get(*key).cloned().unwrap_or_default();
            (key.to_string(), text)
        })
        .collect();

    ExportBundle {
        roda_da_vida: state.scores.clone(),
        smart_goals: state.goals.clone(),
        reflections,
        exported_at,
    }
}

/// Pretty JSON text of the export bundle
pub fn export_json(state: &LifeState, exported_at: NaiveDateTime) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export_bundle(
        state,
        exported_at,
    ))?)
}

/// Wheel scores as CSV, one row per area in wheel order
pub fn scores_csv(scores: &WheelScores) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Área", "Pontuação"])?;
    for (area, score) in scores {
        writer.write_record([area.as_str(), &score.to_string()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::InvalidData(format!("Failed to finish CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(format!("CSV is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalDraft;

    fn exported_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(ExportFormat::Json.file_name(date), "alquimia_20260307.json");
        assert_eq!(
            ExportFormat::Csv.file_name(date),
            "alquimia_roda_vida_20260307.csv"
        );
    }

    #[test]
    fn test_bundle_keys() {
        let mut state = LifeState::default();
        state.set_score("Saúde", 6.5).unwrap();
        state.set_reflection("gratidao_2025", "Família").unwrap();
        state.set_reflection("rituais_2026", "Lua cheia").unwrap();
        state
            .add_goal(GoalDraft {
                area: "Saúde".to_string(),
                specific: "Yoga".to_string(),
                ..Default::default()
            })
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&export_json(&state, exported_at()).unwrap()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["roda_da_vida"]["Saúde"], 6.5);
        assert_eq!(obj["smart_goals"].as_array().unwrap().len(), 1);
        assert_eq!(obj["gratidao_2025"], "Família");
        assert_eq!(obj["conquistas_2025"], "");
        assert!(!obj.contains_key("rituais_2026"));
        assert_eq!(obj["exported_at"], "2026-01-15T10:30:00");
    }

    #[test]
    fn test_scores_csv() {
        let mut scores = WheelScores::new();
        scores.insert("Saúde".to_string(), 6.5);
        scores.insert("Crescimento Pessoal".to_string(), 8.0);
        scores.insert("Casa, Lar".to_string(), 3.0);

        let csv = scores_csv(&scores).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Área,Pontuação");
        assert_eq!(lines[1], "Saúde,6.5");
        assert_eq!(lines[2], "Crescimento Pessoal,8");
        assert_eq!(lines[3], "\"Casa, Lar\",3");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
