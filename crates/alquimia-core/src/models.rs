//! Domain models for Alquimia

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// The fixed set of life areas on the wheel, in display order
pub const DEFAULT_AREAS: [&str; 10] = [
    "Saúde",
    "Carreira",
    "Finanças",
    "Relacionamentos",
    "Família",
    "Espiritualidade",
    "Diversão",
    "Crescimento Pessoal",
    "Ambiente Físico",
    "Criatividade",
];

/// Reflection prompts collected on the review screen
pub const REFLECTION_KEYS: [&str; 8] = [
    "conquistas_2025",
    "desafios_2025",
    "aprendizados_2025",
    "gratidao_2025",
    "feiticeira_presente",
    "archetypes_atencao",
    "rituais_2026",
    "eva_magia",
];

/// Vision board areas that carry a free-text intention
pub const VISION_AREAS: [&str; 8] = [
    "🌸 EVA - Minha Criação Sagrada",
    "🌿 Saúde & Bem-Estar",
    "🔮 Espiritualidade",
    "🦋 Crescimento Pessoal",
    "💕 Amor Próprio",
    "🇮🇹 Italia & Aventuras",
    "💰 Abundância",
    "🎨 Criatividade",
];

/// Archetypes scored for presence in the user's life
pub const ARCHETYPES: [&str; 9] = [
    "🔮 Sorceress/Feiticeira",
    "🌸 Maiden/Donzela",
    "💕 Lover/Amante",
    "🤱 Mother/Mãe",
    "👑 Queen/Rainha",
    "🐺 Wild Woman/Selvagem",
    "⚔️ Warrior/Guerreira",
    "🦉 Wise Woman/Sábia",
    "🌙 Mystic/Mística",
];

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Maximum number of check-ins kept in history (a year of monthly check-ins)
pub const HISTORY_LIMIT: usize = 12;

/// Life area name -> score, in wheel order
pub type WheelScores = IndexMap<String, f64>;

/// Scores for every default area, all starting at zero
pub fn default_scores() -> WheelScores {
    DEFAULT_AREAS
        .iter()
        .map(|area| (area.to_string(), MIN_SCORE))
        .collect()
}

/// Check that a score is within [0, 10] and on a 0.5 step
pub fn validate_score(score: f64) -> Result<()> {
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(Error::InvalidData(format!(
            "Score {} is outside the range {}-{}",
            score, MIN_SCORE, MAX_SCORE
        )));
    }
    if (score * 2.0).fract() != 0.0 {
        return Err(Error::InvalidData(format!(
            "Score {} must be a multiple of 0.5",
            score
        )));
    }
    Ok(())
}

/// Arithmetic mean of all scores, or None when there are no areas
pub fn mean_score(scores: &WheelScores) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.values().sum::<f64>() / scores.len() as f64)
}

/// Current local wall-clock time, the timestamp format stored in documents
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Goal priority as chosen on the goal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    #[serde(rename = "Baixa")]
    Low,
    #[serde(rename = "Média")]
    #[default]
    Medium,
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Crítica")]
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::Critical => "Crítica",
        }
    }

    /// All priorities, most urgent first
    pub fn all() -> &'static [Priority] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baixa" | "low" => Ok(Self::Low),
            "média" | "media" | "medium" => Ok(Self::Medium),
            "alta" | "high" => Ok(Self::High),
            "crítica" | "critica" | "critical" => Ok(Self::Critical),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Completion status used when filtering goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Completed,
    Pending,
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" | "completadas" | "done" => Ok(Self::Completed),
            "pending" | "pendentes" | "open" => Ok(Self::Pending),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

/// A SMART goal attached to a life area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Life area this goal belongs to (not checked against the wheel)
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub specific: String,
    #[serde(default)]
    pub measurable: String,
    #[serde(default)]
    pub achievable: String,
    #[serde(default)]
    pub relevant: String,
    /// Deadline, if one was set
    #[serde(default, deserialize_with = "deserialize_time_bound")]
    pub time_bound: Option<Deadline>,
    /// Archetype that supports this goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    /// Set once at creation
    #[serde(default = "now_local")]
    pub created_date: NaiveDateTime,
}

impl Goal {
    /// Build a new, not yet completed goal from a submitted draft
    pub fn from_draft(draft: GoalDraft, created_date: NaiveDateTime) -> Result<Self> {
        draft.validate()?;
        Ok(Self {
            area: draft.area,
            specific: draft.specific,
            measurable: draft.measurable,
            achievable: draft.achievable,
            relevant: draft.relevant,
            time_bound: draft.time_bound,
            archetype: draft.archetype,
            priority: draft.priority,
            completed: false,
            created_date,
        })
    }

    /// Replace every editable field, keeping completion and creation date
    pub fn apply(&mut self, draft: GoalDraft) -> Result<()> {
        draft.validate()?;
        self.area = draft.area;
        self.specific = draft.specific;
        self.measurable = draft.measurable;
        self.achievable = draft.achievable;
        self.relevant = draft.relevant;
        self.time_bound = draft.time_bound;
        self.archetype = draft.archetype;
        self.priority = draft.priority;
        Ok(())
    }
}

/// User-submitted goal fields, used for both creation and full edits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub area: String,
    pub specific: String,
    #[serde(default)]
    pub measurable: String,
    #[serde(default)]
    pub achievable: String,
    #[serde(default)]
    pub relevant: String,
    #[serde(default, deserialize_with = "deserialize_time_bound")]
    pub time_bound: Option<Deadline>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl GoalDraft {
    /// A draft needs at least the "specific" statement
    pub fn validate(&self) -> Result<()> {
        if self.specific.trim().is_empty() {
            return Err(Error::InvalidData(
                "A goal needs a specific description".to_string(),
            ));
        }
        Ok(())
    }
}

/// A goal deadline
///
/// Older documents stored whatever the user typed ("Até dezembro de 2026"),
/// so text that is not a date is kept as written and saved back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deadline {
    Date(NaiveDate),
    Text(String),
}

impl Deadline {
    /// The calendar date, when the deadline is one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(_) => None,
        }
    }
}

impl From<NaiveDate> for Deadline {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Parse a goal deadline.
///
/// `YYYY-MM-DD` and ISO datetimes (date part kept) become dates, blank is
/// no deadline, and anything else is kept verbatim as text.
pub fn parse_time_bound(raw: &str) -> Option<Deadline> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(Deadline::Date(date));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Deadline::Date(datetime.date()));
    }
    debug!(value = trimmed, "Keeping free-text goal deadline");
    Some(Deadline::Text(raw.to_string()))
}

fn deserialize_time_bound<'de, D>(deserializer: D) -> std::result::Result<Option<Deadline>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_time_bound))
}

/// A check-in snapshot of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDateTime,
    pub roda_scores: WheelScores,
    pub avg_score: f64,
}

/// The persisted application document
///
/// Every key is optional on load so older and partial files still open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub roda_scores: WheelScores,
    #[serde(default)]
    pub smart_goals: Vec<Goal>,
    #[serde(default)]
    pub reflections: IndexMap<String, String>,
    #[serde(default)]
    pub vision_intentions: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub archetype_scores: IndexMap<String, f64>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
}
