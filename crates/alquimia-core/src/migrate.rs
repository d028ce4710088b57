//! Legacy document migration
//!
//! Older data files used bilingual area names ("Saúde/Health") and stored
//! archetype scores under `arch_`-prefixed keys. Migration rewrites both to
//! the current form. It is applied on every load and is idempotent.

use indexmap::IndexMap;
use tracing::info;

use crate::models::{Document, WheelScores};

/// Prefix the old archetype sliders used for their storage keys
pub const ARCHETYPE_KEY_PREFIX: &str = "arch_";

/// Short form of an area name: the text before the first `/`, trimmed.
///
/// Names without a `/` are returned unchanged.
pub fn short_area_name(name: &str) -> &str {
    match name.split_once('/') {
        Some((short, _)) if !short.trim().is_empty() => short.trim(),
        _ => name,
    }
}

/// Rename legacy area keys; when two keys collapse to one name the first wins
pub fn migrate_scores(scores: &WheelScores) -> WheelScores {
    let mut migrated = WheelScores::with_capacity(scores.len());
    for (area, score) in scores {
        migrated
            .entry(short_area_name(area).to_string())
            .or_insert(*score);
    }
    migrated
}

fn migrate_archetype_scores(scores: &IndexMap<String, f64>) -> IndexMap<String, f64> {
    let mut migrated = IndexMap::with_capacity(scores.len());
    for (name, score) in scores {
        let name = name.strip_prefix(ARCHETYPE_KEY_PREFIX).unwrap_or(name);
        migrated.entry(name.to_string()).or_insert(*score);
    }
    migrated
}

/// Migrate a loaded document in place. Returns true if anything changed.
pub fn migrate_document(doc: &mut Document) -> bool {
    let mut changed = false;

    let scores = migrate_scores(&doc.roda_scores);
    if scores != doc.roda_scores {
        doc.roda_scores = scores;
        changed = true;
    }

    let mut renamed_goals = 0;
    for goal in &mut doc.smart_goals {
        let short = short_area_name(&goal.area);
        if short != goal.area {
            goal.area = short.to_string();
            renamed_goals += 1;
        }
    }
    changed |= renamed_goals > 0;

    for entry in &mut doc.history {
        let scores = migrate_scores(&entry.roda_scores);
        if scores != entry.roda_scores {
            entry.roda_scores = scores;
            changed = true;
        }
    }

    let archetypes = migrate_archetype_scores(&doc.archetype_scores);
    if archetypes != doc.archetype_scores {
        doc.archetype_scores = archetypes;
        changed = true;
    }

    if changed {
        info!(goals = renamed_goals, "Migrated legacy field names");
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, GoalDraft, HistoryEntry};
    use chrono::NaiveDate;

    fn legacy_document() -> Document {
        let mut doc = Document::default();
        doc.roda_scores.insert("Saúde/Health".to_string(), 4.0);
        doc.roda_scores.insert("Carreira/Career".to_string(), 7.0);
        doc.roda_scores
            .insert("Crescimento Pessoal/Growth".to_string(), 6.0);

        let created = NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        doc.smart_goals.push(
            Goal::from_draft(
                GoalDraft {
                    area: "Saúde/Health".to_string(),
                    specific: "Dormir 8 horas".to_string(),
                    ..Default::default()
                },
                created,
            )
            .unwrap(),
        );
        doc.history.push(HistoryEntry {
            date: created,
            roda_scores: doc.roda_scores.clone(),
            avg_score: 17.0 / 3.0,
        });
        doc.archetype_scores
            .insert("arch_🔮 Sorceress/Feiticeira".to_string(), 8.0);
        doc
    }

    #[test]
    fn test_short_area_name() {
        assert_eq!(short_area_name("Saúde/Health"), "Saúde");
        assert_eq!(short_area_name("Ambiente Físico/Home"), "Ambiente Físico");
        assert_eq!(short_area_name("Saúde"), "Saúde");
        assert_eq!(short_area_name("/Health"), "/Health");
    }

    #[test]
    fn test_migrate_document_renames_everywhere() {
        let mut doc = legacy_document();
        assert!(migrate_document(&mut doc));

        let areas: Vec<&str> = doc.roda_scores.keys().map(String::as_str).collect();
        assert_eq!(areas, vec!["Saúde", "Carreira", "Crescimento Pessoal"]);
        assert_eq!(doc.smart_goals[0].area, "Saúde");
        assert!(doc.history[0].roda_scores.contains_key("Carreira"));
        assert_eq!(
            doc.archetype_scores.get("🔮 Sorceress/Feiticeira"),
            Some(&8.0)
        );
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let mut once = legacy_document();
        migrate_document(&mut once);

        let mut twice = once.clone();
        assert!(!migrate_document(&mut twice));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collapsing_keys_keep_first() {
        let mut scores = WheelScores::new();
        scores.insert("Saúde/Health".to_string(), 3.0);
        scores.insert("Saúde".to_string(), 9.0);

        let migrated = migrate_scores(&scores);
        assert_eq!(migrated.len(), 1);
        assert_eq!(migrated.get("Saúde"), Some(&3.0));
    }
}
