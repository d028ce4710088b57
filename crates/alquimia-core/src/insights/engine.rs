//! Insight Engine - ranks life areas and recommends the next goal action

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::models::{mean_score, Goal, WheelScores};

use super::types::{
    AreaScore, AreaWithoutGoals, GoalTally, InsightRecommendation, InsightResult, PriorityLevel,
    RecommendedAction, Severity,
};

/// Scores at or below this are critical
pub const CRITICAL_THRESHOLD: f64 = 3.0;

/// Scores at or below this are low
pub const LOW_SCORE_THRESHOLD: f64 = 5.0;

/// Average at or above which the wheel is celebrated instead of analyzed
pub const CELEBRATION_AVERAGE: f64 = 7.5;

/// Number of lowest areas that get a recommendation
pub const FOCUS_AREA_COUNT: usize = 3;

/// Tunable thresholds for the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightThresholds {
    pub critical: f64,
    pub low: f64,
    pub celebration_average: f64,
    pub focus_count: usize,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            critical: CRITICAL_THRESHOLD,
            low: LOW_SCORE_THRESHOLD,
            celebration_average: CELEBRATION_AVERAGE,
            focus_count: FOCUS_AREA_COUNT,
        }
    }
}

impl InsightThresholds {
    pub fn priority_level(&self, score: f64) -> PriorityLevel {
        if score <= self.critical {
            PriorityLevel::Critical
        } else if score <= self.low {
            PriorityLevel::High
        } else {
            PriorityLevel::Medium
        }
    }

    pub fn severity(&self, score: f64) -> Severity {
        if score <= self.critical {
            Severity::Critical
        } else {
            Severity::High
        }
    }
}

/// Count goals per area. Areas without goals are absent from the map.
pub fn aggregate_goals(goals: &[Goal]) -> IndexMap<String, GoalTally> {
    let mut tallies: IndexMap<String, GoalTally> = IndexMap::new();
    for goal in goals {
        let tally = tallies.entry(goal.area.clone()).or_default();
        tally.total += 1;
        if goal.completed {
            tally.completed += 1;
        } else {
            tally.pending += 1;
        }
    }
    tallies
}

fn goals_label(count: usize) -> String {
    if count == 1 {
        "1 goal".to_string()
    } else {
        format!("{} goals", count)
    }
}

/// Build the recommendation for one area from its goal tally
pub fn recommend(
    area: &str,
    score: f64,
    tally: Option<&GoalTally>,
    thresholds: &InsightThresholds,
) -> InsightRecommendation {
    let counts = tally.copied().unwrap_or_default();

    let (message, action) = match tally {
        None => (
            "No goals created yet for this area".to_string(),
            RecommendedAction::CreateFirst,
        ),
        Some(t) if t.pending == 0 && t.completed > 0 => (
            format!(
                "{} completed, but the score is still low",
                goals_label(t.completed)
            ),
            RecommendedAction::CreateMore,
        ),
        Some(t) if t.pending > 0 => (
            format!("{} pending, keep going", goals_label(t.pending)),
            RecommendedAction::FocusExisting,
        ),
        Some(_) => (
            "This area needs attention".to_string(),
            RecommendedAction::CreateFirst,
        ),
    };

    InsightRecommendation {
        area: area.to_string(),
        score,
        has_goals: tally.is_some(),
        goal_count: counts.total,
        pending_count: counts.pending,
        completed_count: counts.completed,
        priority_level: thresholds.priority_level(score),
        message,
        action,
    }
}

/// The engine that turns scores and goals into recommendations
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    thresholds: InsightThresholds,
}

impl InsightEngine {
    /// Engine with the built-in thresholds
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &InsightThresholds {
        &self.thresholds
    }

    /// Rank areas and build recommendations. Pure; never fails.
    pub fn compute(&self, scores: &WheelScores, goals: &[Goal]) -> InsightResult {
        let t = &self.thresholds;
        let tallies = aggregate_goals(goals);

        let mut ranked: Vec<AreaScore> = scores
            .iter()
            .map(|(area, score)| AreaScore::new(area.as_str(), *score))
            .collect();
        // Stable sort: equal scores keep wheel order
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked.truncate(t.focus_count);
        let bottom = ranked;

        let critical_areas: Vec<AreaScore> = scores
            .iter()
            .filter(|(_, score)| **score <= t.critical)
            .map(|(area, score)| AreaScore::new(area.as_str(), *score))
            .collect();

        let low_areas: Vec<AreaScore> = scores
            .iter()
            .filter(|(_, score)| **score <= t.low)
            .map(|(area, score)| AreaScore::new(area.as_str(), *score))
            .collect();

        let areas_without_goals: Vec<AreaWithoutGoals> = low_areas
            .iter()
            .filter(|a| !tallies.contains_key(&a.area))
            .map(|a| AreaWithoutGoals {
                area: a.area.clone(),
                score: a.score,
                severity: t.severity(a.score),
            })
            .collect();

        let priority_recommendations: Vec<InsightRecommendation> = bottom
            .iter()
            .map(|a| recommend(&a.area, a.score, tallies.get(&a.area), t))
            .collect();

        debug!(
            areas = scores.len(),
            goals = goals.len(),
            critical = critical_areas.len(),
            without_goals = areas_without_goals.len(),
            "Computed insights"
        );

        InsightResult {
            bottom_3: bottom,
            critical_areas,
            low_areas,
            areas_without_goals,
            priority_recommendations,
        }
    }

    /// Whether to show insights rather than the celebration state.
    ///
    /// An empty wheel has nothing to analyze, so it returns false.
    pub fn should_show(&self, scores: &WheelScores) -> bool {
        match mean_score(scores) {
            Some(avg) => avg < self.thresholds.celebration_average,
            None => false,
        }
    }
}

/// Compute insights with the built-in thresholds
pub fn compute_insights(scores: &WheelScores, goals: &[Goal]) -> InsightResult {
    InsightEngine::new().compute(scores, goals)
}

/// True iff the mean score is below 7.5 (false for an empty wheel)
pub fn should_show_insights(scores: &WheelScores) -> bool {
    InsightEngine::new().should_show(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalDraft, Priority};
    use chrono::NaiveDate;

    fn wheel(entries: &[(&str, f64)]) -> WheelScores {
        entries
            .iter()
            .map(|(area, score)| (area.to_string(), *score))
            .collect()
    }

    fn goal(area: &str, completed: bool) -> Goal {
        let created = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut goal = Goal::from_draft(
            GoalDraft {
                area: area.to_string(),
                specific: format!("Goal for {}", area),
                priority: Priority::High,
                ..Default::default()
            },
            created,
        )
        .unwrap();
        goal.completed = completed;
        goal
    }

    fn names(areas: &[AreaScore]) -> Vec<&str> {
        areas.iter().map(|a| a.area.as_str()).collect()
    }

    #[test]
    fn test_reference_scenario_without_goals() {
        let scores = wheel(&[("A", 2.0), ("B", 4.0), ("C", 9.0), ("D", 7.0), ("E", 5.0)]);
        let result = compute_insights(&scores, &[]);

        assert_eq!(names(&result.bottom_3), vec!["A", "B", "E"]);
        assert_eq!(names(&result.critical_areas), vec!["A"]);
        assert_eq!(names(&result.low_areas), vec!["A", "B", "E"]);

        let without: Vec<(&str, Severity)> = result
            .areas_without_goals
            .iter()
            .map(|a| (a.area.as_str(), a.severity))
            .collect();
        assert_eq!(
            without,
            vec![
                ("A", Severity::Critical),
                ("B", Severity::High),
                ("E", Severity::High)
            ]
        );

        assert_eq!(result.priority_recommendations.len(), 3);
        assert!(result
            .priority_recommendations
            .iter()
            .all(|r| r.action == RecommendedAction::CreateFirst && !r.has_goals));
    }

    #[test]
    fn test_bottom_3_is_stable_on_ties() {
        let scores = wheel(&[("A", 5.0), ("B", 3.0), ("C", 5.0), ("D", 3.0), ("E", 5.0)]);
        let result = compute_insights(&scores, &[]);
        assert_eq!(names(&result.bottom_3), vec!["B", "D", "A"]);
    }

    #[test]
    fn test_high_score_never_in_bottom_3() {
        let scores = wheel(&[("Top", 9.0), ("A", 1.0), ("B", 8.5), ("C", 2.0), ("D", 8.0)]);
        let result = compute_insights(&scores, &[]);
        assert_eq!(result.bottom_3.len(), 3);
        assert!(!names(&result.bottom_3).contains(&"Top"));
        assert!(result
            .bottom_3
            .windows(2)
            .all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn test_critical_area_without_goals() {
        let scores = wheel(&[("Saúde", 2.0), ("Carreira", 8.0), ("Finanças", 9.0)]);
        let result = compute_insights(&scores, &[]);

        let rec = &result.priority_recommendations[0];
        assert_eq!(rec.area, "Saúde");
        assert_eq!(rec.action, RecommendedAction::CreateFirst);
        assert_eq!(rec.priority_level, PriorityLevel::Critical);
        assert_eq!(rec.goal_count, 0);
    }

    #[test]
    fn test_all_goals_completed_but_still_low() {
        let scores = wheel(&[("Saúde", 4.0), ("Carreira", 8.0), ("Finanças", 9.0)]);
        let goals = vec![goal("Saúde", true), goal("Saúde", true)];
        let result = compute_insights(&scores, &goals);

        let rec = &result.priority_recommendations[0];
        assert_eq!(rec.action, RecommendedAction::CreateMore);
        assert_eq!(rec.priority_level, PriorityLevel::High);
        assert_eq!(rec.completed_count, 2);
        assert!(rec.message.contains("2 goals completed"));
        assert!(result.areas_without_goals.is_empty());
    }

    #[test]
    fn test_pending_goals_focus_existing() {
        let scores = wheel(&[("Saúde", 6.0), ("Carreira", 8.0), ("Finanças", 9.0)]);
        let goals = vec![goal("Saúde", true), goal("Saúde", false)];
        let result = compute_insights(&scores, &goals);

        let rec = &result.priority_recommendations[0];
        assert_eq!(rec.action, RecommendedAction::FocusExisting);
        assert_eq!(rec.priority_level, PriorityLevel::Medium);
        assert_eq!(rec.pending_count, 1);
        assert!(rec.message.starts_with("1 goal pending"));
    }

    #[test]
    fn test_fallback_for_empty_tally() {
        let rec = recommend(
            "Diversão",
            3.5,
            Some(&GoalTally::default()),
            &InsightThresholds::default(),
        );
        assert!(rec.has_goals);
        assert_eq!(rec.action, RecommendedAction::CreateFirst);
        assert_eq!(rec.message, "This area needs attention");
        assert_eq!(rec.priority_level, PriorityLevel::High);
    }

    #[test]
    fn test_tally_counts_add_up() {
        let goals = vec![
            goal("Saúde", true),
            goal("Saúde", false),
            goal("Carreira", false),
            goal("Saúde", false),
        ];
        let tallies = aggregate_goals(&goals);

        assert_eq!(tallies.len(), 2);
        for tally in tallies.values() {
            assert_eq!(tally.completed + tally.pending, tally.total);
        }
        assert_eq!(tallies["Saúde"].total, 3);
        assert!(!tallies.contains_key("Finanças"));
    }

    #[test]
    fn test_goals_for_unknown_areas_are_ignored() {
        let scores = wheel(&[("Saúde", 1.0), ("Carreira", 2.0)]);
        let goals = vec![goal("Astronomia", false)];
        let result = compute_insights(&scores, &goals);

        assert_eq!(result.bottom_3.len(), 2);
        assert_eq!(result.areas_without_goals.len(), 2);
    }

    #[test]
    fn test_empty_inputs_do_not_panic() {
        let result = compute_insights(&WheelScores::new(), &[]);
        assert_eq!(result, InsightResult::default());
    }

    #[test]
    fn test_should_show_insights() {
        assert!(!should_show_insights(&wheel(&[("A", 8.0), ("B", 8.0)])));
        assert!(should_show_insights(&wheel(&[("A", 5.0), ("B", 5.0)])));
        // Exactly at the celebration average counts as celebrating
        assert!(!should_show_insights(&wheel(&[("A", 7.0), ("B", 8.0)])));
        // Empty wheel: nothing to analyze
        assert!(!should_show_insights(&WheelScores::new()));
    }

    #[test]
    fn test_custom_thresholds() {
        let engine = InsightEngine::with_thresholds(InsightThresholds {
            critical: 2.0,
            low: 4.0,
            celebration_average: 9.0,
            focus_count: 2,
        });
        let scores = wheel(&[("A", 3.0), ("B", 4.5), ("C", 8.0)]);
        let result = engine.compute(&scores, &[]);

        assert_eq!(result.bottom_3.len(), 2);
        assert!(result.critical_areas.is_empty());
        assert_eq!(names(&result.low_areas), vec!["A"]);
        assert_eq!(
            result.priority_recommendations[0].priority_level,
            PriorityLevel::High
        );
        assert!(engine.should_show(&scores));
    }
}
