//! Dashboard statistics
//!
//! Wheel summary, goal progress, grouping and filtering helpers used by the
//! dashboard, goal list and history screens.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{mean_score, Goal, GoalStatus, HistoryEntry, Priority, WheelScores};

/// Averages below this are "growing"
pub const GROWING_BELOW: f64 = 5.0;

/// Averages below this (and at least `GROWING_BELOW`) are "on track"
pub const ON_TRACK_BELOW: f64 = 7.0;

/// Overall reading of the wheel average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Growing,
    OnTrack,
    Thriving,
}

impl Outlook {
    pub fn from_average(average: f64) -> Self {
        if average < GROWING_BELOW {
            Outlook::Growing
        } else if average < ON_TRACK_BELOW {
            Outlook::OnTrack
        } else {
            Outlook::Thriving
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outlook::Growing => "growing",
            Outlook::OnTrack => "on_track",
            Outlook::Thriving => "thriving",
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            Outlook::Growing => "🌱 Growing",
            Outlook::OnTrack => "🌿 On track",
            Outlook::Thriving => "🌟 Thriving",
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dashboard summary of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSummary {
    pub average: f64,
    /// First area holding the highest score
    pub strongest_area: Option<String>,
    /// First area holding the lowest score
    pub weakest_area: Option<String>,
    pub outlook: Outlook,
}

/// Summarize the wheel. An empty wheel averages 0.
pub fn wheel_summary(scores: &WheelScores) -> WheelSummary {
    let average = mean_score(scores).unwrap_or(0.0);

    let mut strongest: Option<(&String, f64)> = None;
    let mut weakest: Option<(&String, f64)> = None;
    for (area, &score) in scores {
        if strongest.map_or(true, |(_, best)| score > best) {
            strongest = Some((area, score));
        }
        if weakest.map_or(true, |(_, worst)| score < worst) {
            weakest = Some((area, score));
        }
    }

    WheelSummary {
        average,
        strongest_area: strongest.map(|(area, _)| area.clone()),
        weakest_area: weakest.map(|(area, _)| area.clone()),
        outlook: Outlook::from_average(average),
    }
}

/// Goal progress counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completed share in percent, 0 when there are no goals
    pub completion_rate: f64,
}

pub fn goal_stats(goals: &[Goal]) -> GoalStats {
    let total = goals.len();
    let completed = goals.iter().filter(|g| g.completed).count();
    let completion_rate = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };
    GoalStats {
        total,
        completed,
        pending: total - completed,
        completion_rate,
    }
}

/// Number of goals per area, in order of first appearance
pub fn goals_by_area(goals: &[Goal]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for goal in goals {
        *counts.entry(goal.area.clone()).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub priority: Priority,
    pub count: usize,
}

/// Goal counts per priority, most urgent first, only priorities in use
pub fn goals_by_priority(goals: &[Goal]) -> Vec<PriorityBreakdown> {
    Priority::all()
        .iter()
        .filter_map(|&priority| {
            let count = goals.iter().filter(|g| g.priority == priority).count();
            (count > 0).then_some(PriorityBreakdown { priority, count })
        })
        .collect()
}

/// Goal list filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalFilter {
    pub area: Option<String>,
    pub status: Option<GoalStatus>,
    pub priority: Option<Priority>,
}

impl GoalFilter {
    pub fn matches(&self, goal: &Goal) -> bool {
        if let Some(area) = &self.area {
            if &goal.area != area {
                return false;
            }
        }
        match self.status {
            Some(GoalStatus::Completed) if !goal.completed => return false,
            Some(GoalStatus::Pending) if goal.completed => return false,
            _ => {}
        }
        if let Some(priority) = self.priority {
            if goal.priority != priority {
                return false;
            }
        }
        true
    }
}

/// Goals matching the filter, paired with their index in the full list
pub fn filter_goals<'a>(goals: &'a [Goal], filter: &GoalFilter) -> Vec<(usize, &'a Goal)> {
    goals
        .iter()
        .enumerate()
        .filter(|(_, goal)| filter.matches(goal))
        .collect()
}

/// Most recent check-ins first
pub fn recent_history(history: &[HistoryEntry], limit: usize) -> Vec<&HistoryEntry> {
    history.iter().rev().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(area: &str, priority: Priority, completed: bool) -> Goal {
        Goal {
            area: area.to_string(),
            specific: format!("{} goal", area),
            measurable: String::new(),
            achievable: String::new(),
            relevant: String::new(),
            time_bound: None,
            archetype: None,
            priority,
            completed,
            created_date: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn scores(pairs: &[(&str, f64)]) -> WheelScores {
        pairs.iter().map(|(a, s)| (a.to_string(), *s)).collect()
    }

    #[test]
    fn test_wheel_summary() {
        let summary = wheel_summary(&scores(&[("A", 4.0), ("B", 8.0), ("C", 8.0), ("D", 4.0)]));
        assert_eq!(summary.average, 6.0);
        assert_eq!(summary.strongest_area.as_deref(), Some("B"));
        assert_eq!(summary.weakest_area.as_deref(), Some("A"));
        assert_eq!(summary.outlook, Outlook::OnTrack);
    }

    #[test]
    fn test_wheel_summary_empty() {
        let summary = wheel_summary(&WheelScores::new());
        assert_eq!(summary.average, 0.0);
        assert!(summary.strongest_area.is_none());
        assert_eq!(summary.outlook, Outlook::Growing);
    }

    #[test]
    fn test_outlook_boundaries() {
        assert_eq!(Outlook::from_average(4.9), Outlook::Growing);
        assert_eq!(Outlook::from_average(5.0), Outlook::OnTrack);
        assert_eq!(Outlook::from_average(7.0), Outlook::Thriving);
        assert_eq!(Outlook::OnTrack.to_string(), "on_track");
    }

    #[test]
    fn test_goal_stats() {
        let goals = vec![
            goal("Saúde", Priority::High, true),
            goal("Saúde", Priority::Low, false),
            goal("Carreira", Priority::High, false),
            goal("Finanças", Priority::Critical, true),
        ];
        let stats = goal_stats(&goals);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.completion_rate, 50.0);

        assert_eq!(goal_stats(&[]).completion_rate, 0.0);
    }

    #[test]
    fn test_grouping() {
        let goals = vec![
            goal("Carreira", Priority::High, false),
            goal("Saúde", Priority::Low, false),
            goal("Carreira", Priority::High, true),
        ];

        let by_area = goals_by_area(&goals);
        assert_eq!(by_area.get_index(0), Some((&"Carreira".to_string(), &2)));
        assert_eq!(by_area["Saúde"], 1);

        let by_priority = goals_by_priority(&goals);
        assert_eq!(
            by_priority,
            vec![
                PriorityBreakdown { priority: Priority::High, count: 2 },
                PriorityBreakdown { priority: Priority::Low, count: 1 },
            ]
        );
    }

    #[test]
    fn test_filter_keeps_original_indices() {
        let goals = vec![
            goal("Saúde", Priority::High, true),
            goal("Carreira", Priority::High, false),
            goal("Saúde", Priority::Medium, false),
        ];

        let filter = GoalFilter {
            area: Some("Saúde".to_string()),
            status: Some(GoalStatus::Pending),
            ..Default::default()
        };
        let matched = filter_goals(&goals, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].0, 2);

        let high = GoalFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let indices: Vec<usize> = filter_goals(&goals, &high).iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);

        assert_eq!(filter_goals(&goals, &GoalFilter::default()).len(), 3);
    }

    #[test]
    fn test_recent_history_newest_first() {
        let entries: Vec<HistoryEntry> = (1..=4)
            .map(|day| HistoryEntry {
                date: NaiveDate::from_ymd_opt(2026, 2, day)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
                roda_scores: WheelScores::new(),
                avg_score: day as f64,
            })
            .collect();

        let recent = recent_history(&entries, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].avg_score, 4.0);
        assert_eq!(recent[1].avg_score, 3.0);
    }
}
