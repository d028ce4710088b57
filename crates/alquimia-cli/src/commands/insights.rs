//! Insight and dashboard summary commands

use anyhow::Result;

use alquimia_core::insights::{PriorityLevel, Severity};
use alquimia_core::{goal_stats, goals_by_area, goals_by_priority, wheel_summary};

use super::Session;

fn level_icon(level: PriorityLevel) -> &'static str {
    match level {
        PriorityLevel::Critical => "🔴",
        PriorityLevel::High => "🟠",
        PriorityLevel::Medium => "🟡",
    }
}

pub fn cmd_insights(session: &Session) -> Result<()> {
    let state = &session.state;
    let engine = &session.engine;

    if !state.should_show_insights(engine) {
        println!();
        println!(
            "🌟 Your wheel averages {:.1} - every area is in a good place. Keep it up!",
            state.average_score()
        );
        return Ok(());
    }

    let result = state.insights(engine);

    println!();
    println!("🔮 Areas that need attention");
    println!("   ─────────────────────────────────────────────");
    for rec in &result.priority_recommendations {
        println!(
            "   {} {:<22} {:>4.1}  {}",
            level_icon(rec.priority_level),
            rec.area,
            rec.score,
            rec.action
        );
        println!("      {}", rec.message);
    }

    if !result.areas_without_goals.is_empty() {
        println!();
        println!("   Low areas without goals:");
        for area in &result.areas_without_goals {
            let tag = match area.severity {
                Severity::Critical => "critical",
                Severity::High => "low",
            };
            println!("   • {} ({:.1}, {})", area.area, area.score, tag);
        }
    }

    println!();
    println!(
        "   {} critical, {} low. Add a goal: alquimia goals add --area <AREA> --specific <TEXT>",
        result.critical_areas.len(),
        result.low_areas.len()
    );

    Ok(())
}

pub fn cmd_summary(session: &Session) -> Result<()> {
    let state = &session.state;
    let wheel = wheel_summary(&state.scores);
    let stats = goal_stats(&state.goals);

    println!();
    println!("📊 Alquimia Dashboard");
    println!("   ─────────────────────────────────────────────");
    println!("   Average score:   {:.1}  {}", wheel.average, wheel.outlook.label());
    if let Some(area) = &wheel.strongest_area {
        println!("   Strongest area:  {}", area);
    }
    if let Some(area) = &wheel.weakest_area {
        println!("   Weakest area:    {}", area);
    }
    println!(
        "   Goals:           {} total, {} completed, {} pending ({:.0}%)",
        stats.total, stats.completed, stats.pending, stats.completion_rate
    );
    println!("   Check-ins:       {}", state.history.len());

    let by_area = goals_by_area(&state.goals);
    if !by_area.is_empty() {
        println!();
        println!("   Goals by area:");
        for (area, count) in &by_area {
            println!("   • {:<22} {}", area, count);
        }
    }

    let by_priority = goals_by_priority(&state.goals);
    if !by_priority.is_empty() {
        println!();
        println!("   Goals by priority:");
        for entry in &by_priority {
            println!("   • {:<22} {}", entry.priority, entry.count);
        }
    }

    Ok(())
}
