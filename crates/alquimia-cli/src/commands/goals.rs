//! SMART goal commands

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use alquimia_core::{filter_goals, Deadline, GoalDraft, GoalFilter, GoalStatus, Priority};

use super::{truncate, Session};

/// Optional field overrides for `goals edit`
#[derive(Debug, Default)]
pub struct GoalEdit {
    pub area: Option<String>,
    pub specific: Option<String>,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
    pub deadline: Option<String>,
    pub archetype: Option<String>,
    pub priority: Option<String>,
}

/// Parse a `YYYY-MM-DD` deadline; an empty string clears it
pub fn parse_deadline(raw: &str) -> Result<Option<Deadline>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| Some(Deadline::Date(date)))
        .with_context(|| format!("Invalid deadline '{}' (use YYYY-MM-DD)", raw))
}

pub fn parse_priority(raw: &str) -> Result<Priority> {
    raw.parse::<Priority>().map_err(|e| anyhow!(e))
}

pub fn build_filter(
    area: Option<String>,
    status: Option<&str>,
    priority: Option<&str>,
) -> Result<GoalFilter> {
    Ok(GoalFilter {
        area,
        status: status
            .map(|s| s.parse::<GoalStatus>().map_err(|e| anyhow!(e)))
            .transpose()?,
        priority: priority.map(parse_priority).transpose()?,
    })
}

pub fn cmd_goals_list(session: &Session, filter: &GoalFilter) -> Result<()> {
    let goals = filter_goals(&session.state.goals, filter);

    if goals.is_empty() {
        println!("No goals found. Add one with 'alquimia goals add'.");
        return Ok(());
    }

    println!();
    println!("🎯 SMART Goals");
    println!("   ─────────────────────────────────────────────────────────────");
    for (index, goal) in goals {
        let check = if goal.completed { "✅" } else { "⬜" };
        let deadline = goal
            .time_bound
            .as_ref()
            .map(|d| format!(" (by {})", d))
            .unwrap_or_default();
        println!(
            "   #{:<3} {} [{}] {:<18} {}{}",
            index,
            check,
            goal.priority,
            truncate(&goal.area, 18),
            truncate(&goal.specific, 40),
            deadline
        );
    }

    Ok(())
}

pub fn cmd_goals_add(session: &mut Session, draft: GoalDraft) -> Result<()> {
    let index = session.state.add_goal(draft)?;
    let goal = &session.state.goals[index];
    println!("✅ Goal #{} added to {}: {}", index, goal.area, goal.specific);
    session.save();
    Ok(())
}

pub fn cmd_goals_edit(session: &mut Session, index: usize, edit: GoalEdit) -> Result<()> {
    let current = session.state.goal(index)?;
    let draft = GoalDraft {
        area: edit.area.unwrap_or_else(|| current.area.clone()),
        specific: edit.specific.unwrap_or_else(|| current.specific.clone()),
        measurable: edit.measurable.unwrap_or_else(|| current.measurable.clone()),
        achievable: edit.achievable.unwrap_or_else(|| current.achievable.clone()),
        relevant: edit.relevant.unwrap_or_else(|| current.relevant.clone()),
        time_bound: match edit.deadline {
            Some(raw) => parse_deadline(&raw)?,
            None => current.time_bound.clone(),
        },
        archetype: match edit.archetype {
            Some(name) if name.trim().is_empty() => None,
            Some(name) => Some(name),
            None => current.archetype.clone(),
        },
        priority: match edit.priority {
            Some(raw) => parse_priority(&raw)?,
            None => current.priority,
        },
    };

    session.state.update_goal(index, draft)?;
    println!("✅ Goal #{} updated", index);
    session.save();
    Ok(())
}

pub fn cmd_goals_set_completed(session: &mut Session, index: usize, completed: bool) -> Result<()> {
    let goal = session.state.set_goal_completed(index, completed)?;
    if completed {
        println!("🎉 Goal #{} completed: {}", index, goal.specific);
    } else {
        println!("↩️  Goal #{} reopened: {}", index, goal.specific);
    }
    session.save();
    Ok(())
}

pub fn cmd_goals_delete(session: &mut Session, index: usize) -> Result<()> {
    let removed = session.state.delete_goal(index)?;
    println!("🗑️  Deleted goal #{}: {}", index, removed.specific);
    if index < session.state.goals.len() {
        println!("   Later goals moved up by one; run 'alquimia goals list' to see new numbers.");
    }
    session.save();
    Ok(())
}
