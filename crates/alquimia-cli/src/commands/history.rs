//! Check-in history commands

use std::io::{self, Write};

use anyhow::Result;

use alquimia_core::models::now_local;
use alquimia_core::recent_history;

use super::{score_bar, Session};

pub fn cmd_checkin(session: &mut Session) -> Result<()> {
    let entry = session.state.check_in(now_local());
    println!(
        "📍 Check-in recorded {} (average {:.1})",
        entry.date.format("%Y-%m-%d %H:%M"),
        entry.avg_score
    );
    session.save();
    Ok(())
}

pub fn cmd_history(session: &Session, limit: usize) -> Result<()> {
    let entries = recent_history(&session.state.history, limit);

    if entries.is_empty() {
        println!("No check-ins yet. Record one with 'alquimia checkin'.");
        return Ok(());
    }

    println!();
    println!("📅 Check-in History");
    println!("   ─────────────────────────────────────────────");
    for entry in entries {
        println!(
            "   {}  {:>4.1}  {}",
            entry.date.format("%Y-%m-%d"),
            entry.avg_score,
            score_bar(entry.avg_score)
        );
    }

    Ok(())
}

pub fn cmd_history_clear(session: &mut Session, yes: bool) -> Result<()> {
    let count = session.state.history.len();
    if count == 0 {
        println!("History is already empty.");
        return Ok(());
    }

    if !yes {
        print!("⚠️  Delete all {} check-ins? [y/N] ", count);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    session.state.clear_history();
    println!("🗑️  Cleared {} check-ins", count);
    session.save();
    Ok(())
}
