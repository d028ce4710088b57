//! Wheel of Life score commands

use anyhow::Result;

use super::{score_bar, Session};

pub fn cmd_scores_show(session: &Session) -> Result<()> {
    let state = &session.state;

    println!();
    println!("🎡 Wheel of Life");
    println!("   ─────────────────────────────────────────────");
    for (area, score) in &state.scores {
        println!("   {:<22} {:>4.1}  {}", area, score, score_bar(*score));
    }
    println!("   ─────────────────────────────────────────────");
    println!("   {:<22} {:>4.1}", "Average", state.average_score());

    Ok(())
}

pub fn cmd_scores_set(session: &mut Session, area: &str, score: f64) -> Result<()> {
    session.state.set_score(area, score)?;
    println!("✅ {} set to {:.1}", area, score);
    session.save();
    Ok(())
}
