//! Reflection, vision board and archetype commands

use anyhow::Result;

use alquimia_core::models::{ARCHETYPES, REFLECTION_KEYS, VISION_AREAS};

use super::Session;

pub fn cmd_reflect(session: &mut Session, key: &str, text: &str) -> Result<()> {
    if !REFLECTION_KEYS.contains(&key) {
        println!("   💡 '{}' is not one of the standard prompts; saving anyway", key);
    }
    session.state.set_reflection(key, text)?;
    println!("📝 Reflection '{}' saved", key);
    session.save();
    Ok(())
}

pub fn cmd_vision(session: &mut Session, area: &str, text: &str) -> Result<()> {
    if !VISION_AREAS.contains(&area) {
        println!("   💡 '{}' is not on the default vision board; saving anyway", area);
    }
    session.state.set_vision_intention(area, text)?;
    println!("✨ Intention for {} saved", area);
    session.save();
    Ok(())
}

pub fn cmd_archetype(session: &mut Session, name: &str, score: f64) -> Result<()> {
    if !ARCHETYPES.contains(&name) {
        println!("   💡 '{}' is not a listed archetype; saving anyway", name);
    }
    session.state.set_archetype_score(name, score)?;
    println!("🔮 {} set to {:.1}", name, score);
    session.save();
    Ok(())
}
