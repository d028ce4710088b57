//! Export commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use alquimia_core::models::now_local;
use alquimia_core::{export_json, scores_csv, ExportFormat};

use super::Session;

/// Write an export and return the path written
pub fn cmd_export(session: &Session, format: ExportFormat, output: Option<&Path>) -> Result<PathBuf> {
    let now = now_local();
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.file_name(now.date())));

    let content = match format {
        ExportFormat::Json => export_json(&session.state, now)?,
        ExportFormat::Csv => scores_csv(&session.state.scores)?,
    };

    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("📤 Exported {} to {}", format, path.display());
    Ok(path)
}
