//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use alquimia_core::{config, JsonFileStore};
use alquimia_server::ServerConfig;

pub async fn cmd_serve(
    data_path: &Path,
    config_path: Option<&Path>,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Alquimia web server...");
    println!("   Data file: {}", data_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    let engine =
        config::load_insight_engine(config_path).context("Failed to load insight config")?;
    let server_config = ServerConfig::from_env();
    if !server_config.allowed_origins.is_empty() {
        println!(
            "   CORS origins: {}",
            server_config.allowed_origins.join(", ")
        );
    }

    let static_dir = static_dir.and_then(|p| p.to_str());
    alquimia_server::serve_with_config(
        Box::new(JsonFileStore::new(data_path)),
        engine,
        host,
        port,
        static_dir,
        server_config,
    )
    .await
}
