use spaceweather_backend::config;
use spaceweather_backend::model::planet::PlanetManager;
use spaceweather_backend::service;

use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let config = config::read_config(&config_path)?;

    // Initialize logging
    let _logging_guard = spaceweather_backend::logging::init_logging(
        &config.log_dir,
        "spaceweather-backend",
        &config.log_level,
        config.log_retention_days,
    )?;

    tracing::info!("Spaceweather backend starting...");
    tracing::info!("Loaded configuration from {}: {:?}", config_path, config);

    let manager = Arc::new(PlanetManager::new());
    if config.seed_demo_data {
        manager.seed_demo_data();
    }

    service::serve(config, manager).await?;

    Ok(())
}
