use actix_web::web::Data;
use components::AppComponents;
use config::ConfigError;
use configuration::Config;
use healthcheck_db::{core::errors::DBError, redacted_url};
use telemetry::TelemetryError;
use thiserror::Error;

pub mod api;
pub mod components;
pub mod configuration;
pub mod telemetry;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unable to build up the App configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Unable to set up the database component: {0}")]
    Database(#[from] DBError),
    #[error("Unable to initialize telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("Server failure: {0}")]
    Io(#[from] std::io::Error),
}

pub async fn init_components(config: Config) -> Result<AppComponents, AppError> {
    log::debug!(
        "App Config: {:?}",
        Config {
            database_url: redacted_url(&config.database_url),
            ..config.clone()
        }
    );

    let components = AppComponents::new(config).await?;

    // Reachability is only reported here, the db check endpoint owns failures
    if components.database.ping().await {
        log::info!("> init_components > Database is reachable");
    } else {
        log::warn!("> init_components > Database is not reachable yet, starting anyway");
    }

    Ok(components)
}

/// Runs the HTTP server until actix receives a stop signal (SIGINT/SIGTERM).
pub async fn run_app(config: Config) -> Result<(), AppError> {
    let AppComponents { config, database } = init_components(config).await?;

    let server = api::run_server(Data::new(config), Data::from(database))?;
    server.await?;

    log::info!("> run_app > Server stopped");

    Ok(())
}
