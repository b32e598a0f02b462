use healthcheck_server::{configuration::Config, run_app, telemetry::init_telemetry, AppError};

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    init_telemetry("healthcheck_server", "info")?;

    let config = Config::new()?;

    log::info!("Starting {}...", config.service_name);

    run_app(config).await
}
