pub mod routes;

use crate::configuration::Config;
use actix_web::{
    body::MessageBody,
    dev::{Server, ServiceFactory},
    web::{self, Data},
    App, HttpServer,
};
use healthcheck_db::core::definitions::HealthDatabase;
use tracing_actix_web::TracingLogger;

pub fn run_server(
    config: Data<Config>,
    database: Data<dyn HealthDatabase>,
) -> Result<Server, std::io::Error> {
    let server_address = config.server_address();
    let service_name = config.service_name.clone();

    let server = HttpServer::new(move || get_app_router(&config, &database))
        .bind(&server_address)?
        .run();

    log::info!("{service_name} running at http://{server_address}");

    Ok(server)
}

pub fn get_app_router(
    config: &Data<Config>,
    db: &Data<dyn HealthDatabase>,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(config.clone())
        .app_data(db.clone())
        .wrap(TracingLogger::default())
        .configure(routes::services)
        .default_service(web::to(routes::not_found))
}
