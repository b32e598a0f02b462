use std::{sync::Arc, time::Duration};

use actix_web::body::MessageBody;
use actix_web::dev::ServiceFactory;
use actix_web::web::Data;
use actix_web::App;
use async_trait::async_trait;
use healthcheck_db::core::definitions::HealthDatabase;
use healthcheck_db::core::errors::{DBError, DBResult};
use healthcheck_server::api::get_app_router;
use healthcheck_server::configuration::Config;

pub const TEST_DB_CHECK_TIMEOUT_MS: u64 = 200;

/// Stand-in datastore for the handlers.
pub enum FakeDatabase {
    Healthy,
    Failing,
    Hanging,
}

#[async_trait]
impl HealthDatabase for FakeDatabase {
    async fn ping(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    async fn select_one(&self) -> DBResult<Vec<i32>> {
        match self {
            Self::Healthy => Ok(vec![1]),
            Self::Failing => Err(DBError::QueryFailed("connection reset by peer".into())),
            Self::Hanging => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(vec![1])
            }
        }
    }
}

pub fn get_configuration() -> Config {
    let vars = [
        ("SERVICE_NAME", "Test API".to_string()),
        ("DB_CHECK_TIMEOUT_MS", TEST_DB_CHECK_TIMEOUT_MS.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    Config::from_env_map(vars).expect("Couldn't build the test configuration")
}

pub fn build_app(
    config: &Config,
    database: Arc<dyn HealthDatabase>,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    get_app_router(&Data::new(config.clone()), &Data::from(database))
}
