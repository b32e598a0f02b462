use super::errors::DependencyError;
use crate::configuration::Config;
use actix_web::{
    get,
    web::{Data, ServiceConfig},
    HttpResponse,
};
use healthcheck_db::core::definitions::HealthDatabase;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct DbCheckResponse {
    pub status: String,
    pub db_result: Vec<i32>,
}

#[get("/db-check")]
async fn db_check(
    config: Data<Config>,
    db: Data<dyn HealthDatabase>,
) -> Result<HttpResponse, DependencyError> {
    let timeout = config.db_check_timeout();

    match tokio::time::timeout(timeout, db.select_one()).await {
        Ok(Ok(db_result)) => Ok(HttpResponse::Ok().json(DbCheckResponse {
            status: "ok".to_string(),
            db_result,
        })),
        Ok(Err(error)) => {
            log::error!("> db_check > Database check failed {error:?}");
            Err(error.into())
        }
        Err(_) => {
            log::error!("> db_check > Database check timed out after {timeout:?}");
            Err(DependencyError::Timeout(timeout))
        }
    }
}

pub fn services(config: &mut ServiceConfig) {
    config.service(db_check);
}
