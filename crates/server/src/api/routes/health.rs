use crate::configuration::Config;
use actix_web::{
    get,
    web::{Data, ServiceConfig},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Liveness: answers as long as the process is up, whatever the datastore does.
#[get("/")]
async fn live(config: Data<Config>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "ok".to_string(),
        message: format!("{} is running", config.service_name),
    })
}

pub fn services(config: &mut ServiceConfig) {
    config.service(live);
}
