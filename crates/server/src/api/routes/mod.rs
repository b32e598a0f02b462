use actix_web::web::ServiceConfig;

pub mod db_check;
pub mod errors;
pub mod health;

pub use db_check::DbCheckResponse;
pub use errors::{not_found, ErrorResponse};
pub use health::StatusResponse;

pub(crate) fn services(config: &mut ServiceConfig) {
    health::services(config);
    db_check::services(config);
}
