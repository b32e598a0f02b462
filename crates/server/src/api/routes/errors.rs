use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use healthcheck_db::core::errors::DBError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub status: String,
    pub code: u16,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Not Found")]
    NotFound,
}

#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("Database unavailable: {0}")]
    Unavailable(#[from] DBError),
    #[error("Database check timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

fn json_error_response(error: &impl ResponseError) -> HttpResponse {
    let status_code = error.status_code();
    let error_response = ErrorResponse {
        status: "error".to_string(),
        code: status_code.as_u16(),
        message: error.to_string(),
    };
    HttpResponse::build(status_code).json(error_response)
}

impl ResponseError for CommonError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error_response(self)
    }
}

impl ResponseError for DependencyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unavailable(_) | Self::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error_response(self)
    }
}

pub async fn not_found() -> Result<HttpResponse, CommonError> {
    Err(CommonError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn dependency_errors_render_as_503_json() {
        let error = DependencyError::Timeout(Duration::from_millis(1500));
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.code, 503);
        assert_eq!(body.message, "Database check timed out after 1500ms");
    }

    #[test]
    fn database_errors_are_unavailable() {
        let error = DependencyError::from(DBError::QueryFailed("relation missing".into()));

        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            error.to_string(),
            "Database unavailable: Unable to run the check query"
        );
    }

    #[actix_web::test]
    async fn driver_details_stay_out_of_the_response_body() {
        let error = DependencyError::from(DBError::RowCorrupted(
            "mismatched types; Rust type `i32` is not compatible with SQL type `TEXT`".into(),
        ));
        let response = error.error_response();

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "Database unavailable: Row has incorrect data");
        assert!(!body.message.contains("mismatched"));
    }

    #[test]
    fn not_found_is_404() {
        assert_eq!(CommonError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
