use sqlx::Error;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DBError {
    #[error("Invalid database URL")]
    InvalidUrl(Error),

    #[error("Unable to connect to DB")]
    UnableToConnect(Error),

    #[error("Unable to run the check query")]
    QueryFailed(BoxDynError),

    #[error("Row has incorrect data")]
    RowCorrupted(BoxDynError),
}

/// Convenience type alias for grouping driver-specific errors
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Generic result data structure
pub type DBResult<V> = Result<V, DBError>;
