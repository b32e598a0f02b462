use super::errors::DBResult;
use async_trait::async_trait;

/// Query sent to the datastore by the dependency check.
pub const CHECK_QUERY: &str = "SELECT 1";

/// Connection provider consumed by the HTTP handlers.
///
/// Every call works on its own freshly acquired connection, so a failing call
/// never poisons the next one. Implementors must be shareable across actix
/// workers, hence `Send + Sync`.
#[async_trait]
pub trait HealthDatabase: Send + Sync {
    async fn ping(&self) -> bool;

    /// Runs [`CHECK_QUERY`] and returns the first column of every row.
    async fn select_one(&self) -> DBResult<Vec<i32>>;
}
