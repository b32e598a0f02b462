use async_trait::async_trait;

use super::errors::DBResult;

/// Turns a set of options into a usable pool.
#[async_trait]
pub trait Connect {
    type Pool;

    async fn connect(self) -> DBResult<Self::Pool>;
}

/// Hands out a single connection, checked for liveness before it is returned.
#[async_trait]
pub trait GetConnection {
    type Conn;

    async fn get_conn(&self) -> DBResult<Self::Conn>;
}
