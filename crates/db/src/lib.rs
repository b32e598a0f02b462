pub mod core;

use std::{str::FromStr, time::Duration};

use crate::core::{
    definitions::{HealthDatabase, CHECK_QUERY},
    errors::{DBError, DBResult},
    ops::{Connect, GetConnection},
};
use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres, Row,
};
use url::Url;

pub use sqlx::Executor;

pub struct DatabaseOptions {
    url: String,
    pub pool_options: PgPoolOptions,
}

impl DatabaseOptions {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            pool_options: PgPoolOptions::new(),
        }
    }
}

#[async_trait::async_trait]
impl Connect for DatabaseOptions {
    type Pool = Database;

    /// Builds the pool without opening any connection yet: the service has to
    /// come up (and answer the liveness check) while the datastore is down.
    async fn connect(self) -> DBResult<Self::Pool> {
        let pg_options = PgConnectOptions::from_str(&self.url).map_err(DBError::InvalidUrl)?;
        let pool = self.pool_options.connect_lazy_with(pg_options);

        Ok(Database::new(pool))
    }
}

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GetConnection for Database {
    type Conn = PoolConnection<Postgres>;

    async fn get_conn(&self) -> DBResult<Self::Conn> {
        self.pool.acquire().await.map_err(DBError::UnableToConnect)
    }
}

#[async_trait::async_trait]
impl HealthDatabase for Database {
    async fn ping(&self) -> bool {
        use sqlx::Connection;

        if let Ok(mut con) = self.get_conn().await {
            con.ping().await.is_ok()
        } else {
            false
        }
    }

    async fn select_one(&self) -> DBResult<Vec<i32>> {
        let mut conn = self.get_conn().await?;

        let rows = (&mut *conn)
            .fetch_all(CHECK_QUERY)
            .await
            .map_err(|err| DBError::QueryFailed(Box::new(err)))?;

        rows.iter()
            .map(|row| {
                row.try_get::<i32, _>(0)
                    .map_err(|err| DBError::RowCorrupted(Box::new(err)))
            })
            .collect()
    }
}

/// Creates the pool used by the dependency check.
///
/// `acquire_timeout` bounds how long a request waits for a validated
/// connection, including the time spent dialing an unreachable host.
pub async fn create_healthcheck_db_component(
    db_url: &str,
    acquire_timeout: Duration,
) -> DBResult<Database> {
    log::debug!("> Database > Creating pool for {}", redacted_url(db_url));

    let mut db_options = DatabaseOptions::new(db_url);
    db_options.pool_options = db_options
        .pool_options
        .min_connections(0)
        .max_connections(10)
        .acquire_timeout(acquire_timeout)
        .test_before_acquire(true);

    db_options.connect().await.map_err(|error| {
        log::error!("> Database > Unable to build the pool {error:?}");
        error
    })
}

/// Masks the password of a connection URL so it can be logged, both in the
/// user info and in a `password` query pair.
pub fn redacted_url(db_url: &str) -> String {
    const MASK: &str = "***";

    let Ok(mut url) = Url::parse(db_url) else {
        return "<unparseable database url>".to_string();
    };

    if url.password().is_some() {
        // only fails for URLs without a host, which cannot carry a password
        let _ = url.set_password(Some(MASK));
    }

    if url.query_pairs().any(|(key, _)| key == "password") {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == "password" {
                    MASK.to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url.to_string()
}
