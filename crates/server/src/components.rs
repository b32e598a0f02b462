use std::sync::Arc;

use crate::configuration::Config;
use healthcheck_db::{
    core::{definitions::HealthDatabase, errors::DBResult},
    create_healthcheck_db_component,
};

pub struct AppComponents {
    pub config: Config,
    pub database: Arc<dyn HealthDatabase>,
}

impl AppComponents {
    pub async fn new(config: Config) -> DBResult<Self> {
        let database =
            create_healthcheck_db_component(&config.database_url, config.db_check_timeout())
                .await?;

        Ok(Self {
            config,
            database: Arc::new(database),
        })
    }
}
