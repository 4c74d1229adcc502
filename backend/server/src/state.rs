use std::sync::Arc;

use sqlx::PgPool;

use super::{config::Config, database::init_postgres};

/// Built once at startup; handlers receive it through the extractor.
pub struct State {
    pub config: Config,
    pub pool: PgPool,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let pool = init_postgres(&config.database_url).await;

        Arc::new(Self { config, pool })
    }
}
