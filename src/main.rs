use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use studiobook_api::config::ApiConfig;
use studiobook_db::{
    create_pool,
    schema::initialize_database,
    store::{KeyValueStore, MemoryStore, PgStore},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    studiobook_api::init_tracing(config.log_level)?;

    // Pick the booking store
    let store: Arc<dyn KeyValueStore> = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            info!("Persisting bookings in PostgreSQL");
            Arc::new(PgStore::new(db_pool))
        }
        None => {
            warn!("DATABASE_URL not set, bookings will be lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Start API server
    studiobook_api::start_server(config, store).await?;

    Ok(())
}
