use dotenvy::dotenv;
use game_catalog::{
    config::{self, database, genres},
    core::genre,
    errors::Result,
    web::{self, AppState},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Connect and make sure the tables exist
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed genres once, before serving any request
    let seed_config = genres::load_seed_config_or_default(&app_config.seed_config_path)
        .inspect_err(|e| error!("Failed to load genre seed list: {}", e))?;
    genre::seed_genres(&db, &seed_config.genre_names())
        .await
        .inspect_err(|e| error!("Failed to seed genres: {}", e))?;

    // 6. Serve
    web::serve(AppState::new(db), &app_config)
        .await
        .inspect_err(|e| error!("Server error: {}", e))
}
