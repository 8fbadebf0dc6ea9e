//! Server binary: reads settings, prepares the database, optionally seeds it, serves the API.

use starwars_favorites::{app, connect_pool, ensure_tables, AppState, SeedData, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("starwars_favorites=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect_pool(&settings.database_url, settings.max_connections).await?;
    ensure_tables(&pool).await?;

    if let Some(path) = &settings.seed_path {
        let seed = SeedData::from_path(path).await?;
        seed.apply(&pool).await?;
    }

    let listener = TcpListener::bind(settings.bind_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(pool))).await?;
    Ok(())
}
