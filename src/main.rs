use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use genre_service::app;
use genre_service::config::settings::AppConfig;
use genre_service::infrastructure::db::pool::connect_to_db;
use genre_service::modules::genre::memory::InMemoryGenreRepository;
use genre_service::modules::genre::repository::{GenreRepository, PostgresGenreRepository};
use genre_service::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "genre_service=debug,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting server...");

    let config = AppConfig::new()?;

    let genres: Arc<dyn GenreRepository> = match &config.database_url {
        Some(url) => {
            let pool = connect_to_db(url, config.db_max_connections).await?;
            Arc::new(PostgresGenreRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL is not set, genres are kept in memory");
            Arc::new(InMemoryGenreRepository::new())
        }
    };

    let state = AppState::new(config.clone(), genres);
    let app = app::create_app(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
