use std::sync::Arc;

use chat_service::{config::Config, db, error::AppError, logging, routes, state::AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init_tracing();

    let cfg = Arc::new(Config::from_env()?);

    let pool = db::init_pool(&cfg.database_url, cfg.db_max_connections)
        .await
        .map_err(|e| AppError::StartServer(format!("db: {e}")))?;

    // Schema must be in sync before serving; a failed migration is fatal
    db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| AppError::StartServer(format!("migrations: {e}")))?;

    let state = AppState {
        db: pool,
        config: cfg.clone(),
    };

    let app = routes::router(state);

    let bind_addr = format!("{}:{}", cfg.host, cfg.port);
    tracing::info!(%bind_addr, "starting chat-service");

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AppError::StartServer(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::StartServer(e.to_string()))?;

    Ok(())
}
