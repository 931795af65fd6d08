use std::sync::Arc;

use taskflow_common::TaskflowConfig;
use taskflow_gateway::{middleware::default_stack, routes, AppState};
use taskflow_sqlite::{db::init_db, SqliteStorageManager};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -------- log ----------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("taskflow_gateway=debug".parse()?),
        )
        .init();

    // -------- config -------
    let config = TaskflowConfig::from_env()?;
    tracing::info!("config: {}", config.summary());

    // -------- storage ------
    let pool = init_db(&config.db_path, config.db_max_connections).await?;
    let persist = Arc::new(SqliteStorageManager::new(pool));
    let state = AppState::new(persist, config.clone());

    // -------- router -------
    let app = default_stack(routes::new(state));

    let listener = tokio::net::TcpListener::bind(&config.gateway_bind).await?;
    tracing::info!("🚀 gateway listen on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
