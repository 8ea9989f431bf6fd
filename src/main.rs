//! Server binary: env config, database bootstrap, migrations, then serve.

use std::sync::Arc;
use talenthub::{
    api_routes, apply_migrations, ensure_database_exists, ops_routes, AppState, Config, PgStore,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("talenthub=info".parse()?))
        .init();

    let config = Config::from_env()?;

    ensure_database_exists(&config.database_url).await?;
    let store = PgStore::connect(&config.database_url, config.max_connections).await?;
    apply_migrations(store.pool()).await?;

    let state = AppState::new(Arc::new(store));
    let app = axum::Router::new()
        .merge(ops_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
