use std::sync::Arc;
use string_analyzer::api::router::build_router;
use string_analyzer::api::service::StringService;
use string_analyzer::config::ServerConfig;
use string_analyzer::storage::memory::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage layer:
    let store = Arc::new(RecordStore::new());

    // 2. Core operations:
    let service = Arc::new(StringService::new(store));

    // 3. HTTP Router:
    let app = build_router(service);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
