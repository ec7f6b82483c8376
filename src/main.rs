use std::net::SocketAddr;
use std::sync::Arc;

use db_keepalive::{AppState, Config, ConnectionRegistry, Result, create_router, start_keepalive_loop};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env();

    // Логируем информацию о конфигурации (без строк подключения)
    tracing::info!(
        "Loaded configuration for {} connection(s)",
        config.connections.len()
    );
    for connection in &config.connections {
        tracing::info!("  - Connection '{}'", connection.name);
    }

    // Пулы создаются лениво: подключение происходит при первом запросе
    let registry = ConnectionRegistry::from_config(&config).map_err(|e| {
        tracing::error!("Failed to create connection pools: {}", e);
        e
    })?;

    let state = Arc::new(AppState::new(config.clone(), registry)?);

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let keepalive = start_keepalive_loop(
        shutdown_rx.clone(),
        state.checker.clone(),
        config.keepalive_interval_secs,
    );

    let app = create_router(state.clone());

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Keep-alive connector starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /                       - Status page");
    tracing::info!("  - GET /api/test-db-connection - Database connection test");
    tracing::info!("  - GET /health                 - Health check");
    tracing::info!("  - GET /metrics                - Prometheus metrics");

    // Запуск сервера с graceful shutdown
    let mut server_shutdown = shutdown_rx.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    if let Some(handle) = keepalive {
        let _ = handle.await;
    }

    state.checker.registry().close().await;
    tracing::info!("Connection pools closed");

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG, по умолчанию "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
