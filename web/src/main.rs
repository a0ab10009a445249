//! Todo list HTTP server.
//!
//! Per-user todo lists over an in-memory item store.

use todo_list_core::TodoHandler;
use todo_list_memory::InMemoryTodoStore;
use todo_list_web::metrics::install_recorder;
use todo_list_web::{AppState, Config, build_router};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "todo_list_web={level},todo_list_core={level},todo_list_memory={level},tower_http=debug",
                    level = config.server.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Todo List HTTP Server");
    info!(
        host = %config.server.host,
        port = config.server.port,
        metrics_enabled = config.server.metrics_enabled,
        insert_echo = ?config.store.insert_echo(),
        "Configuration loaded"
    );

    // Setup item store and request handler
    let store = InMemoryTodoStore::new().with_insert_echo(config.store.insert_echo());
    let mut state = AppState::new(TodoHandler::new(store));

    if config.server.metrics_enabled {
        match install_recorder() {
            Ok(handle) => state = state.with_metrics(handle),
            Err(e) => warn!(error = %e, "Metrics disabled"),
        }
    }

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for:
/// - Ctrl+C (SIGINT)
/// - SIGTERM (in production environments)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
