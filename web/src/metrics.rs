//! Prometheus metrics for the todo server.
//!
//! The core and store crates emit through the `metrics` facade; this module
//! installs the Prometheus recorder and serves its rendering at `/metrics`.
//!
//! Without an installed recorder every metric call is a no-op, which is what
//! tests rely on.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics::{describe_counter, describe_gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use thiserror::Error;
use todo_list_core::TodoStore;

use crate::state::AppState;

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Install the Prometheus recorder and register metric descriptions.
///
/// # Errors
///
/// Returns [`MetricsError::Install`] if a recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!("Metrics recorder installed - available at /metrics");
    Ok(handle)
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(
        "todo_requests_total",
        "Todo list requests by operation and outcome"
    );
    describe_gauge!("todo_items_stored", "Number of todo items currently stored");
}

/// Render metrics in Prometheus text format.
///
/// # Endpoint
///
/// ```text
/// GET /metrics
/// ```
///
/// Returns 404 when metrics are disabled.
pub async fn metrics_handler<S: TodoStore + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    match state.metrics() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "metrics disabled".to_string()),
    }
}
