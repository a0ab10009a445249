//! Application state shared across HTTP handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use todo_list_core::{TodoHandler, TodoStore};

/// Application state shared across all HTTP handlers.
///
/// Generic over the item store so tests can run the router against any
/// [`TodoStore`].
pub struct AppState<S> {
    handler: Arc<TodoHandler<S>>,
    metrics: Option<PrometheusHandle>,
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            metrics: self.metrics.clone(),
        }
    }
}

impl<S: TodoStore> AppState<S> {
    /// Create state around a request handler.
    #[must_use]
    pub fn new(handler: TodoHandler<S>) -> Self {
        Self {
            handler: Arc::new(handler),
            metrics: None,
        }
    }

    /// Create state around a handler for `store`.
    #[must_use]
    pub fn from_store(store: S) -> Self {
        Self::new(TodoHandler::new(store))
    }

    /// Attach a Prometheus handle so `/metrics` can render it.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// The request handler.
    #[must_use]
    pub fn handler(&self) -> &TodoHandler<S> {
        &self.handler
    }

    /// The Prometheus handle, if metrics are enabled.
    #[must_use]
    pub const fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }
}
