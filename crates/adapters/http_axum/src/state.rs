//! Shared application state for axum handlers.

use std::sync::Arc;

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_app::services::MonitorService;

/// Application state shared across all axum handlers.
///
/// Generic over the data-source port types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, P> {
    /// Monitoring use-cases behind every page and API endpoint.
    pub monitor: Arc<MonitorService<S, P>>,
}

impl<S, P> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            monitor: Arc::clone(&self.monitor),
        }
    }
}

impl<S, P> AppState<S, P>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(monitor: MonitorService<S, P>) -> Self {
        Self {
            monitor: Arc::new(monitor),
        }
    }
}
