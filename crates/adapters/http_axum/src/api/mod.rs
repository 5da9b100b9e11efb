//! JSON REST handlers.

pub mod scan;
pub mod stats;

use axum::Router;
use axum::routing::get;

use secmon_app::ports::{NetworkScanner, PowerLog};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, P>() -> Router<AppState<S, P>>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    Router::new()
        .route("/scan", get(scan::scan::<S, P>))
        .route("/stats", get(stats::stats::<S, P>))
}
