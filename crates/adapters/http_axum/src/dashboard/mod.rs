//! Server-side rendered HTML dashboard (no JavaScript).

pub mod home;
pub mod power;
pub mod scan;

use axum::Router;
use axum::routing::get;

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::network::SignalTier;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<S, P>() -> Router<AppState<S, P>>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<S, P>))
        .route("/scan", get(scan::page::<S, P>))
        .route("/power", get(power::page::<S, P>))
}

/// CSS badge class for a signal tier.
///
/// Presentation vocabulary only — the tier itself is computed by the domain.
#[must_use]
pub fn tier_badge_class(tier: SignalTier) -> &'static str {
    match tier {
        SignalTier::Excellent => "success",
        SignalTier::Good => "info",
        SignalTier::Fair => "warning",
        SignalTier::Poor => "danger",
    }
}
