//! JSON handler for uptime and power statistics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::stats::{Period, PeriodStatistic, PowerReport};
use secmon_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// One period's statistics, with raw seconds and display strings side by
/// side so API consumers don't re-implement the formatting rules.
#[derive(Serialize)]
pub struct PeriodView {
    pub period: Period,
    pub label: &'static str,
    pub off_seconds: u64,
    pub off_formatted: String,
    pub on_seconds: u64,
    pub on_formatted: String,
}

impl From<&PeriodStatistic> for PeriodView {
    fn from(stat: &PeriodStatistic) -> Self {
        Self {
            period: stat.period,
            label: stat.period.label(),
            off_seconds: stat.off_secs,
            off_formatted: stat.off_formatted(),
            on_seconds: stat.on_secs,
            on_formatted: stat.on_formatted(),
        }
    }
}

/// Power statistics as exposed over the API.
#[derive(Serialize)]
pub struct PowerView {
    pub periods: Vec<PeriodView>,
}

impl From<&PowerReport> for PowerView {
    fn from(report: &PowerReport) -> Self {
        Self {
            periods: report.periods.iter().map(PeriodView::from).collect(),
        }
    }
}

/// Response body for `GET /api/stats`.
#[derive(Serialize)]
pub struct StatsResponse {
    pub uptime_seconds: u64,
    pub uptime_formatted: String,
    pub networks_scanned: usize,
    pub power: PowerView,
}

/// Possible responses from the stats endpoint.
pub enum GetResponse {
    Ok(Json<StatsResponse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/stats`
pub async fn stats<S, P>(State(state): State<AppState<S, P>>) -> Result<GetResponse, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    let now = time::now();
    let report = state.monitor.power_report(now).await?;
    let scan = state.monitor.scan_report().await?;

    Ok(GetResponse::Ok(Json(StatsResponse {
        uptime_seconds: report.uptime_secs,
        uptime_formatted: report.uptime_formatted(),
        networks_scanned: scan.summary.total,
        power: PowerView::from(&report),
    })))
}
