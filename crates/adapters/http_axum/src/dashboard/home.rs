//! Dashboard home page — overview of the device.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::stats::{Period, PeriodStatistic};
use secmon_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// One row of the power-statistics table.
pub struct PeriodRow {
    pub label: &'static str,
    pub off: String,
    pub on: String,
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    refresh_seconds: u32,
    uptime: String,
    network_count: usize,
    vulnerable_count: usize,
    today_off: String,
    periods: Vec<PeriodRow>,
    current_time: String,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — device overview.
pub async fn index<S, P>(State(state): State<AppState<S, P>>) -> Result<HomeTemplate, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    let now = time::now();
    let report = state.monitor.power_report(now).await?;
    let scan = state.monitor.scan_report().await?;

    let today_off = report
        .periods
        .iter()
        .find(|stat| stat.period == Period::Today)
        .map_or_else(|| "0s".to_string(), PeriodStatistic::off_formatted);

    let periods = report
        .periods
        .iter()
        .map(|stat| PeriodRow {
            label: stat.period.label(),
            off: stat.off_formatted(),
            on: stat.on_formatted(),
        })
        .collect();

    Ok(HomeTemplate {
        refresh_seconds: 10,
        uptime: report.uptime_formatted(),
        network_count: scan.summary.total,
        vulnerable_count: scan.summary.vulnerable,
        today_off,
        periods,
        current_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
