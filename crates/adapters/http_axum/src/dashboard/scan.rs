//! Dashboard page for the WiFi scan results.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::network::ScanSummary;

use crate::error::ApiError;
use crate::state::AppState;

use super::tier_badge_class;

/// One row of the discovered-networks table. All display strings are
/// precomputed so the template stays dumb.
pub struct NetworkRow {
    pub index: usize,
    pub ssid: String,
    pub hidden: bool,
    pub bssid: String,
    pub rssi_dbm: i32,
    pub badge_class: &'static str,
    pub channel: u16,
    pub security: String,
    pub manufacturer: String,
    pub wps_vulnerable: bool,
}

/// Scan page template.
#[derive(Template)]
#[template(path = "scan.html")]
pub struct ScanTemplate {
    refresh_seconds: u32,
    summary: ScanSummary,
    networks: Vec<NetworkRow>,
}

impl IntoResponse for ScanTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /scan` — discovered networks and aggregate counts.
pub async fn page<S, P>(State(state): State<AppState<S, P>>) -> Result<ScanTemplate, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    let report = state.monitor.scan_report().await?;

    let networks = report
        .networks
        .iter()
        .enumerate()
        .map(|(i, record)| NetworkRow {
            index: i + 1,
            ssid: record.display_ssid().to_string(),
            hidden: record.is_hidden(),
            bssid: record.bssid.clone(),
            rssi_dbm: record.rssi_dbm,
            badge_class: tier_badge_class(record.signal_tier()),
            channel: record.channel,
            security: record.security.clone(),
            manufacturer: record.manufacturer.clone(),
            wps_vulnerable: record.wps_vulnerable,
        })
        .collect();

    Ok(ScanTemplate {
        refresh_seconds: 30,
        summary: report.summary,
        networks,
    })
}
