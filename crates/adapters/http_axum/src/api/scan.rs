//! JSON handler for the WiFi scan snapshot.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::network::{NetworkRecord, ScanSummary, SignalTier};
use secmon_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// One network as exposed over the API: every record field plus the derived
/// signal tier and the anonymized display name.
#[derive(Serialize)]
pub struct NetworkView {
    pub ssid: String,
    pub display_ssid: String,
    pub bssid: String,
    pub rssi_dbm: i32,
    pub tier: SignalTier,
    pub channel: u16,
    pub security: String,
    pub manufacturer: String,
    pub wps_vulnerable: bool,
    pub hidden: bool,
}

impl From<NetworkRecord> for NetworkView {
    fn from(record: NetworkRecord) -> Self {
        let display_ssid = record.display_ssid().to_string();
        let tier = record.signal_tier();
        Self {
            ssid: record.ssid,
            display_ssid,
            bssid: record.bssid,
            rssi_dbm: record.rssi_dbm,
            tier,
            channel: record.channel,
            security: record.security,
            manufacturer: record.manufacturer,
            wps_vulnerable: record.wps_vulnerable,
            hidden: record.hidden,
        }
    }
}

/// Response body for `GET /api/scan`.
#[derive(Serialize)]
pub struct ScanResponse {
    pub networks: Vec<NetworkView>,
    pub summary: ScanSummary,
    pub scanned_at: String,
}

/// Possible responses from the scan endpoint.
pub enum GetResponse {
    Ok(Json<ScanResponse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/scan`
pub async fn scan<S, P>(State(state): State<AppState<S, P>>) -> Result<GetResponse, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    let report = state.monitor.scan_report().await?;
    let summary = report.summary;
    let networks = report.networks.into_iter().map(NetworkView::from).collect();

    Ok(GetResponse::Ok(Json(ScanResponse {
        networks,
        summary,
        scanned_at: time::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })))
}
