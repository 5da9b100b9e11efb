//! Dashboard page for the power event log.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::duration::format_duration;
use secmon_domain::power::PowerEventKind;

use crate::error::ApiError;
use crate::state::AppState;

/// One row of the power event log table.
pub struct EventRow {
    pub index: usize,
    pub is_on: bool,
    pub time: String,
    pub duration: String,
}

/// Power history page template.
#[derive(Template)]
#[template(path = "power.html")]
pub struct PowerTemplate {
    refresh_seconds: u32,
    events: Vec<EventRow>,
}

impl IntoResponse for PowerTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /power` — power event log.
pub async fn page<S, P>(State(state): State<AppState<S, P>>) -> Result<PowerTemplate, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    P: PowerLog + Send + Sync + 'static,
{
    let events = state.monitor.power_events().await?;

    let events = events
        .iter()
        .enumerate()
        .map(|(i, event)| EventRow {
            index: i + 1,
            is_on: event.kind == PowerEventKind::PowerOn,
            time: event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            duration: if event.duration_secs > 0 {
                format_duration(i64::try_from(event.duration_secs).unwrap_or(i64::MAX))
            } else {
                "-".to_string()
            },
        })
        .collect();

    Ok(PowerTemplate {
        refresh_seconds: 10,
        events,
    })
}
