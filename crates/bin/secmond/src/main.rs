//! # secmond — secmon daemon
//!
//! Composition root that wires the data sources and the HTTP adapter
//! together and starts the preview server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `tracing` subscriber
//! - Capture the boot timestamp — exactly once, before anything else reads it
//! - Construct the sample data sources (adapters)
//! - Construct the monitor service, injecting sources via port traits
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use secmon_adapter_http_axum::state::AppState;
use secmon_adapter_sample::{SamplePowerLog, SampleScanner};
use secmon_app::services::MonitorService;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Boot timestamp: captured once, read-only for the process's lifetime.
    let boot_time = secmon_domain::time::now();

    // Data sources
    let scanner = SampleScanner;
    let power_log = SamplePowerLog::new(boot_time);

    // Service
    let monitor = MonitorService::new(scanner, power_log, boot_time);

    // HTTP
    let state = AppState::new(monitor);
    let app = secmon_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, %boot_time, "secmond listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
