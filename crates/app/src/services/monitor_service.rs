//! Monitor service — the use-cases behind the dashboard and JSON API.

use secmon_domain::error::SecMonError;
use secmon_domain::network::ScanReport;
use secmon_domain::power::PowerEvent;
use secmon_domain::stats::{self, PowerReport};
use secmon_domain::time::Timestamp;

use crate::ports::{NetworkScanner, PowerLog};

/// Application service composing the data-source ports with the
/// statistics/classification core.
///
/// Holds the boot timestamp captured once at process start. It is set at
/// construction and read-only for the service's lifetime — never a mutable
/// global.
pub struct MonitorService<S, P> {
    scanner: S,
    power_log: P,
    boot_time: Timestamp,
}

impl<S: NetworkScanner, P: PowerLog> MonitorService<S, P> {
    /// Create a new service over the given data sources.
    ///
    /// `boot_time` is the instant the process (standing in for the device)
    /// started; the caller captures it exactly once.
    pub fn new(scanner: S, power_log: P, boot_time: Timestamp) -> Self {
        Self {
            scanner,
            power_log,
            boot_time,
        }
    }

    /// The timestamp captured when the process started.
    #[must_use]
    pub fn boot_time(&self) -> Timestamp {
        self.boot_time
    }

    /// Seconds the device has been up at `now`.
    #[must_use]
    pub fn uptime_secs(&self, now: Timestamp) -> u64 {
        stats::device_uptime_secs(self.boot_time, now)
    }

    /// Run a scan cycle and aggregate its records.
    ///
    /// # Errors
    ///
    /// Propagates a scanner failure as [`SecMonError::Source`].
    #[tracing::instrument(skip(self))]
    pub async fn scan_report(&self) -> Result<ScanReport, SecMonError> {
        let networks = self.scanner.scan().await?;
        tracing::debug!(count = networks.len(), "scan cycle complete");
        Ok(ScanReport::new(networks))
    }

    /// The raw power event log, oldest first.
    ///
    /// # Errors
    ///
    /// Propagates a power-log failure as [`SecMonError::Source`].
    pub async fn power_events(&self) -> Result<Vec<PowerEvent>, SecMonError> {
        self.power_log.events().await
    }

    /// Period-bucketed power statistics evaluated at `now`.
    ///
    /// # Errors
    ///
    /// Propagates a power-log failure, or a validation error when the log
    /// is not chronologically ordered.
    #[tracing::instrument(skip(self))]
    pub async fn power_report(&self, now: Timestamp) -> Result<PowerReport, SecMonError> {
        let events = self.power_log.events().await?;
        PowerReport::compute(&events, self.boot_time, now)
    }
}
