//! Period-bucketed power statistics and device uptime.

use serde::Serialize;

use crate::duration::format_duration;
use crate::error::{SecMonError, ValidationError};
use crate::power::{PowerEvent, PowerEventKind};
use crate::time::Timestamp;

/// A reporting window: a fixed-length trailing range ending at the
/// evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_15_days")]
    Last15Days,
    #[serde(rename = "this_month")]
    ThisMonth,
}

impl Period {
    /// All reporting periods, in display order.
    pub const ALL: [Self; 4] = [
        Self::Today,
        Self::Last7Days,
        Self::Last15Days,
        Self::ThisMonth,
    ];

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 Days",
            Self::Last15Days => "Last 15 Days",
            Self::ThisMonth => "This Month",
        }
    }

    /// Trailing window length.
    #[must_use]
    pub fn window(self) -> chrono::Duration {
        match self {
            Self::Today => chrono::Duration::days(1),
            Self::Last7Days => chrono::Duration::days(7),
            Self::Last15Days => chrono::Duration::days(15),
            Self::ThisMonth => chrono::Duration::days(30),
        }
    }
}

/// Derived off/on totals for one reporting period. Not a stored entity —
/// recomputed from the event log on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodStatistic {
    pub period: Period,
    pub off_secs: u64,
    pub on_secs: u64,
}

impl PeriodStatistic {
    /// Off-time total rendered for display.
    #[must_use]
    pub fn off_formatted(&self) -> String {
        format_duration(to_signed(self.off_secs))
    }

    /// On-time total rendered for display.
    #[must_use]
    pub fn on_formatted(&self) -> String {
        format_duration(to_signed(self.on_secs))
    }
}

/// Power statistics over the fixed period set, plus device uptime.
#[derive(Debug, Clone, Serialize)]
pub struct PowerReport {
    pub uptime_secs: u64,
    pub periods: Vec<PeriodStatistic>,
}

impl PowerReport {
    /// Compute the report over a chronologically ordered event log.
    ///
    /// Off-time is event-driven: the sum of logged outage durations whose
    /// timestamp falls inside each trailing window. On-time is the uptime
    /// clock since `boot_time` — not the window complement, because the
    /// device may not have been power-cycled inside the window at all.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnorderedPowerEvents`] when the log is not
    /// chronologically non-decreasing. Producing statistics from a scrambled
    /// log would be silently wrong, so the report fails fast instead.
    pub fn compute(
        events: &[PowerEvent],
        boot_time: Timestamp,
        now: Timestamp,
    ) -> Result<Self, SecMonError> {
        if events.windows(2).any(|pair| pair[0].timestamp > pair[1].timestamp) {
            return Err(ValidationError::UnorderedPowerEvents.into());
        }

        let uptime_secs = device_uptime_secs(boot_time, now);
        let periods = Period::ALL
            .iter()
            .map(|&period| {
                let window_start = now - period.window();
                let off_secs = events
                    .iter()
                    .filter(|event| event.kind == PowerEventKind::PowerOff)
                    .filter(|event| event.timestamp >= window_start && event.timestamp <= now)
                    .map(|event| event.duration_secs)
                    .sum();
                PeriodStatistic {
                    period,
                    off_secs,
                    on_secs: uptime_secs,
                }
            })
            .collect();

        Ok(Self {
            uptime_secs,
            periods,
        })
    }

    /// Device uptime rendered for display.
    #[must_use]
    pub fn uptime_formatted(&self) -> String {
        format_duration(to_signed(self.uptime_secs))
    }
}

/// Seconds elapsed since boot at `now`, clamped to zero.
///
/// The boot timestamp is captured once at process start; a `now` earlier
/// than boot (clock adjustment) must not yield a negative uptime.
#[must_use]
pub fn device_uptime_secs(boot_time: Timestamp, now: Timestamp) -> u64 {
    u64::try_from((now - boot_time).num_seconds().max(0)).unwrap_or(0)
}

fn to_signed(secs: u64) -> i64 {
    i64::try_from(secs).unwrap_or(i64::MAX)
}
