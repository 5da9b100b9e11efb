//! Power transition events recorded by the monitoring subsystem.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Kind of power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerEventKind {
    PowerOn,
    PowerOff,
}

/// One transition of the device's power state.
///
/// Events are appended by the power-monitoring subsystem in chronological
/// order and are read-only afterwards. `duration_secs` is meaningful only
/// for [`PowerEventKind::PowerOff`]: how long the device stayed off before
/// the following power-on. The core takes it as given input; in the
/// firmware it is derived from the gap to the next boot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerEvent {
    pub kind: PowerEventKind,
    pub timestamp: Timestamp,
    pub duration_secs: u64,
}

impl PowerEvent {
    /// A power-on transition at `timestamp`.
    #[must_use]
    pub fn power_on(timestamp: Timestamp) -> Self {
        Self {
            kind: PowerEventKind::PowerOn,
            timestamp,
            duration_secs: 0,
        }
    }

    /// A power-off transition at `timestamp`, lasting `duration_secs`.
    #[must_use]
    pub fn power_off(timestamp: Timestamp, duration_secs: u64) -> Self {
        Self {
            kind: PowerEventKind::PowerOff,
            timestamp,
            duration_secs,
        }
    }
}
