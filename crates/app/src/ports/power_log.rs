//! Power log port — the supplier of recorded power transitions.

use std::future::Future;

use secmon_domain::error::SecMonError;
use secmon_domain::power::PowerEvent;

/// Source of the device's power event log.
///
/// Implementations must return events in chronological order, oldest first;
/// the statistics core rejects a scrambled log.
pub trait PowerLog {
    /// Return the full event log, oldest first.
    fn events(&self) -> impl Future<Output = Result<Vec<PowerEvent>, SecMonError>> + Send;
}
