//! Scanner port — the supplier of observed wireless networks.

use std::future::Future;

use secmon_domain::error::SecMonError;
use secmon_domain::network::NetworkRecord;

/// Source of one scan cycle's network records.
///
/// The demo binary wires the hardcoded sample adapter here; a firmware
/// build would plug in the radio-backed scanner without the core changing.
pub trait NetworkScanner {
    /// Run one scan cycle and return the observed networks.
    fn scan(&self) -> impl Future<Output = Result<Vec<NetworkRecord>, SecMonError>> + Send;
}
