//! Observed wireless networks — records, signal tiers, and scan aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SecMonError, ValidationError};

/// Placeholder shown wherever a network must be anonymized.
pub const HIDDEN_SSID: &str = "[Hidden]";

/// Qualitative signal-strength tier derived from a raw RSSI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SignalTier {
    /// Classify a raw RSSI value in dBm.
    ///
    /// Thresholds are inclusive lower bounds: `>= -50` is excellent,
    /// `>= -60` good, `>= -70` fair, anything weaker poor. The function is
    /// total over all integers; unrealistic positive readings land in
    /// [`SignalTier::Excellent`].
    #[must_use]
    pub fn from_rssi(rssi_dbm: i32) -> Self {
        if rssi_dbm >= -50 {
            Self::Excellent
        } else if rssi_dbm >= -60 {
            Self::Good
        } else if rssi_dbm >= -70 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lowercase label used in JSON payloads and CSS class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for SignalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed wireless network.
///
/// Constructed once per scan cycle and immutable afterwards; the next scan
/// replaces the whole collection. No scan history is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    /// Broadcast name; empty for hidden networks.
    pub ssid: String,
    /// Hardware address, colon-separated.
    pub bssid: String,
    /// Received signal strength in dBm (roughly −100..0).
    pub rssi_dbm: i32,
    /// Channel the network was observed on.
    pub channel: u16,
    /// Security descriptor reported by the beacon (e.g. `"WPA2"`).
    pub security: String,
    /// Manufacturer label derived from the BSSID prefix.
    pub manufacturer: String,
    /// Whether the network's WPS implementation matches a known-vulnerable
    /// device signature. Not independently verified.
    pub wps_vulnerable: bool,
    /// Whether the network withheld its SSID.
    #[serde(default)]
    pub hidden: bool,
}

impl NetworkRecord {
    /// Create a builder for constructing a [`NetworkRecord`].
    #[must_use]
    pub fn builder() -> NetworkRecordBuilder {
        NetworkRecordBuilder::default()
    }

    /// Signal tier derived from this record's RSSI.
    #[must_use]
    pub fn signal_tier(&self) -> SignalTier {
        SignalTier::from_rssi(self.rssi_dbm)
    }

    /// Whether this network must be presented anonymized.
    ///
    /// Covers both an explicit hidden flag and an SSID that came back empty:
    /// an empty string must never be shown as if it were a real name.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden || self.ssid.is_empty()
    }

    /// Name to display: the SSID, or the [`HIDDEN_SSID`] placeholder.
    #[must_use]
    pub fn display_ssid(&self) -> &str {
        if self.is_hidden() {
            HIDDEN_SSID
        } else {
            &self.ssid
        }
    }
}

/// Step-by-step builder for [`NetworkRecord`].
#[derive(Debug, Default)]
pub struct NetworkRecordBuilder {
    ssid: String,
    bssid: Option<String>,
    rssi_dbm: i32,
    channel: u16,
    security: String,
    manufacturer: Option<String>,
    wps_vulnerable: bool,
    hidden: bool,
}

impl NetworkRecordBuilder {
    #[must_use]
    pub fn ssid(mut self, ssid: impl Into<String>) -> Self {
        self.ssid = ssid.into();
        self
    }

    #[must_use]
    pub fn bssid(mut self, bssid: impl Into<String>) -> Self {
        self.bssid = Some(bssid.into());
        self
    }

    #[must_use]
    pub fn rssi_dbm(mut self, rssi_dbm: i32) -> Self {
        self.rssi_dbm = rssi_dbm;
        self
    }

    #[must_use]
    pub fn channel(mut self, channel: u16) -> Self {
        self.channel = channel;
        self
    }

    #[must_use]
    pub fn security(mut self, security: impl Into<String>) -> Self {
        self.security = security.into();
        self
    }

    #[must_use]
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    #[must_use]
    pub fn wps_vulnerable(mut self, wps_vulnerable: bool) -> Self {
        self.wps_vulnerable = wps_vulnerable;
        self
    }

    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Consume the builder and return a [`NetworkRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBssid`] when no BSSID was supplied —
    /// a record without a hardware address identifies nothing.
    pub fn build(self) -> Result<NetworkRecord, SecMonError> {
        let bssid = self
            .bssid
            .filter(|b| !b.is_empty())
            .ok_or(ValidationError::MissingBssid)?;

        Ok(NetworkRecord {
            ssid: self.ssid,
            bssid,
            rssi_dbm: self.rssi_dbm,
            channel: self.channel,
            security: self.security,
            manufacturer: self.manufacturer.unwrap_or_else(|| "Unknown".to_string()),
            wps_vulnerable: self.wps_vulnerable,
            hidden: self.hidden,
        })
    }
}

/// Aggregate counts over one scan cycle.
///
/// `secure` is defined as the complement of `vulnerable`, which guarantees
/// `total == vulnerable + secure`. It means "not flagged WPS-vulnerable",
/// not "proven secure" — the scanner has no way to verify the stronger
/// claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of records in the scan.
    pub total: usize,
    /// Records whose WPS vulnerability flag is set.
    pub vulnerable: usize,
    /// Remainder: records not flagged as vulnerable.
    pub secure: usize,
}

impl ScanSummary {
    /// Aggregate a scan cycle's records. An empty slice yields all zeros.
    #[must_use]
    pub fn from_records(records: &[NetworkRecord]) -> Self {
        let total = records.len();
        let vulnerable = records.iter().filter(|r| r.wps_vulnerable).count();
        Self {
            total,
            vulnerable,
            secure: total - vulnerable,
        }
    }
}

/// A scan cycle's records together with their aggregate counts.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub networks: Vec<NetworkRecord>,
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Wrap a scan cycle's records, computing the aggregate counts.
    #[must_use]
    pub fn new(networks: Vec<NetworkRecord>) -> Self {
        let summary = ScanSummary::from_records(&networks);
        Self { networks, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ssid: &str, rssi_dbm: i32, wps_vulnerable: bool) -> NetworkRecord {
        NetworkRecord::builder()
            .ssid(ssid)
            .bssid("AA:BB:CC:DD:EE:01")
            .rssi_dbm(rssi_dbm)
            .channel(6)
            .security("WPA2")
            .manufacturer("TP-Link")
            .wps_vulnerable(wps_vulnerable)
            .build()
            .unwrap()
    }

    #[test]
    fn should_classify_rssi_into_tiers_at_boundaries() {
        assert_eq!(SignalTier::from_rssi(-45), SignalTier::Excellent);
        assert_eq!(SignalTier::from_rssi(-50), SignalTier::Excellent);
        assert_eq!(SignalTier::from_rssi(-51), SignalTier::Good);
        assert_eq!(SignalTier::from_rssi(-60), SignalTier::Good);
        assert_eq!(SignalTier::from_rssi(-61), SignalTier::Fair);
        assert_eq!(SignalTier::from_rssi(-65), SignalTier::Fair);
        assert_eq!(SignalTier::from_rssi(-70), SignalTier::Fair);
        assert_eq!(SignalTier::from_rssi(-71), SignalTier::Poor);
        assert_eq!(SignalTier::from_rssi(-75), SignalTier::Poor);
    }

    #[test]
    fn should_classify_unrealistic_positive_rssi_as_excellent() {
        assert_eq!(SignalTier::from_rssi(0), SignalTier::Excellent);
        assert_eq!(SignalTier::from_rssi(30), SignalTier::Excellent);
    }

    #[test]
    fn should_serialize_tier_as_lowercase_label() {
        let json = serde_json::to_string(&SignalTier::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
        assert_eq!(SignalTier::Poor.to_string(), "poor");
    }

    #[test]
    fn should_derive_tier_from_record_rssi() {
        assert_eq!(record("Home", -45, false).signal_tier(), SignalTier::Excellent);
        assert_eq!(record("Home", -72, false).signal_tier(), SignalTier::Poor);
    }

    #[test]
    fn should_anonymize_explicitly_hidden_network() {
        let net = NetworkRecord::builder()
            .bssid("44:55:66:77:88:06")
            .rssi_dbm(-78)
            .channel(3)
            .security("WPA2")
            .hidden(true)
            .build()
            .unwrap();
        assert!(net.is_hidden());
        assert_eq!(net.display_ssid(), HIDDEN_SSID);
    }

    #[test]
    fn should_anonymize_empty_ssid_even_without_hidden_flag() {
        // Regression guard: an empty name must never leak as a blank cell.
        let net = record("", -60, false);
        assert!(!net.hidden);
        assert!(net.is_hidden());
        assert_eq!(net.display_ssid(), HIDDEN_SSID);
    }

    #[test]
    fn should_display_real_ssid_for_visible_network() {
        let net = record("Office_WiFi", -60, false);
        assert_eq!(net.display_ssid(), "Office_WiFi");
    }

    #[test]
    fn should_reject_record_without_bssid() {
        let result = NetworkRecord::builder().ssid("Home").build();
        assert!(matches!(
            result,
            Err(SecMonError::Validation(ValidationError::MissingBssid))
        ));
    }

    #[test]
    fn should_default_manufacturer_to_unknown() {
        let net = NetworkRecord::builder()
            .bssid("AA:BB:CC:DD:EE:02")
            .build()
            .unwrap();
        assert_eq!(net.manufacturer, "Unknown");
    }

    #[test]
    fn should_aggregate_empty_scan_to_zeros() {
        let summary = ScanSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.vulnerable, 0);
        assert_eq!(summary.secure, 0);
    }

    #[test]
    fn should_keep_secure_as_complement_of_vulnerable() {
        let records = vec![
            record("a", -45, true),
            record("b", -52, true),
            record("c", -65, false),
            record("d", -72, false),
            record("e", -48, true),
        ];
        let summary = ScanSummary::from_records(&records);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.vulnerable, 3);
        assert_eq!(summary.secure, 2);
        assert_eq!(summary.total, summary.vulnerable + summary.secure);
    }

    #[test]
    fn should_compose_scan_report_with_summary() {
        let report = ScanReport::new(vec![record("a", -45, true), record("b", -72, false)]);
        assert_eq!(report.networks.len(), 2);
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.vulnerable, 1);
    }

    #[test]
    fn should_roundtrip_record_through_serde_json() {
        let net = record("Office_WiFi", -60, true);
        let json = serde_json::to_string(&net).unwrap();
        let parsed: NetworkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, net);
    }

    #[test]
    fn should_default_hidden_flag_when_missing_from_json() {
        let json = r#"{
            "ssid": "HomeNetwork",
            "bssid": "22:33:44:55:66:04",
            "rssi_dbm": -65,
            "channel": 1,
            "security": "WPA2",
            "manufacturer": "Netgear",
            "wps_vulnerable": false
        }"#;
        let parsed: NetworkRecord = serde_json::from_str(json).unwrap();
        assert!(!parsed.hidden);
    }
}
