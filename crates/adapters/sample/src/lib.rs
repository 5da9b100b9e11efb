//! # secmon-adapter-sample
//!
//! Demo data source that provides hardcoded sample data for the dashboard
//! preview, standing in for the firmware's radio scanner and its
//! power-monitoring subsystem.
//!
//! ## Provided networks
//!
//! | SSID | RSSI | WPS vulnerable | Notes |
//! |------|------|----------------|-------|
//! | `Archer_AX73_5G` | −45 dBm | yes | |
//! | `ASUS_RT-AX86U` | −52 dBm | yes | |
//! | `Xiaomi_AX3000` | −58 dBm | yes | |
//! | `HomeNetwork` | −65 dBm | no | |
//! | `Office_WiFi` | −72 dBm | no | |
//! | *(hidden)* | −78 dBm | no | empty SSID, hidden flag set |
//! | `Tenda_AC21` | −55 dBm | yes | |
//! | `D-Link_DIR-X4860` | −48 dBm | yes | |
//!
//! The power log covers the two days before the reference instant: a boot
//! at −48 h, a 30-minute outage at −40 h, a boot at −24 h, a 15-minute
//! outage at −12 h, and the most recent boot at −4 h.
//!
//! ## Dependency rule
//!
//! Depends on `secmon-app` (port traits) and `secmon-domain` only.

use std::future::Future;

use secmon_app::ports::{NetworkScanner, PowerLog};
use secmon_domain::error::SecMonError;
use secmon_domain::network::NetworkRecord;
use secmon_domain::power::PowerEvent;
use secmon_domain::time::Timestamp;

/// Scanner that returns the same fixed set of networks on every cycle.
#[derive(Debug, Default)]
pub struct SampleScanner;

impl NetworkScanner for SampleScanner {
    fn scan(&self) -> impl Future<Output = Result<Vec<NetworkRecord>, SecMonError>> + Send {
        let records = sample_networks();
        async move { Ok(records) }
    }
}

/// Power log with a fixed two-day history relative to a reference instant.
#[derive(Debug)]
pub struct SamplePowerLog {
    events: Vec<PowerEvent>,
}

impl SamplePowerLog {
    /// Build the demo event log relative to `reference` (normally the boot
    /// instant captured at process start).
    #[must_use]
    pub fn new(reference: Timestamp) -> Self {
        let hour = chrono::Duration::hours(1);
        Self {
            events: vec![
                PowerEvent::power_on(reference - hour * 48),
                PowerEvent::power_off(reference - hour * 40, 1_800),
                PowerEvent::power_on(reference - hour * 24),
                PowerEvent::power_off(reference - hour * 12, 900),
                PowerEvent::power_on(reference - hour * 4),
            ],
        }
    }
}

impl PowerLog for SamplePowerLog {
    fn events(&self) -> impl Future<Output = Result<Vec<PowerEvent>, SecMonError>> + Send {
        let events = self.events.clone();
        async move { Ok(events) }
    }
}

fn sample_networks() -> Vec<NetworkRecord> {
    vec![
        NetworkRecord::builder()
            .ssid("Archer_AX73_5G")
            .bssid("AA:BB:CC:DD:EE:01")
            .rssi_dbm(-45)
            .channel(36)
            .security("WPA2")
            .manufacturer("TP-Link")
            .wps_vulnerable(true)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .ssid("ASUS_RT-AX86U")
            .bssid("11:22:33:44:55:02")
            .rssi_dbm(-52)
            .channel(6)
            .security("WPA2/WPA3")
            .manufacturer("ASUS")
            .wps_vulnerable(true)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .ssid("Xiaomi_AX3000")
            .bssid("66:77:88:99:AA:03")
            .rssi_dbm(-58)
            .channel(11)
            .security("WPA2")
            .manufacturer("Xiaomi")
            .wps_vulnerable(true)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .ssid("HomeNetwork")
            .bssid("22:33:44:55:66:04")
            .rssi_dbm(-65)
            .channel(1)
            .security("WPA2")
            .manufacturer("Netgear")
            .wps_vulnerable(false)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .ssid("Office_WiFi")
            .bssid("33:44:55:66:77:05")
            .rssi_dbm(-72)
            .channel(9)
            .security("WPA3")
            .manufacturer("Cisco")
            .wps_vulnerable(false)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .bssid("44:55:66:77:88:06")
            .rssi_dbm(-78)
            .channel(3)
            .security("WPA2")
            .hidden(true)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .ssid("Tenda_AC21")
            .bssid("55:66:77:88:99:07")
            .rssi_dbm(-55)
            .channel(6)
            .security("WPA2")
            .manufacturer("Tenda")
            .wps_vulnerable(true)
            .build()
            .unwrap(),
        NetworkRecord::builder()
            .ssid("D-Link_DIR-X4860")
            .bssid("66:77:88:99:AA:08")
            .rssi_dbm(-48)
            .channel(149)
            .security("WPA2")
            .manufacturer("D-Link")
            .wps_vulnerable(true)
            .build()
            .unwrap(),
    ]
}
