//! # secmon-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `NetworkScanner` — supplier of one scan cycle's network records
//!   - `PowerLog` — supplier of the chronological power event log
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `MonitorService` — scan reports, power reports, uptime
//! - Hold the boot timestamp captured once at process start
//! - Orchestrate domain objects without knowing *where* the data comes from
//!
//! ## Dependency rule
//! Depends on `secmon-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
