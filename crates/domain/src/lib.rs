//! # secmon-domain
//!
//! Pure domain model for the secmon dashboard preview.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **`NetworkRecord`** (one observed wireless network) and its
//!   classification helpers (signal tiers, hidden-network anonymization)
//! - Define **`PowerEvent`** (one power-state transition)
//! - Derive **statistics**: scan aggregates, period-bucketed power
//!   off/on totals, device uptime
//! - Format elapsed durations for human consumption
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod duration;
pub mod error;
pub mod time;

pub mod network;
pub mod power;
pub mod stats;
