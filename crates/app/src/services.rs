//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters and exposes the operations the presentation layer consumes.

pub mod monitor_service;

pub use monitor_service::MonitorService;
