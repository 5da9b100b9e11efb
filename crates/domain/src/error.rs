//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]`; no `String`
//! variants at the top level.

/// Base error enum for the secmon core.
#[derive(Debug, thiserror::Error)]
pub enum SecMonError {
    /// A domain invariant was violated by the caller.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A data source (scanner or power log) failed to deliver.
    #[error("data source error")]
    Source(#[from] SourceError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A network record was built without a hardware address.
    #[error("network record is missing a BSSID")]
    MissingBssid,

    /// The power event log is not in chronological order.
    #[error("power events are not in chronological order")]
    UnorderedPowerEvents,
}

/// Failure reported by a data-source adapter.
#[derive(Debug, thiserror::Error)]
#[error("{source_name} source failed: {message}")]
pub struct SourceError {
    /// Which source failed (e.g. `"scanner"`, `"power-log"`).
    pub source_name: &'static str,
    /// Adapter-supplied detail.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: SecMonError = ValidationError::UnorderedPowerEvents.into();
        assert!(matches!(
            err,
            SecMonError::Validation(ValidationError::UnorderedPowerEvents)
        ));
    }

    #[test]
    fn should_display_source_error_with_origin() {
        let err = SourceError {
            source_name: "scanner",
            message: "radio unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "scanner source failed: radio unavailable");
    }
}
