//! Error types for styled-qr

use std::sync::Arc;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QrError>;

/// Main error type for styled-qr
#[derive(Debug, Error)]
pub enum QrError {
    /// The engine load attempt failed. Every caller that awaited the same
    /// attempt receives the same shared error.
    #[error("Engine load failed: {0}")]
    EngineLoad(#[source] Arc<LoadError>),

    #[error("QR engine not initialized. Call initialize() first.")]
    EngineNotReady,

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Unrecognized engine variant: {0}")]
    Variant(#[from] VariantError),
}

/// Engine bootstrap errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Bootstrap source could not be fetched: {0}")]
    Fetch(String),

    #[error("Invalid engine module: {0}")]
    InvalidModule(String),

    #[error("Incompatible engine binary: {0}")]
    Incompatible(String),

    /// The loader panicked; the message is the panic payload when it is a string
    #[error("Engine loader panicked: {0}")]
    Panicked(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by the engine's generation entry point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The engine refused the input, e.g. the payload does not fit any QR version
    #[error("Input rejected by engine: {0}")]
    Rejected(String),

    #[error("Engine failure: {0}")]
    Internal(String),
}

/// A name or discriminant that matches no variant of a known enumeration
///
/// Raised for the engine style axes and for configuration values such as
/// the failure policy. `axis` names the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("unknown {axis} discriminant {value}")]
    UnknownValue { axis: &'static str, value: u32 },

    #[error("unknown {axis} name '{name}'")]
    UnknownName { axis: &'static str, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_message_names_the_fix() {
        let msg = QrError::EngineNotReady.to_string();
        assert!(msg.contains("initialize()"));
    }

    #[test]
    fn test_generation_error_is_forwarded_verbatim() {
        let err: QrError = GenerationError::Rejected("payload too large".into()).into();
        match &err {
            QrError::Generation(GenerationError::Rejected(msg)) => {
                assert_eq!(msg, "payload too large")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("payload too large"));
    }

    #[test]
    fn test_load_error_source_chain() {
        use std::error::Error as _;

        let err = QrError::EngineLoad(Arc::new(LoadError::InvalidModule("bad magic".into())));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Invalid engine module: bad magic"));
    }

    #[test]
    fn test_variant_error_names_its_enumeration() {
        let err = VariantError::UnknownName {
            axis: "failure policy",
            name: "sometimes".into(),
        };
        assert_eq!(err.to_string(), "unknown failure policy name 'sometimes'");
    }
}
