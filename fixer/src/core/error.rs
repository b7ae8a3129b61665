//! Errors raised by the pure editing engine.

use thiserror::Error;

/// A replacement request that cannot be applied to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Custom value without a whitespace-separated name and value.
    #[error("invalid custom value '{raw}': expected \"<name> <value>\"")]
    InvalidCustomValue { raw: String },
    /// Replacement value that would not survive rendering as one line.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: &'static str,
    },
}
