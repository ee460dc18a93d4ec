//! Error types for formula rendering.

use hinge_core::RampError;
use thiserror::Error;

/// A specialized Result type for formula rendering.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors that can occur while rendering formulas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    /// The cell reference cannot be substituted into a formula.
    #[error("Invalid cell reference {reference:?}: {reason}")]
    InvalidReference {
        /// The rejected reference.
        reference: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The function could not be built.
    #[error("Ramp function error: {0}")]
    Ramp(#[from] RampError),
}

impl SheetError {
    /// Creates an invalid reference error.
    #[must_use]
    pub fn invalid_reference(reference: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
            reason,
        }
    }
}
