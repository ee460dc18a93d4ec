//! Error types for ramp function construction and algebra.

use thiserror::Error;

/// A specialized Result type for ramp function operations.
pub type RampResult<T> = Result<T, RampError>;

/// Errors that can occur while building or combining ramp functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RampError {
    /// The constant term is not a finite number.
    #[error("Constant term must be a finite number, got {value}")]
    InvalidConstant {
        /// The rejected constant.
        value: f64,
    },

    /// A ramp term has a non-finite coefficient or breakpoint.
    #[error("Ramp terms must be finite (coefficient, breakpoint) pairs, got ({coefficient}, {breakpoint})")]
    InvalidTerm {
        /// The rejected coefficient.
        coefficient: f64,
        /// The rejected breakpoint.
        breakpoint: f64,
    },

    /// A scaling factor is not a finite number.
    #[error("Only finite scalar multiplication is defined, got factor {factor}")]
    InvalidScale {
        /// The rejected factor.
        factor: f64,
    },

    /// A scalar offset is not a finite number.
    #[error("Ramp functions can only be added to other ramp functions or finite scalars, got {value}")]
    InvalidOffset {
        /// The rejected offset.
        value: f64,
    },

    /// An operation on finite inputs produced a non-finite constant, coefficient or breakpoint.
    #[error("Numerical overflow in {operation}: result is not finite")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },

    /// The inner function of a composition decreases somewhere.
    #[error("Inner function must be nondecreasing: slope {slope} after breakpoint #{index}")]
    NonMonotonicInner {
        /// Index of the breakpoint after which the slope turns negative.
        index: usize,
        /// The negative slope.
        slope: f64,
    },
}

impl RampError {
    /// Creates an invalid constant error.
    #[must_use]
    pub fn invalid_constant(value: f64) -> Self {
        Self::InvalidConstant { value }
    }

    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(coefficient: f64, breakpoint: f64) -> Self {
        Self::InvalidTerm {
            coefficient,
            breakpoint,
        }
    }

    /// Creates an invalid scale error.
    #[must_use]
    pub fn invalid_scale(factor: f64) -> Self {
        Self::InvalidScale { factor }
    }

    /// Creates an invalid offset error.
    #[must_use]
    pub fn invalid_offset(value: f64) -> Self {
        Self::InvalidOffset { value }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Creates a non-monotonic inner function error.
    #[must_use]
    pub fn non_monotonic(index: usize, slope: f64) -> Self {
        Self::NonMonotonicInner { index, slope }
    }
}
