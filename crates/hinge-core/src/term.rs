//! A single ramp (hinge) term.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RampError, RampResult};

/// One `coefficient * max(x - breakpoint, 0)` term.
///
/// # Example
///
/// ```rust
/// use hinge_core::RampTerm;
///
/// let term = RampTerm::new(2.0, 3.0);
/// assert_eq!(term.evaluate(10.0), 14.0);
/// assert_eq!(term.evaluate(1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampTerm {
    coefficient: f64,
    breakpoint: f64,
}

impl RampTerm {
    /// Creates a new ramp term.
    #[must_use]
    pub fn new(coefficient: f64, breakpoint: f64) -> Self {
        Self {
            coefficient,
            breakpoint,
        }
    }

    /// Returns the slope added once `x` passes the breakpoint.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the x-value at which the term switches on.
    #[must_use]
    pub fn breakpoint(&self) -> f64 {
        self.breakpoint
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        if x > self.breakpoint {
            self.coefficient * (x - self.breakpoint)
        } else {
            0.0
        }
    }

    /// Returns `true` if the term is active strictly to the right of `x`.
    #[must_use]
    pub fn is_active_after(&self, x: f64) -> bool {
        x >= self.breakpoint
    }

    pub(crate) fn validated(self) -> RampResult<Self> {
        if self.coefficient.is_finite() && self.breakpoint.is_finite() {
            Ok(self)
        } else {
            Err(RampError::invalid_term(self.coefficient, self.breakpoint))
        }
    }

    pub(crate) fn scaled(self, factor: f64) -> Self {
        Self {
            coefficient: self.coefficient * factor,
            breakpoint: self.breakpoint,
        }
    }
}

impl From<(f64, f64)> for RampTerm {
    fn from((coefficient, breakpoint): (f64, f64)) -> Self {
        Self::new(coefficient, breakpoint)
    }
}

impl From<RampTerm> for (f64, f64) {
    fn from(term: RampTerm) -> Self {
        (term.coefficient, term.breakpoint)
    }
}

impl fmt::Display for RampTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.coefficient, self.breakpoint)
    }
}
