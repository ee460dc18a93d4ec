//! The ramp function value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::{canonicalize, is_canonical};
use crate::error::{RampError, RampResult};
use crate::sampling::SampleGrid;
use crate::term::RampTerm;

/// A continuous piecewise-linear function of one variable.
///
/// Represented as a constant plus a sum of ramp terms:
///
/// ```text
/// f(x) = constant + Σ coefficient_i · max(x − breakpoint_i, 0)
/// ```
///
/// The term sequence is always canonical: sorted by strictly increasing
/// breakpoint, one term per breakpoint, no zero coefficients. The constant
/// is the value of the function left of its first breakpoint.
///
/// # Example
///
/// ```rust
/// use hinge_core::RampFunction;
///
/// let f = RampFunction::new(1.0, [(2.0, 3.0), (4.0, 5.0)]).unwrap();
/// assert_eq!(f.evaluate(10.0), 35.0);
///
/// let g = RampFunction::new(0.0, [(6.0, 7.0)]).unwrap();
/// let sum = &f + &g;
/// assert_eq!(sum.constant(), 1.0);
/// assert_eq!(sum.terms().len(), 3);
///
/// assert!((&f - &f).is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRampFunction")]
pub struct RampFunction {
    constant: f64,
    terms: Vec<RampTerm>,
}

/// Unvalidated serialized shape of a [`RampFunction`].
#[derive(Deserialize)]
struct RawRampFunction {
    constant: f64,
    #[serde(default)]
    terms: Vec<RampTerm>,
}

impl TryFrom<RawRampFunction> for RampFunction {
    type Error = RampError;

    fn try_from(raw: RawRampFunction) -> Result<Self, Self::Error> {
        Self::new(raw.constant, raw.terms)
    }
}

impl Default for RampFunction {
    fn default() -> Self {
        Self::zero()
    }
}

impl RampFunction {
    /// Creates a new ramp function from a constant and `(coefficient, breakpoint)` pairs.
    ///
    /// Terms are simplified immediately: they are sorted by breakpoint,
    /// terms sharing a breakpoint are merged and zero coefficients dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the constant or any term is not finite, or
    /// [`RampError::Overflow`] if merging terms overflows.
    pub fn new<I, T>(constant: f64, terms: I) -> RampResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<RampTerm>,
    {
        if !constant.is_finite() {
            return Err(RampError::invalid_constant(constant));
        }
        let terms = terms
            .into_iter()
            .map(|term| term.into().validated())
            .collect::<RampResult<Vec<_>>>()?;

        Self::from_parts(constant, terms, "construction")
    }

    /// Creates the zero function.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            constant: 0.0,
            terms: Vec::new(),
        }
    }

    /// Creates a constant function.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite.
    pub fn constant_fn(value: f64) -> RampResult<Self> {
        Self::new(value, std::iter::empty::<RampTerm>())
    }

    /// Creates a single ramp `coefficient * max(x - breakpoint, 0)`.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is not finite.
    pub fn ramp(coefficient: f64, breakpoint: f64) -> RampResult<Self> {
        Self::new(0.0, [(coefficient, breakpoint)])
    }

    /// Creates the unit ramp `max(x, 0)`.
    #[must_use]
    pub fn relu() -> Self {
        Self {
            constant: 0.0,
            terms: vec![RampTerm::new(1.0, 0.0)],
        }
    }

    /// Builds a function from computed parts, re-establishing canonical form.
    ///
    /// Every constructor and operator ends here. A non-finite constant or
    /// term in the canonical result is reported as an overflow of
    /// `operation`.
    pub(crate) fn from_parts(
        constant: f64,
        terms: Vec<RampTerm>,
        operation: &'static str,
    ) -> RampResult<Self> {
        let terms = canonicalize(terms);
        debug_assert!(is_canonical(&terms));

        let finite = constant.is_finite()
            && terms
                .iter()
                .all(|term| term.coefficient().is_finite() && term.breakpoint().is_finite());
        if !finite {
            log::debug!("{} produced a non-finite ramp function", operation);
            return Err(RampError::overflow(operation));
        }

        Ok(Self {
            constant: constant + 0.0,
            terms,
        })
    }

    /// Returns the constant term (the value left of every breakpoint).
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Returns the canonical ramp terms in ascending breakpoint order.
    #[must_use]
    pub fn terms(&self) -> &[RampTerm] {
        &self.terms
    }

    /// Returns the breakpoints in ascending order.
    pub fn breakpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.terms.iter().map(RampTerm::breakpoint)
    }

    /// Returns `true` if this is the zero function.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.constant == 0.0 && self.terms.is_empty()
    }

    /// Returns `true` if the function has no ramp terms.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.constant
            + self
                .terms
                .iter()
                .take_while(|term| term.breakpoint() < x)
                .map(|term| term.coefficient() * (x - term.breakpoint()))
                .sum::<f64>()
    }

    /// Returns the slope of the function just to the right of `x`.
    #[must_use]
    pub fn slope_at(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .take_while(|term| term.is_active_after(x))
            .map(RampTerm::coefficient)
            .sum()
    }

    /// Returns x-values covering every linear piece of the function.
    #[must_use]
    pub fn sample_points(&self, grid: &SampleGrid) -> Vec<f64> {
        grid.points(self.breakpoints())
    }

    /// Returns `(x, f(x))` pairs at the grid's sample points.
    #[must_use]
    pub fn sample(&self, grid: &SampleGrid) -> Vec<(f64, f64)> {
        self.sample_points(grid)
            .into_iter()
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }
}

impl fmt::Display for RampFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RampFunction({}, [", self.constant)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, "])")
    }
}
