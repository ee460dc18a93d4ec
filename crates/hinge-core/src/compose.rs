//! Functional composition of ramp functions.
//!
//! For a nondecreasing inner function `f` and any outer function `g`, the
//! composition `g(f(x))` is again a constant plus a sum of ramps. Each
//! outer ramp `b * max(y - p, 0)` becomes `b * max(f(x) - p, 0)`; because
//! `f` is continuous and nondecreasing, `f(x) - p` crosses zero at most
//! once, and past the crossing the composed term follows `f`'s own slope
//! changes scaled by `b`.
//!
//! Composition costs one pass over the inner breakpoints to tabulate the
//! inner values, plus one scan of that table per outer term.

use crate::error::{RampError, RampResult};
use crate::function::RampFunction;
use crate::term::RampTerm;

/// Inner function values and slopes at each of its breakpoints.
struct Knots<'a> {
    terms: &'a [RampTerm],
    /// `values[i]` is the inner function evaluated at `terms[i].breakpoint()`.
    values: Vec<f64>,
    /// `slopes[i]` is the inner slope just right of `terms[i].breakpoint()`.
    slopes: Vec<f64>,
}

/// Where an outer ramp term switches on along the inner function.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Activation {
    /// The inner function never rises above the outer breakpoint.
    Never,
    /// The inner function is above the outer breakpoint everywhere.
    Always,
    /// The inner function crosses the outer breakpoint on the segment after knot `index`.
    After { index: usize },
}

impl<'a> Knots<'a> {
    fn tabulate(inner: &'a RampFunction) -> Self {
        let terms = inner.terms();
        let mut values = Vec::with_capacity(terms.len());
        let mut slopes = Vec::with_capacity(terms.len());

        let mut value = inner.constant();
        let mut slope = 0.0;
        let mut previous: Option<f64> = None;
        for term in terms {
            if let Some(previous) = previous {
                value += slope * (term.breakpoint() - previous);
            }
            slope += term.coefficient();
            values.push(value);
            slopes.push(slope);
            previous = Some(term.breakpoint());
        }

        Self {
            terms,
            values,
            slopes,
        }
    }

    fn terminal_slope(&self) -> f64 {
        self.slopes.last().copied().unwrap_or(0.0)
    }

    fn activation(&self, threshold: f64) -> Activation {
        let first = self.values[0] - threshold;
        let last = self.values[self.values.len() - 1] - threshold;

        if last <= 0.0 && self.terminal_slope() <= 0.0 {
            Activation::Never
        } else if first > 0.0 {
            Activation::Always
        } else {
            let below = self.values.partition_point(|value| value - threshold <= 0.0);
            Activation::After { index: below - 1 }
        }
    }
}

impl RampFunction {
    /// Returns the slope right of the last breakpoint.
    #[must_use]
    pub fn terminal_slope(&self) -> f64 {
        self.terms().iter().map(RampTerm::coefficient).sum()
    }

    /// Returns `true` if the function never decreases.
    #[must_use]
    pub fn is_nondecreasing(&self) -> bool {
        self.check_nondecreasing().is_ok()
    }

    fn check_nondecreasing(&self) -> RampResult<()> {
        let mut slope = 0.0;
        for (index, term) in self.terms().iter().enumerate() {
            slope += term.coefficient();
            if slope < 0.0 {
                return Err(RampError::non_monotonic(index, slope));
            }
        }
        Ok(())
    }

    /// Composes `outer` after `self`, returning `x -> outer(self(x))`.
    ///
    /// The result is exact: it is again a constant plus a sum of ramps.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::NonMonotonicInner`] if `self` decreases anywhere,
    /// or [`RampError::Overflow`] if a composed constant, slope or crossing
    /// point is not representable as a finite number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hinge_core::RampFunction;
    ///
    /// // Clamp x to [0, 2], then pay 3 per unit above 1.
    /// let clamp = RampFunction::new(0.0, [(1.0, 0.0), (-1.0, 2.0)]).unwrap();
    /// let payoff = RampFunction::ramp(3.0, 1.0).unwrap();
    ///
    /// let h = clamp.wrap_with(&payoff).unwrap();
    /// assert_eq!(h.evaluate(0.5), 0.0);
    /// assert_eq!(h.evaluate(1.5), 1.5);
    /// assert_eq!(h.evaluate(10.0), 3.0);
    /// ```
    pub fn wrap_with(&self, outer: &RampFunction) -> RampResult<RampFunction> {
        self.check_nondecreasing()?;

        if self.is_constant() {
            return RampFunction::from_parts(
                outer.evaluate(self.constant()),
                Vec::new(),
                "composition",
            );
        }

        let knots = Knots::tabulate(self);
        let mut constant = outer.constant();
        let mut terms: Vec<RampTerm> = Vec::new();

        for outer_term in outer.terms() {
            let (scale, threshold) = (outer_term.coefficient(), outer_term.breakpoint());
            let activation = knots.activation(threshold);
            log::trace!(
                "outer ramp ({}, {}) activation: {:?}",
                scale,
                threshold,
                activation
            );

            match activation {
                Activation::Never => {}
                Activation::Always => {
                    constant += scale * (self.constant() - threshold);
                    terms.extend(knots.terms.iter().map(|term| term.scaled(scale)));
                }
                Activation::After { index } => {
                    let slope = knots.slopes[index];
                    let offset = knots.values[index] - threshold;
                    let cut = knots.terms[index].breakpoint() - offset / slope;
                    terms.push(RampTerm::new(scale * slope, cut));
                    terms.extend(knots.terms[index + 1..].iter().map(|term| term.scaled(scale)));
                }
            }
        }

        let composed = RampFunction::from_parts(constant, terms, "composition")?;
        log::debug!(
            "composed {} inner and {} outer ramp terms into {} terms",
            self.terms().len(),
            outer.terms().len(),
            composed.terms().len()
        );
        Ok(composed)
    }

    /// Returns `x -> max(self(x), 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::NonMonotonicInner`] if `self` decreases anywhere.
    pub fn floor_at_zero(&self) -> RampResult<RampFunction> {
        self.wrap_with(&RampFunction::relu())
    }
}
