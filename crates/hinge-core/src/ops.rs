//! Arithmetic on ramp functions.
//!
//! Addition, subtraction and negation of functions, plus addition and
//! multiplication by finite scalars. Every result (including the in-place
//! forms) goes back through canonicalization, so `&f - &f` is exactly the
//! zero function, and every result is checked to be finite.
//!
//! The operator forms panic on non-finite scalars and on overflow; use
//! [`RampFunction::checked_add`], [`RampFunction::checked_sub`],
//! [`RampFunction::scale`] and [`RampFunction::shift`] for checked variants.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{RampError, RampResult};
use crate::function::RampFunction;
use crate::term::RampTerm;

fn combined(
    a: &RampFunction,
    b: &RampFunction,
    sign: f64,
    operation: &'static str,
) -> RampResult<RampFunction> {
    let mut terms = Vec::with_capacity(a.terms().len() + b.terms().len());
    terms.extend_from_slice(a.terms());
    terms.extend(b.terms().iter().map(|term| term.scaled(sign)));
    RampFunction::from_parts(a.constant() + sign * b.constant(), terms, operation)
}

fn check_scale(factor: f64) -> RampResult<f64> {
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(RampError::invalid_scale(factor))
    }
}

fn check_offset(value: f64) -> RampResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RampError::invalid_offset(value))
    }
}

/// Unwraps the result of an operator that cannot return `Result`.
fn or_panic<T>(result: RampResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl RampFunction {
    /// Adds another function.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::Overflow`] if the sum is not finite.
    pub fn checked_add(&self, other: &RampFunction) -> RampResult<Self> {
        combined(self, other, 1.0, "addition")
    }

    /// Subtracts another function.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::Overflow`] if the difference is not finite.
    pub fn checked_sub(&self, other: &RampFunction) -> RampResult<Self> {
        combined(self, other, -1.0, "subtraction")
    }

    /// Multiplies the function by a scalar.
    ///
    /// Scaling by zero yields the zero function.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::InvalidScale`] if `factor` is not finite, or
    /// [`RampError::Overflow`] if the scaled function is not finite.
    pub fn scale(&self, factor: f64) -> RampResult<Self> {
        let factor = check_scale(factor)?;
        let terms = self.terms().iter().map(|term| term.scaled(factor)).collect();
        Self::from_parts(factor * self.constant(), terms, "scalar multiplication")
    }

    /// Adds a scalar to the function.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::InvalidOffset`] if `offset` is not finite, or
    /// [`RampError::Overflow`] if the shifted constant is not finite.
    pub fn shift(&self, offset: f64) -> RampResult<Self> {
        let offset = check_offset(offset)?;
        Self::from_parts(
            self.constant() + offset,
            self.terms().to_vec(),
            "scalar addition",
        )
    }
}

// ---- negation ----

impl Neg for &RampFunction {
    type Output = RampFunction;

    fn neg(self) -> RampFunction {
        let terms = self.terms().iter().map(|term| term.scaled(-1.0)).collect();
        or_panic(RampFunction::from_parts(-self.constant(), terms, "negation"))
    }
}

impl Neg for RampFunction {
    type Output = RampFunction;

    fn neg(self) -> RampFunction {
        -&self
    }
}

// ---- function + function ----

impl Add<&RampFunction> for &RampFunction {
    type Output = RampFunction;

    /// # Panics
    ///
    /// Panics if the sum overflows.
    fn add(self, rhs: &RampFunction) -> RampFunction {
        or_panic(self.checked_add(rhs))
    }
}

impl Add<RampFunction> for RampFunction {
    type Output = RampFunction;

    fn add(self, rhs: RampFunction) -> RampFunction {
        &self + &rhs
    }
}

impl Add<&RampFunction> for RampFunction {
    type Output = RampFunction;

    fn add(self, rhs: &RampFunction) -> RampFunction {
        &self + rhs
    }
}

impl Add<RampFunction> for &RampFunction {
    type Output = RampFunction;

    fn add(self, rhs: RampFunction) -> RampFunction {
        self + &rhs
    }
}

// ---- function - function ----

impl Sub<&RampFunction> for &RampFunction {
    type Output = RampFunction;

    /// # Panics
    ///
    /// Panics if the difference overflows.
    fn sub(self, rhs: &RampFunction) -> RampFunction {
        or_panic(self.checked_sub(rhs))
    }
}

impl Sub<RampFunction> for RampFunction {
    type Output = RampFunction;

    fn sub(self, rhs: RampFunction) -> RampFunction {
        &self - &rhs
    }
}

impl Sub<&RampFunction> for RampFunction {
    type Output = RampFunction;

    fn sub(self, rhs: &RampFunction) -> RampFunction {
        &self - rhs
    }
}

impl Sub<RampFunction> for &RampFunction {
    type Output = RampFunction;

    fn sub(self, rhs: RampFunction) -> RampFunction {
        self - &rhs
    }
}

// ---- scalar offsets ----

impl Add<f64> for &RampFunction {
    type Output = RampFunction;

    /// # Panics
    ///
    /// Panics if `rhs` is not finite or the result overflows.
    fn add(self, rhs: f64) -> RampFunction {
        or_panic(self.shift(rhs))
    }
}

impl Add<f64> for RampFunction {
    type Output = RampFunction;

    fn add(self, rhs: f64) -> RampFunction {
        &self + rhs
    }
}

impl Add<&RampFunction> for f64 {
    type Output = RampFunction;

    fn add(self, rhs: &RampFunction) -> RampFunction {
        rhs + self
    }
}

impl Add<RampFunction> for f64 {
    type Output = RampFunction;

    fn add(self, rhs: RampFunction) -> RampFunction {
        &rhs + self
    }
}

impl Sub<f64> for &RampFunction {
    type Output = RampFunction;

    /// # Panics
    ///
    /// Panics if `rhs` is not finite or the result overflows.
    fn sub(self, rhs: f64) -> RampFunction {
        or_panic(check_offset(rhs).and_then(|offset| self.shift(-offset)))
    }
}

impl Sub<f64> for RampFunction {
    type Output = RampFunction;

    fn sub(self, rhs: f64) -> RampFunction {
        &self - rhs
    }
}

impl Sub<&RampFunction> for f64 {
    type Output = RampFunction;

    /// Computes `self - f` as `(-f) + self`.
    fn sub(self, rhs: &RampFunction) -> RampFunction {
        -rhs + self
    }
}

impl Sub<RampFunction> for f64 {
    type Output = RampFunction;

    fn sub(self, rhs: RampFunction) -> RampFunction {
        self - &rhs
    }
}

// ---- scalar multiplication ----

impl Mul<f64> for &RampFunction {
    type Output = RampFunction;

    /// # Panics
    ///
    /// Panics if `rhs` is not finite or the result overflows.
    fn mul(self, rhs: f64) -> RampFunction {
        or_panic(self.scale(rhs))
    }
}

impl Mul<f64> for RampFunction {
    type Output = RampFunction;

    fn mul(self, rhs: f64) -> RampFunction {
        &self * rhs
    }
}

impl Mul<&RampFunction> for f64 {
    type Output = RampFunction;

    fn mul(self, rhs: &RampFunction) -> RampFunction {
        rhs * self
    }
}

impl Mul<RampFunction> for f64 {
    type Output = RampFunction;

    fn mul(self, rhs: RampFunction) -> RampFunction {
        &rhs * self
    }
}

// ---- in-place forms ----

impl AddAssign<&RampFunction> for RampFunction {
    /// # Panics
    ///
    /// Panics if the sum overflows.
    fn add_assign(&mut self, rhs: &RampFunction) {
        *self = or_panic(self.checked_add(rhs));
    }
}

impl AddAssign<RampFunction> for RampFunction {
    fn add_assign(&mut self, rhs: RampFunction) {
        *self += &rhs;
    }
}

impl AddAssign<f64> for RampFunction {
    /// # Panics
    ///
    /// Panics if `rhs` is not finite or the result overflows.
    fn add_assign(&mut self, rhs: f64) {
        *self = or_panic(self.shift(rhs));
    }
}

impl SubAssign<&RampFunction> for RampFunction {
    /// # Panics
    ///
    /// Panics if the difference overflows.
    fn sub_assign(&mut self, rhs: &RampFunction) {
        *self = or_panic(self.checked_sub(rhs));
    }
}

impl SubAssign<RampFunction> for RampFunction {
    fn sub_assign(&mut self, rhs: RampFunction) {
        *self -= &rhs;
    }
}

impl SubAssign<f64> for RampFunction {
    /// # Panics
    ///
    /// Panics if `rhs` is not finite or the result overflows.
    fn sub_assign(&mut self, rhs: f64) {
        let offset = or_panic(check_offset(rhs));
        *self += -offset;
    }
}

impl MulAssign<f64> for RampFunction {
    /// # Panics
    ///
    /// Panics if `rhs` is not finite or the result overflows.
    fn mul_assign(&mut self, rhs: f64) {
        *self = or_panic(self.scale(rhs));
    }
}

// ---- sums ----

impl Sum for RampFunction {
    fn sum<I: Iterator<Item = RampFunction>>(iter: I) -> Self {
        iter.fold(RampFunction::zero(), |acc, f| acc + f)
    }
}

impl<'a> Sum<&'a RampFunction> for RampFunction {
    fn sum<I: Iterator<Item = &'a RampFunction>>(iter: I) -> Self {
        iter.fold(RampFunction::zero(), |acc, f| acc + f)
    }
}
