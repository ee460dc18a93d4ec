//! # Hinge Core
//!
//! Exact piecewise-linear functions built from ramps.
//!
//! A [`RampFunction`] is a constant plus a sum of ramp ("hinge") terms
//! `coefficient * max(x - breakpoint, 0)`. The family is closed under:
//!
//! - **Arithmetic**: `+`, `-`, unary `-` and multiplication by scalars
//! - **Evaluation**: [`RampFunction::evaluate`] and [`RampFunction::slope_at`]
//! - **Composition**: [`RampFunction::wrap_with`] builds `g(f(x))` for a
//!   nondecreasing `f`, with [`RampFunction::floor_at_zero`] as the common case
//!
//! No operation approximates: cost and payoff curves combined through this
//! crate stay exactly representable, and read-only access to the constant
//! and terms lets external renderers reproduce them.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::prelude::*;
//!
//! let cost = RampFunction::new(1.0, [(2.0, 3.0), (4.0, 5.0)]).unwrap();
//! let rebate = RampFunction::ramp(-1.0, 4.0).unwrap();
//!
//! let net = &cost + &rebate;
//! assert_eq!(net.evaluate(10.0), 35.0 - 6.0);
//!
//! let floored = (net - 20.0).floor_at_zero().unwrap();
//! assert_eq!(floored.evaluate(0.0), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

mod canonical;
mod compose;
pub mod error;
mod function;
mod ops;
pub mod sampling;
mod term;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RampError, RampResult};
    pub use crate::function::RampFunction;
    pub use crate::sampling::SampleGrid;
    pub use crate::term::RampTerm;
}

pub use error::{RampError, RampResult};
pub use function::RampFunction;
pub use sampling::SampleGrid;
pub use term::RampTerm;
