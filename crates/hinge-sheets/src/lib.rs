//! # Hinge Sheets
//!
//! Renders [`hinge_core::RampFunction`]s as spreadsheet formulas.
//!
//! Only the function's read-only constant and terms are consulted; the
//! cell reference is substituted verbatim into each clause.
//!
//! ```rust
//! use hinge_core::RampFunction;
//! use hinge_sheets::prelude::*;
//!
//! let f = RampFunction::new(1.0, [(2.0, 3.0)]).unwrap();
//! let style = FormulaStyle::default();
//!
//! assert_eq!(
//!     render_formula(&f, "A1", &style).unwrap().as_str(),
//!     "= 1 + 2 * IF(A1 > 3, A1 - 3, 0)"
//! );
//! assert_eq!(
//!     render_derivative(&f, "A1", &style).unwrap().as_str(),
//!     "= IF(A1 > 3, 2, 0)"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod formula;
pub mod style;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SheetError, SheetResult};
    pub use crate::formula::{render_composition, render_derivative, render_formula, Formula};
    pub use crate::style::FormulaStyle;
}

pub use error::{SheetError, SheetResult};
pub use formula::{render_composition, render_derivative, render_formula, Formula};
pub use style::FormulaStyle;
