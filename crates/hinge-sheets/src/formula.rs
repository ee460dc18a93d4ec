//! Spreadsheet formula rendering.
//!
//! A ramp function renders as a sum of conditional clauses over a single
//! cell reference:
//!
//! ```text
//! = 1 + 2 * IF(A1 > 3, A1 - 3, 0) - 4 * IF(A1 > 5, A1 - 5, 0)
//! ```
//!
//! The constant comes first and is omitted when zero. Clauses follow in
//! ascending breakpoint order; every clause after the first piece is
//! joined with `+` or `-` according to the sign of its coefficient.
//! The derivative renders as one `IF(ref > breakpoint, coefficient, 0)`
//! clause per term.

use std::fmt;

use hinge_core::{RampFunction, RampTerm};

use crate::error::{SheetError, SheetResult};
use crate::style::FormulaStyle;

/// A rendered spreadsheet formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    text: String,
}

impl Formula {
    /// Returns the formula text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the formula, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Formula {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

fn check_reference(reference: &str) -> SheetResult<()> {
    if reference.is_empty() {
        return Err(SheetError::invalid_reference(reference, "must not be empty"));
    }
    if reference.chars().any(char::is_whitespace) {
        return Err(SheetError::invalid_reference(
            reference,
            "must not contain whitespace",
        ));
    }
    Ok(())
}

fn finish(parts: Vec<String>, style: &FormulaStyle) -> Formula {
    let body = if parts.is_empty() {
        style.number(0.0)
    } else {
        parts.join(" ")
    };
    let text = if style.leading_equals {
        format!("= {body}")
    } else {
        body
    };
    Formula { text }
}

fn ramp_clause(term: &RampTerm, reference: &str, style: &FormulaStyle, magnitude: f64) -> String {
    let breakpoint = style.number(term.breakpoint());
    format!(
        "{} * IF({reference} > {breakpoint}, {reference} - {breakpoint}, 0)",
        style.number(magnitude)
    )
}

/// Renders `f` as a spreadsheet formula over the cell `reference`.
///
/// # Errors
///
/// Returns [`SheetError::InvalidReference`] if `reference` is empty or
/// contains whitespace.
///
/// # Example
///
/// ```rust
/// use hinge_core::RampFunction;
/// use hinge_sheets::{render_formula, FormulaStyle};
///
/// let f = RampFunction::new(1.0, [(2.0, 3.0), (-4.0, 5.0)]).unwrap();
/// let formula = render_formula(&f, "B2", &FormulaStyle::default()).unwrap();
/// assert_eq!(
///     formula.as_str(),
///     "= 1 + 2 * IF(B2 > 3, B2 - 3, 0) - 4 * IF(B2 > 5, B2 - 5, 0)"
/// );
/// ```
pub fn render_formula(
    f: &RampFunction,
    reference: &str,
    style: &FormulaStyle,
) -> SheetResult<Formula> {
    check_reference(reference)?;

    let mut parts = Vec::with_capacity(f.terms().len() + 1);
    if f.constant() != 0.0 {
        parts.push(style.number(f.constant()));
    }
    for term in f.terms() {
        let clause = if parts.is_empty() {
            ramp_clause(term, reference, style, term.coefficient())
        } else if term.coefficient() < 0.0 {
            format!("- {}", ramp_clause(term, reference, style, -term.coefficient()))
        } else {
            format!("+ {}", ramp_clause(term, reference, style, term.coefficient()))
        };
        parts.push(clause);
    }

    log::trace!("rendered {} formula clauses for {}", parts.len(), reference);
    Ok(finish(parts, style))
}

/// Renders the derivative of `f` as a spreadsheet formula over `reference`.
///
/// # Errors
///
/// Returns [`SheetError::InvalidReference`] if `reference` is empty or
/// contains whitespace.
pub fn render_derivative(
    f: &RampFunction,
    reference: &str,
    style: &FormulaStyle,
) -> SheetResult<Formula> {
    check_reference(reference)?;

    let clauses: Vec<String> = f
        .terms()
        .iter()
        .map(|term| {
            format!(
                "IF({reference} > {}, {}, 0)",
                style.number(term.breakpoint()),
                style.number(term.coefficient())
            )
        })
        .collect();
    let parts = if clauses.is_empty() {
        Vec::new()
    } else {
        vec![clauses.join(" + ")]
    };

    Ok(finish(parts, style))
}

/// Renders `outer(inner(reference))` as a single formula.
///
/// # Errors
///
/// Returns [`SheetError::Ramp`] if `inner` is not nondecreasing, or
/// [`SheetError::InvalidReference`] for a malformed reference.
pub fn render_composition(
    inner: &RampFunction,
    outer: &RampFunction,
    reference: &str,
    style: &FormulaStyle,
) -> SheetResult<Formula> {
    let composed = inner.wrap_with(outer)?;
    render_formula(&composed, reference, style)
}
