//! Formula rendering configuration.

/// Configuration for how formulas are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaStyle {
    /// Emit the leading `=` that marks a spreadsheet cell as a formula.
    pub leading_equals: bool,
    /// Fixed number of decimals for printed numbers; shortest form when `None`.
    pub precision: Option<usize>,
}

impl Default for FormulaStyle {
    fn default() -> Self {
        Self {
            leading_equals: true,
            precision: None,
        }
    }
}

impl FormulaStyle {
    /// Creates a new formula style.
    #[must_use]
    pub fn new(leading_equals: bool, precision: Option<usize>) -> Self {
        Self {
            leading_equals,
            precision,
        }
    }

    /// Sets whether the leading `=` is emitted.
    #[must_use]
    pub fn with_leading_equals(mut self, leading_equals: bool) -> Self {
        self.leading_equals = leading_equals;
        self
    }

    /// Prints numbers with a fixed number of decimals.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Formats a number according to the configured precision.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        match self.precision {
            Some(decimals) => format!("{value:.decimals$}"),
            None => value.to_string(),
        }
    }
}
