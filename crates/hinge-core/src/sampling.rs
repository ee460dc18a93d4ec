//! Sample grids for inspecting ramp functions.
//!
//! A ramp function is linear between consecutive breakpoints, so it is
//! fully described by its values at the breakpoints plus one point on each
//! unbounded side. [`SampleGrid`] produces such a set of x-values, with
//! optional subdivisions for plotting.

/// Default distance sampled beyond the outermost breakpoints.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// Default number of interior points sampled between two breakpoints.
pub const DEFAULT_SUBDIVISIONS: usize = 1;

/// Configuration for sampling x-values around a set of breakpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    /// Distance sampled to the left of the first and right of the last breakpoint.
    pub margin: f64,
    /// Number of evenly spaced interior points between consecutive breakpoints.
    pub subdivisions: usize,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

impl SampleGrid {
    /// Creates a new sample grid configuration.
    #[must_use]
    pub fn new(margin: f64, subdivisions: usize) -> Self {
        Self {
            margin,
            subdivisions,
        }
    }

    /// Sets the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the number of interior subdivisions.
    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: usize) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Returns sorted, deduplicated sample points around `breakpoints`.
    ///
    /// With no breakpoints the grid is centred on zero.
    #[must_use]
    pub fn points<I>(&self, breakpoints: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut knots: Vec<f64> = breakpoints.into_iter().filter(|x| x.is_finite()).collect();
        knots.sort_by(f64::total_cmp);
        knots.dedup();
        if knots.is_empty() {
            knots.push(0.0);
        }

        let margin = self.margin.abs();
        let steps = self.subdivisions + 1;
        let mut points = Vec::with_capacity(knots.len() * steps + 2);

        points.push(knots[0] - margin);
        for pair in knots.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            points.push(lo);
            for step in 1..steps {
                points.push(lo + (hi - lo) * step as f64 / steps as f64);
            }
        }
        points.push(knots[knots.len() - 1]);
        points.push(knots[knots.len() - 1] + margin);

        points.dedup();
        points
    }
}
