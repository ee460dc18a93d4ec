//! Property-based tests for ramp function invariants.
//!
//! These tests verify the algebraic properties that must hold for every
//! function in the family:
//! - Construction always yields canonical terms
//! - Addition is commutative and associative, with zero as identity
//! - Evaluation distributes over addition and scaling
//! - Composition agrees with pointwise `g(f(x))`

use hinge_core::prelude::*;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// Integer-valued coefficients and half-integer breakpoints keep sums exact.
fn term() -> impl Strategy<Value = (f64, f64)> {
    (-5i32..=5, -20i32..=20).prop_map(|(c, b)| (f64::from(c), f64::from(b) / 2.0))
}

fn ramp_function() -> impl Strategy<Value = RampFunction> {
    (-10i32..=10, vec(term(), 0..8))
        .prop_map(|(constant, terms)| RampFunction::new(f64::from(constant), terms).unwrap())
}

/// A nondecreasing function: nonnegative slopes on every segment.
fn nondecreasing_function() -> impl Strategy<Value = RampFunction> {
    (-10i32..=10, btree_set(-20i32..=20, 0..6), vec(0i32..=4, 6)).prop_map(
        |(constant, breakpoints, slopes)| {
            let mut previous = 0;
            let terms: Vec<(f64, f64)> = breakpoints
                .into_iter()
                .zip(slopes)
                .map(|(b, slope)| {
                    let coefficient = slope - previous;
                    previous = slope;
                    (f64::from(coefficient), f64::from(b) / 2.0)
                })
                .collect();
            RampFunction::new(f64::from(constant), terms).unwrap()
        },
    )
}

fn scalar() -> impl Strategy<Value = f64> {
    (-8i32..=8).prop_map(|s| f64::from(s) / 4.0)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn has_negative_prefix_slope(f: &RampFunction) -> bool {
    let mut slope = 0.0;
    f.terms().iter().any(|term| {
        slope += term.coefficient();
        slope < 0.0
    })
}

fn probe_points(functions: &[&RampFunction]) -> Vec<f64> {
    let grid = SampleGrid::default().with_margin(3.0).with_subdivisions(2);
    grid.points(functions.iter().flat_map(|f| f.breakpoints()))
}

// =============================================================================
// PROPERTY: CANONICAL FORM
// =============================================================================

proptest! {
    #[test]
    fn property_construction_is_canonical(f in ramp_function()) {
        for term in f.terms() {
            prop_assert!(term.coefficient() != 0.0);
        }
        for pair in f.terms().windows(2) {
            prop_assert!(pair[0].breakpoint() < pair[1].breakpoint());
        }
    }

    #[test]
    fn property_arithmetic_results_are_canonical(
        f in ramp_function(),
        g in ramp_function(),
        s in scalar(),
    ) {
        for h in [&f + &g, &f - &g, -&f, &f * s] {
            prop_assert!(h.terms().iter().all(|term| term.coefficient() != 0.0));
            prop_assert!(h
                .terms()
                .windows(2)
                .all(|pair| pair[0].breakpoint() < pair[1].breakpoint()));
        }
    }
}

// =============================================================================
// PROPERTY: ADDITIVE STRUCTURE
// =============================================================================

proptest! {
    #[test]
    fn property_additive_identity(f in ramp_function()) {
        prop_assert_eq!(&f + 0.0, f.clone());
        prop_assert_eq!(&f + &RampFunction::zero(), f);
    }

    #[test]
    fn property_additive_inverse(f in ramp_function()) {
        prop_assert!((&f + &(-&f)).is_zero());
        prop_assert!((&f - &f).is_zero());
    }

    #[test]
    fn property_addition_commutes(f in ramp_function(), g in ramp_function()) {
        prop_assert_eq!(&f + &g, &g + &f);
    }

    #[test]
    fn property_addition_associates(
        f in ramp_function(),
        g in ramp_function(),
        h in ramp_function(),
    ) {
        prop_assert_eq!((&f + &g) + &h, &f + &(&g + &h));
    }

    #[test]
    fn property_scalar_multiplication_commutes(f in ramp_function(), s in scalar()) {
        prop_assert_eq!(&f * s, s * &f);
    }

    #[test]
    fn property_in_place_matches_operators(
        f in ramp_function(),
        g in ramp_function(),
        s in scalar(),
    ) {
        let mut sum = f.clone();
        sum += &g;
        prop_assert_eq!(sum, &f + &g);

        let mut diff = f.clone();
        diff -= &g;
        prop_assert_eq!(diff, &f - &g);

        let mut scaled = f.clone();
        scaled *= s;
        prop_assert_eq!(scaled, &f * s);
    }
}

// =============================================================================
// PROPERTY: EVALUATION
// =============================================================================

proptest! {
    #[test]
    fn property_scaling_distributes_over_evaluation(
        f in ramp_function(),
        s in scalar(),
        x in -15.0f64..15.0,
    ) {
        prop_assert!(close((&f * s).evaluate(x), s * f.evaluate(x)));
    }

    #[test]
    fn property_addition_distributes_over_evaluation(
        f in ramp_function(),
        g in ramp_function(),
        x in -15.0f64..15.0,
    ) {
        prop_assert!(close((&f + &g).evaluate(x), f.evaluate(x) + g.evaluate(x)));
    }
}

// =============================================================================
// PROPERTY: COMPOSITION
// =============================================================================

proptest! {
    #[test]
    fn property_composition_matches_pointwise(
        f in nondecreasing_function(),
        g in ramp_function(),
    ) {
        let h = f.wrap_with(&g).unwrap();

        for x in probe_points(&[&f, &h]) {
            let expected = g.evaluate(f.evaluate(x));
            let actual = h.evaluate(x);
            prop_assert!(
                close(actual, expected),
                "h({}) = {} but g(f({})) = {}", x, actual, x, expected
            );
        }
    }

    #[test]
    fn property_composition_rejects_non_monotonic_base(
        f in ramp_function(),
        g in ramp_function(),
    ) {
        let result = f.wrap_with(&g);
        if has_negative_prefix_slope(&f) {
            let is_non_monotonic = matches!(result, Err(RampError::NonMonotonicInner { .. }));
            prop_assert!(is_non_monotonic);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn property_floor_at_zero(f in nondecreasing_function()) {
        let floored = f.floor_at_zero().unwrap();

        for x in probe_points(&[&f, &floored]) {
            prop_assert!(close(floored.evaluate(x), f.evaluate(x).max(0.0)));
        }
    }
}
