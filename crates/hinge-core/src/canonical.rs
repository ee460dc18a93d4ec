//! Canonical form of a ramp term sequence.
//!
//! A canonical sequence is sorted by strictly increasing breakpoint, holds
//! at most one term per breakpoint and never holds a zero coefficient.
//! Every constructor and every operator funnels its terms through
//! [`canonicalize`], so two functions that agree everywhere compare equal.

use crate::term::RampTerm;

/// Sorts, merges and prunes a term sequence into canonical form.
///
/// Terms sharing a breakpoint are merged by summing their coefficients in
/// input order. Groups whose summed coefficient is exactly zero are
/// dropped. `-0.0` breakpoints are stored as `0.0`.
pub(crate) fn canonicalize(mut terms: Vec<RampTerm>) -> Vec<RampTerm> {
    let input_len = terms.len();

    // Stable sort keeps summation order within a group deterministic.
    terms.sort_by(|a, b| a.breakpoint().total_cmp(&b.breakpoint()));

    let mut merged: Vec<RampTerm> = Vec::with_capacity(terms.len());
    for term in terms {
        let breakpoint = term.breakpoint() + 0.0;
        match merged.last_mut() {
            Some(last) if last.breakpoint() == breakpoint => {
                *last = RampTerm::new(last.coefficient() + term.coefficient(), breakpoint);
            }
            _ => merged.push(RampTerm::new(term.coefficient(), breakpoint)),
        }
    }
    merged.retain(|term| term.coefficient() != 0.0);

    if merged.len() != input_len {
        log::trace!(
            "canonicalized {} ramp terms into {}",
            input_len,
            merged.len()
        );
    }
    merged
}

/// Returns `true` if `terms` already satisfies the canonical invariants.
pub(crate) fn is_canonical(terms: &[RampTerm]) -> bool {
    terms.iter().all(|term| term.coefficient() != 0.0)
        && terms
            .windows(2)
            .all(|pair| pair[0].breakpoint() < pair[1].breakpoint())
}
