//! Property-based tests for the reduction engine
//!
//! Verifies the algebraic laws of index shifting and the invariants of
//! resolution and reduction across randomized terms.

use lambda_eval::{alpha_eq, resolve, Definitions, Reducer, Term, DEFAULT_STEP_LIMIT};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Arbitrary nameless terms, including ones with loose indices (the
/// shift laws hold for those too).
fn arb_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        (0u32..6).prop_map(Term::bound),
        "[a-z]{1,4}".prop_map(|name| Term::free(format!("*{name}"))),
    ];
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Term::lam),
            (inner.clone(), inner).prop_map(|(l, r)| Term::app(l, r)),
        ]
    })
}

/// Arbitrary closed surface terms: every variable occurrence picks one
/// of the binders in scope.
fn arb_closed_surface() -> impl Strategy<Value = lambda_core::Term> {
    fn gen(depth: u32, fuel: u32) -> BoxedStrategy<lambda_core::Term> {
        let param = move |d: u32| format!("v{d}");
        if fuel == 0 {
            if depth == 0 {
                // No binder in scope yet; open with one.
                return gen(1, 0)
                    .prop_map(move |body| lambda_core::Term::lam("v0", body))
                    .boxed();
            }
            return (0..depth)
                .prop_map(move |i| lambda_core::Term::var(param(i)))
                .boxed();
        }
        let var = if depth > 0 {
            (0..depth)
                .prop_map(move |i| lambda_core::Term::var(param(i)))
                .boxed()
        } else {
            gen(depth, 0)
        };
        prop_oneof![
            var,
            gen(depth + 1, fuel - 1)
                .prop_map(move |body| lambda_core::Term::lam(param(depth), body)),
            (gen(depth, fuel - 1), gen(depth, fuel - 1))
                .prop_map(|(l, r)| lambda_core::Term::app(l, r)),
        ]
        .boxed()
    }
    gen(0, 4)
}

// ============================================================================
// Index-shift laws
// ============================================================================

proptest! {
    #[test]
    fn prop_shift_inverse(term in arb_term(), cutoff in 0u32..5) {
        // shift(shift(t, +1, c), -1, c) == t
        prop_assert_eq!(term.shift(1, cutoff).shift(-1, cutoff), term);
    }

    #[test]
    fn prop_shift_zero_is_identity(term in arb_term(), cutoff in 0u32..5) {
        prop_assert_eq!(term.shift(0, cutoff), term);
    }

    #[test]
    fn prop_shift_composes(term in arb_term(), cutoff in 0u32..5) {
        // Two single shifts equal one double shift.
        prop_assert_eq!(
            term.shift(1, cutoff).shift(1, cutoff),
            term.shift(2, cutoff)
        );
    }
}

// ============================================================================
// Resolution and reduction invariants
// ============================================================================

proptest! {
    #[test]
    fn prop_resolution_emits_no_dangling_indices(surface in arb_closed_surface()) {
        let resolved = resolve(&surface, &Definitions::new());
        prop_assert!(resolved.is_closed_at(0));
    }

    #[test]
    fn prop_alpha_eq_is_reflexive(surface in arb_closed_surface()) {
        prop_assert!(alpha_eq(&surface, &surface, &Definitions::new()));
    }

    #[test]
    fn prop_reduction_is_idempotent(surface in arb_closed_surface()) {
        let resolved = resolve(&surface, &Definitions::new());
        let once = Reducer::new(DEFAULT_STEP_LIMIT).reduce(&resolved);
        // Divergent samples hit the step limit; idempotence is a claim
        // about normal forms only.
        prop_assume!(!once.is_fail());
        let twice = Reducer::new(DEFAULT_STEP_LIMIT).reduce(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_reduction_preserves_closedness(surface in arb_closed_surface()) {
        let resolved = resolve(&surface, &Definitions::new());
        let reduced = Reducer::new(DEFAULT_STEP_LIMIT).reduce(&resolved);
        prop_assume!(!reduced.is_fail());
        prop_assert!(reduced.is_closed_at(0));
    }
}
