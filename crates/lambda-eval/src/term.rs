//! Nameless term representation
//!
//! The internal form produced by binder resolution. Uses de Bruijn
//! indices for bound variables (0 = innermost binder), so substitution
//! is pure index arithmetic and alpha-equivalence is structural
//! equality.

use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A scope-independent term. Binders carry no parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Bound variable: lexical distance to its binder
    Bound(u32),
    /// Variable with no enclosing binder; never substituted
    Free(String),
    /// Single-argument abstraction
    Lam(Arc<Term>),
    /// Application pending reduction
    App(Arc<Term>, Arc<Term>),
    /// Terminal error marker, absorbing under every structural
    /// operation (shift, instantiate, comparison)
    Fail(EvalError),
}

impl Term {
    pub fn bound(index: u32) -> Self {
        Term::Bound(index)
    }

    pub fn free(name: impl Into<String>) -> Self {
        Term::Free(name.into())
    }

    pub fn lam(body: Term) -> Self {
        Term::Lam(Arc::new(body))
    }

    pub fn app(left: Term, right: Term) -> Self {
        Term::App(Arc::new(left), Arc::new(right))
    }

    pub fn fail(error: EvalError) -> Self {
        Term::Fail(error)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Term::Fail(_))
    }

    /// The error carried by a `Fail` term, if any.
    pub fn as_fail(&self) -> Option<&EvalError> {
        match self {
            Term::Fail(err) => Some(err),
            _ => None,
        }
    }

    /// Add `delta` to every `Bound(i)` with `i >= cutoff`.
    ///
    /// The cutoff grows by one under each binder, so indices pointing
    /// at binders inside the shifted term are left alone. This is the
    /// renumbering that keeps substituted terms capture-free when they
    /// are spliced under additional (or fewer) binders.
    #[must_use]
    pub fn shift(&self, delta: i32, cutoff: u32) -> Term {
        match self {
            Term::Bound(i) if *i >= cutoff => {
                // Well-formed inputs never shift an index below zero;
                // clamp instead of wrapping if one ever does.
                let shifted = i64::from(*i) + i64::from(delta);
                Term::Bound(shifted.max(0) as u32)
            }
            Term::Bound(_) | Term::Free(_) | Term::Fail(_) => self.clone(),
            Term::Lam(body) => Term::lam(body.shift(delta, cutoff + 1)),
            Term::App(l, r) => Term::app(l.shift(delta, cutoff), r.shift(delta, cutoff)),
        }
    }

    /// Substitute `Bound(0)` with `arg`, contracting one binder.
    ///
    /// `arg` is lifted by the depth at which it lands (it crosses that
    /// many binder boundaries on its way in), and indices above the
    /// substitution point are decremented to account for the binder
    /// that just disappeared.
    #[must_use]
    pub fn instantiate(&self, arg: &Term) -> Term {
        self.instantiate_at(arg, 0)
    }

    fn instantiate_at(&self, arg: &Term, depth: u32) -> Term {
        match self {
            Term::Bound(i) => {
                use std::cmp::Ordering;
                match i.cmp(&depth) {
                    Ordering::Equal => arg.shift(depth as i32, 0),
                    Ordering::Greater => Term::Bound(i - 1),
                    Ordering::Less => Term::Bound(*i),
                }
            }
            Term::Free(_) | Term::Fail(_) => self.clone(),
            Term::Lam(body) => Term::lam(body.instantiate_at(arg, depth + 1)),
            Term::App(l, r) => Term::app(
                l.instantiate_at(arg, depth),
                r.instantiate_at(arg, depth),
            ),
        }
    }

    /// True if the term contains no `Bound(i)` with `i >= depth`.
    ///
    /// Binder resolution only ever emits closed terms (`depth == 0`);
    /// this is used by debug assertions and tests.
    pub fn is_closed_at(&self, depth: u32) -> bool {
        match self {
            Term::Bound(i) => *i < depth,
            Term::Free(_) | Term::Fail(_) => true,
            Term::Lam(body) => body.is_closed_at(depth + 1),
            Term::App(l, r) => l.is_closed_at(depth) && r.is_closed_at(depth),
        }
    }
}

/// Bracket notation: abstraction as `[body]`, application as
/// `(left right)`, bound variables as their index, free variables by
/// name.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Bound(i) => write!(f, "{i}"),
            Term::Free(name) => write!(f, "{name}"),
            Term::Lam(body) => write!(f, "[{body}]"),
            Term::App(l, r) => write!(f, "({l} {r})"),
            Term::Fail(err) => write!(f, "<error: {err}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_respects_cutoff() {
        assert_eq!(Term::bound(0).shift(1, 0), Term::bound(1));
        assert_eq!(Term::bound(0).shift(1, 1), Term::bound(0));
        assert_eq!(Term::bound(2).shift(3, 1), Term::bound(5));
    }

    #[test]
    fn test_shift_cutoff_grows_under_binders() {
        // [0] is closed: the index points at the enclosing binder.
        let id = Term::lam(Term::bound(0));
        assert_eq!(id.shift(1, 0), id);

        // [1] reaches past its binder, so it moves.
        let open = Term::lam(Term::bound(1));
        assert_eq!(open.shift(1, 0), Term::lam(Term::bound(2)));
    }

    #[test]
    fn test_shift_inverse_unit() {
        let term = Term::app(
            Term::lam(Term::app(Term::bound(0), Term::bound(1))),
            Term::free("*y"),
        );
        assert_eq!(term.shift(1, 0).shift(-1, 0), term);
    }

    #[test]
    fn test_instantiate_boundaries() {
        let val = Term::free("*v");
        // The index at the substitution depth is replaced ...
        assert_eq!(Term::bound(0).instantiate(&val), val);
        // ... indices above it move down past the vanished binder ...
        assert_eq!(Term::bound(1).instantiate(&val), Term::bound(0));
        assert_eq!(Term::bound(2).instantiate(&val), Term::bound(1));
        // ... and inner binders are untouched.
        let id = Term::lam(Term::bound(0));
        assert_eq!(id.instantiate(&val), id);
    }

    #[test]
    fn test_instantiate_lifts_argument_under_binders() {
        // [1] refers to the variable being substituted; the argument
        // must be lifted by one as it crosses the binder.
        let body = Term::lam(Term::bound(1));
        let arg = Term::bound(0);
        assert_eq!(body.instantiate(&arg), Term::lam(Term::bound(1)));
    }

    #[test]
    fn test_fail_is_absorbing() {
        let fail = Term::fail(EvalError::StepLimit(999));
        assert_eq!(fail.shift(5, 0), fail);
        assert_eq!(fail.instantiate(&Term::bound(0)), fail);
        assert_eq!(Term::lam(fail.clone()).shift(1, 0), Term::lam(fail));
    }

    #[test]
    fn test_display_bracket_notation() {
        let term = Term::app(
            Term::lam(Term::lam(Term::bound(1))),
            Term::free("*y"),
        );
        assert_eq!(term.to_string(), "([[1]] *y)");
    }

    #[test]
    fn test_is_closed_at() {
        assert!(Term::lam(Term::bound(0)).is_closed_at(0));
        assert!(!Term::lam(Term::bound(1)).is_closed_at(0));
        assert!(Term::free("x").is_closed_at(0));
    }
}
