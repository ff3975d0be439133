//! Normal-order beta reduction
//!
//! Reduces nameless terms to full normal form: the leftmost-outermost
//! redex is contracted first, and abstraction bodies are reduced too,
//! so the output is a normal form rather than weak head normal form.
//!
//! The only termination guard is a step counter ticked on every
//! recursive call; genuinely divergent terms (the self-application
//! combinator applied to itself, say) are caught by it and nothing
//! else.

use crate::error::EvalError;
use crate::term::Term;
use crate::trace::StepTrace;

/// Default bound on reduction steps per top-level evaluation.
pub const DEFAULT_STEP_LIMIT: u32 = 999;

/// One reduction run: owns the step counter and the optional trace.
/// Ephemeral, created per top-level evaluation.
pub struct Reducer<'a> {
    steps: u32,
    limit: u32,
    trace: Option<&'a mut dyn StepTrace>,
}

impl<'a> Reducer<'a> {
    pub fn new(limit: u32) -> Self {
        Reducer {
            steps: 0,
            limit,
            trace: None,
        }
    }

    pub fn with_trace(limit: u32, trace: &'a mut dyn StepTrace) -> Self {
        Reducer {
            steps: 0,
            limit,
            trace: Some(trace),
        }
    }

    /// Steps consumed so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Reduce `term` to normal form, or to `Fail(StepLimit)` if the
    /// step bound is exceeded anywhere in the term.
    pub fn reduce(&mut self, term: &Term) -> Term {
        self.reduce_at(term, 0)
    }

    fn reduce_at(&mut self, term: &Term, depth: usize) -> Term {
        self.steps += 1;
        if self.steps > self.limit {
            tracing::debug!(limit = self.limit, "evaluation limit exceeded");
            return Term::fail(EvalError::StepLimit(self.limit));
        }

        match term {
            // Variables are terminal: a bound index refers to an
            // enclosing, not-yet-substituted binder; a free variable
            // is its own normal form.
            Term::Bound(_) | Term::Free(_) => term.clone(),
            // Absorbing.
            Term::Fail(_) => term.clone(),
            // Reduce under the binder for a full normal form. A failure
            // in the body aborts the whole evaluation rather than being
            // wrapped back up as a closed term.
            Term::Lam(body) => {
                let body = self.reduce_at(body, depth + 1);
                if body.is_fail() {
                    return body;
                }
                Term::lam(body)
            }
            Term::App(l, r) => {
                // Left fully, then right, in that order: this fixes
                // the observable step order in traces.
                let l = self.reduce_at(l, depth + 1);
                if l.is_fail() {
                    return l;
                }
                let r = self.reduce_at(r, depth + 1);
                if r.is_fail() {
                    return r;
                }
                match &l {
                    Term::Lam(body) => {
                        let contracted = body.instantiate(&r);
                        if let Some(trace) = self.trace.as_deref_mut() {
                            trace.reduce_step(depth, term, &contracted);
                        }
                        tracing::trace!(redex = %term, result = %contracted, "beta");
                        // The substituted argument may expose new
                        // redexes; keep going.
                        self.reduce_at(&contracted, depth + 1)
                    }
                    // Stuck term: an application headed by something
                    // that is not an abstraction is a valid normal
                    // form.
                    _ => Term::app(l, r),
                }
            }
        }
    }
}
