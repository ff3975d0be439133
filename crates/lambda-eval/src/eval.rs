//! Top-level evaluation
//!
//! Glues the passes together: binder resolution, normal-order
//! reduction, the definition store, and the recognition scan that
//! reports a result symbolically when it matches a stored definition.

use crate::defs::Definitions;
use crate::error::EvalError;
use crate::reduce::{Reducer, DEFAULT_STEP_LIMIT};
use crate::resolve::Resolver;
use crate::term::Term;
use crate::trace::StepTrace;
use lambda_core::ast;
use std::fmt;

/// Result of one top-level evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The reduced term, verbatim (possibly a `Fail`)
    Term(Term),
    /// The reduced term matched a stored definition and is reported by
    /// that name instead
    Recognized { name: String, term: Term },
}

impl Outcome {
    /// The reduced term, whether or not it was recognized.
    pub fn term(&self) -> &Term {
        match self {
            Outcome::Term(term) | Outcome::Recognized { term, .. } => term,
        }
    }

    pub fn is_fail(&self) -> bool {
        self.term().is_fail()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Term(term) => write!(f, "{term}"),
            Outcome::Recognized { name, .. } => write!(f, "{name}"),
        }
    }
}

/// The interpreter session: a definition store plus the step bound.
///
/// One term is evaluated to completion before the next begins; the
/// store is the only state carried across evaluations.
#[derive(Debug)]
pub struct Evaluator {
    defs: Definitions,
    step_limit: u32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            defs: Definitions::new(),
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    pub fn with_step_limit(step_limit: u32) -> Self {
        Evaluator {
            defs: Definitions::new(),
            step_limit,
        }
    }

    pub fn definitions(&self) -> &Definitions {
        &self.defs
    }

    pub fn step_limit(&self) -> u32 {
        self.step_limit
    }

    /// Evaluate one top-level item.
    ///
    /// A definition reduces its body to normal form and stores it
    /// under the name (rejecting duplicates). Anything else reduces
    /// directly. Either way the reduced term is then matched against
    /// the store so known results are reported by name.
    pub fn eval(&mut self, term: &ast::Term) -> Outcome {
        self.eval_inner(term, None)
    }

    /// Like [`Evaluator::eval`], with every resolution and reduction
    /// step reported to `trace`.
    pub fn eval_with_trace(&mut self, term: &ast::Term, trace: &mut dyn StepTrace) -> Outcome {
        self.eval_inner(term, Some(trace))
    }

    fn eval_inner(&mut self, term: &ast::Term, trace: Option<&mut dyn StepTrace>) -> Outcome {
        match term {
            ast::Term::Def { name, body } => {
                if self.defs.contains(name) {
                    tracing::warn!(name, "rejecting redefinition");
                    return Outcome::Term(Term::fail(EvalError::NameAlreadyDefined(
                        name.clone(),
                    )));
                }
                let reduced = self.normalize(body, trace);
                if reduced.is_fail() {
                    return Outcome::Term(reduced);
                }
                // The contains check above makes this infallible today,
                // but a refused insert must still surface as a failure.
                if let Err(err) = self.defs.define(name, reduced.clone()) {
                    return Outcome::Term(Term::fail(err));
                }
                self.recognized(reduced)
            }
            _ => {
                let reduced = self.normalize(term, trace);
                self.recognized(reduced)
            }
        }
    }

    fn normalize(&self, term: &ast::Term, trace: Option<&mut dyn StepTrace>) -> Term {
        match trace {
            Some(trace) => {
                let resolved = Resolver::with_trace(&self.defs, &mut *trace).resolve(term);
                Reducer::with_trace(self.step_limit, trace).reduce(&resolved)
            }
            None => {
                let resolved = Resolver::new(&self.defs).resolve(term);
                Reducer::new(self.step_limit).reduce(&resolved)
            }
        }
    }

    fn recognized(&self, reduced: Term) -> Outcome {
        match self.defs.recognize(&reduced) {
            Some(name) => {
                tracing::debug!(name, "result recognized as stored definition");
                Outcome::Recognized {
                    name: name.to_string(),
                    term: reduced,
                }
            }
            None => Outcome::Term(reduced),
        }
    }
}
