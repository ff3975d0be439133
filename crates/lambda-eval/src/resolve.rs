//! Binder resolution: surface term -> nameless term
//!
//! Resolves each variable occurrence to either a de Bruijn index (the
//! lexical distance to its binder) or a free-name marker, and inlines
//! references to stored definitions. By construction the output never
//! contains a dangling bound variable.
//!
//! The scope is a persistent map cloned on each descent under a
//! binder, so shadowing needs no save/restore bookkeeping and error
//! paths cannot leave a stale binding behind.

use crate::defs::Definitions;
use crate::error::EvalError;
use crate::term::Term;
use crate::trace::StepTrace;
use lambda_core::ast;

/// Shadowing-aware binding map: parameter name -> negated depth at
/// which it was bound. A use at depth `d` of a name bound at depth `b`
/// resolves to index `d - b - 1`, the distance from occurrence to
/// binder.
pub(crate) type Scope = im::HashMap<String, i32>;

/// Resolve a surface expression against the definition store.
pub fn resolve(term: &ast::Term, defs: &Definitions) -> Term {
    Resolver::new(defs).resolve(term)
}

/// Binder-resolution pass with an optional step trace attached.
pub struct Resolver<'a> {
    defs: &'a Definitions,
    trace: Option<&'a mut dyn StepTrace>,
}

impl<'a> Resolver<'a> {
    pub fn new(defs: &'a Definitions) -> Self {
        Resolver { defs, trace: None }
    }

    pub fn with_trace(defs: &'a Definitions, trace: &'a mut dyn StepTrace) -> Self {
        Resolver {
            defs,
            trace: Some(trace),
        }
    }

    pub fn resolve(&mut self, term: &ast::Term) -> Term {
        self.resolve_at(term, &Scope::new(), 0)
    }

    fn resolve_at(&mut self, term: &ast::Term, scope: &Scope, depth: u32) -> Term {
        let resolved = match term {
            ast::Term::Var(name) => self.resolve_var(name, scope, depth),
            ast::Term::Lam { param, body } => {
                // The persistent map makes shadowing automatic: the
                // inner binding exists only in the cloned scope.
                let inner = scope.update(param.clone(), -(depth as i32));
                Term::lam(self.resolve_at(body, &inner, depth + 1))
            }
            ast::Term::App(l, r) => Term::app(
                self.resolve_at(l, scope, depth),
                self.resolve_at(r, scope, depth),
            ),
            ast::Term::Name(name) => match self.defs.get(name) {
                // Stored terms are already reduced and closed, so they
                // inline verbatim at any depth.
                Some(stored) => stored.clone(),
                None => Term::fail(EvalError::UndefinedName(name.clone())),
            },
            ast::Term::Def { name, .. } => {
                // Definitions are a top-level construct handled by the
                // evaluator; one reaching the resolver is a malformed
                // input tree.
                Term::fail(EvalError::MalformedTerm(format!(
                    "definition of {name} nested inside an expression"
                )))
            }
        };

        if let Some(trace) = self.trace.as_deref_mut() {
            trace.resolve_step(depth as usize, term, &resolved);
        }
        resolved
    }

    fn resolve_var(&self, name: &str, scope: &Scope, depth: u32) -> Term {
        match scope.get(name) {
            Some(bound_at) => {
                let index = bound_at + depth as i32 - 1;
                debug_assert!(index >= 0, "binder recorded below current depth");
                Term::bound(index as u32)
            }
            None => {
                // An unbound variable is a valid normal form, not an
                // error; mark it so the display makes the freeness
                // visible. Already-marked names pass through.
                if let Some(stripped) = name.strip_prefix('*') {
                    Term::free(format!("*{stripped}"))
                } else {
                    tracing::warn!(var = name, "variable is not bound, marking as free");
                    Term::free(format!("*{name}"))
                }
            }
        }
    }
}
