//! Alpha-equivalence
//!
//! Two terms are alpha-equivalent iff their nameless forms are
//! structurally identical: binder resolution erases binder spelling,
//! so a plain `==` on the index forms is the whole comparison. No
//! reduction happens here; callers comparing for semantic equality
//! must reduce both sides first.

use crate::defs::Definitions;
use crate::resolve::resolve;
use lambda_core::ast;

/// Compare two surface terms up to consistent renaming of bound
/// variables. Each side is resolved with a fresh scope against the
/// same definition store.
pub fn alpha_eq(a: &ast::Term, b: &ast::Term, defs: &Definitions) -> bool {
    resolve(a, defs) == resolve(b, defs)
}
