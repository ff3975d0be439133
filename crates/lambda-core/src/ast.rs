//! Surface abstract syntax
//!
//! The parse tree handed to the evaluator. Binders here still carry
//! their parameter names; `lambda-eval` converts this form into a
//! nameless (de Bruijn indexed) representation before reducing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A surface term with named binders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// A use of a bound or free variable
    Var(String),
    /// Single-parameter abstraction. Multi-parameter surface syntax is
    /// desugared by the parser into nested `Lam` nodes.
    Lam { param: String, body: Box<Term> },
    /// Application, left-associative
    App(Box<Term>, Box<Term>),
    /// Reference to a previously stored definition
    Name(String),
    /// Top-level definition: binds `name` to the normal form of `body`
    Def { name: String, body: Box<Term> },
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn lam(param: impl Into<String>, body: Term) -> Self {
        Term::Lam {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn app(left: Term, right: Term) -> Self {
        Term::App(Box::new(left), Box::new(right))
    }

    pub fn name(name: impl Into<String>) -> Self {
        Term::Name(name.into())
    }

    pub fn def(name: impl Into<String>, body: Term) -> Self {
        Term::Def {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// True for the top-level-only definition form.
    pub fn is_def(&self) -> bool {
        matches!(self, Term::Def { .. })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{name}"),
            Term::Lam { param, body } => write!(f, "\\{param}. {body}"),
            Term::App(l, r) => write!(f, "({l} {r})"),
            Term::Name(name) => write!(f, "{name}"),
            Term::Def { name, body } => write!(f, "{name} = {body}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_surface_notation() {
        let term = Term::app(
            Term::lam("x", Term::lam("y", Term::var("x"))),
            Term::var("z"),
        );
        assert_eq!(term.to_string(), r"(\x. \y. x z)");
    }

    #[test]
    fn test_display_definition() {
        let def = Term::def("ID", Term::lam("x", Term::var("x")));
        assert_eq!(def.to_string(), r"ID = \x. x");
    }
}
