//! Error taxonomy for evaluation
//!
//! These are deterministic given the input term and store state, so
//! there is no retry story: each one is reported once, as the result
//! of the evaluation that produced it (see [`crate::term::Term::Fail`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can surface from resolution or reduction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum EvalError {
    /// A `NAME` reference with no stored definition
    #[error("name {0} is not defined")]
    UndefinedName(String),

    /// A definition reusing a name already in the store
    #[error("name {0} is already defined")]
    NameAlreadyDefined(String),

    /// The reduction step counter ran past its bound; the term most
    /// likely diverges under beta reduction
    #[error("evaluation limit exceeded after {0} steps")]
    StepLimit(u32),

    /// A surface construct reached a phase that cannot handle it
    /// (e.g. a definition nested inside an expression)
    #[error("malformed term: {0}")]
    MalformedTerm(String),
}
