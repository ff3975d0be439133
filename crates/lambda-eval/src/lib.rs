//! Reduction engine for the lambda interpreter
//!
//! Takes the surface terms produced by `lambda-core` and reduces them
//! to normal form:
//!
//! - [`term`]: the nameless (de Bruijn indexed) term model with the
//!   index-shifting substitution primitives.
//! - [`resolve`]: binder resolution from surface to nameless form,
//!   inlining stored definitions.
//! - [`reduce`]: normal-order beta reduction with a step-count guard.
//! - [`defs`]: the append-only definition store and the recognition
//!   scan that reports results symbolically.
//! - [`equiv`]: alpha-equivalence via structural comparison of
//!   nameless forms.
//! - [`trace`]: the optional step-trace hook used by the REPL's `:s`
//!   command.
//!
//! Everything is single-threaded and synchronous; the definition
//! store is the only state shared between evaluations.

pub mod defs;
pub mod equiv;
pub mod error;
pub mod eval;
pub mod reduce;
pub mod resolve;
pub mod term;
pub mod trace;

pub use defs::Definitions;
pub use equiv::alpha_eq;
pub use error::EvalError;
pub use eval::{Evaluator, Outcome};
pub use reduce::{Reducer, DEFAULT_STEP_LIMIT};
pub use resolve::{resolve, Resolver};
pub use term::Term;
pub use trace::{Step, StepLog, StepTrace};
