//! Step tracing hook
//!
//! Optional observer for resolution and reduction steps, used by the
//! REPL's `:s` command. Disabled by default; implementations must not
//! influence results, only record them.

use crate::term::Term;
use lambda_core::ast;
use std::fmt;

/// Sink for evaluation steps.
///
/// `depth` is the nesting depth at which the step happened (how many
/// recursive descents deep the engine was), which the CLI uses for
/// indentation.
pub trait StepTrace {
    /// A surface node was resolved into its nameless form.
    fn resolve_step(&mut self, depth: usize, surface: &ast::Term, resolved: &Term);

    /// A redex was contracted: `before` rewrote to `after`.
    fn reduce_step(&mut self, depth: usize, before: &Term, after: &Term);
}

/// A recorded step, for [`StepLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Resolve {
        depth: usize,
        surface: String,
        resolved: String,
    },
    Reduce {
        depth: usize,
        before: String,
        after: String,
    },
}

impl Step {
    pub fn depth(&self) -> usize {
        match self {
            Step::Resolve { depth, .. } | Step::Reduce { depth, .. } => *depth,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Resolve {
                surface, resolved, ..
            } => write!(f, "{surface} => {resolved}"),
            Step::Reduce { before, after, .. } => write!(f, "{before} => {after}"),
        }
    }
}

/// Vec-backed [`StepTrace`] that renders terms eagerly.
#[derive(Debug, Default)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl StepTrace for StepLog {
    fn resolve_step(&mut self, depth: usize, surface: &ast::Term, resolved: &Term) {
        self.steps.push(Step::Resolve {
            depth,
            surface: surface.to_string(),
            resolved: resolved.to_string(),
        });
    }

    fn reduce_step(&mut self, depth: usize, before: &Term, after: &Term) {
        self.steps.push(Step::Reduce {
            depth,
            before: before.to_string(),
            after: after.to_string(),
        });
    }
}
