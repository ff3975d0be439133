//! Definition store
//!
//! Per-session mapping from definition name to its reduced nameless
//! term. Append-only per name: redefinition is rejected, never
//! overwritten, and nothing is ever deleted. `IndexMap` keeps
//! insertion order, which makes recognition deterministic
//! (earliest-defined wins when several stored terms are structurally
//! equal).

use crate::error::EvalError;
use crate::term::Term;
use indexmap::IndexMap;

/// Named, already-reduced terms. Created once per session; there is no
/// reset operation.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    entries: IndexMap<String, Term>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `term` under `name`.
    ///
    /// Fails with [`EvalError::NameAlreadyDefined`] if the name is
    /// taken, leaving the existing entry untouched.
    pub fn define(&mut self, name: &str, term: Term) -> Result<(), EvalError> {
        if self.entries.contains_key(name) {
            return Err(EvalError::NameAlreadyDefined(name.to_string()));
        }
        tracing::debug!(name, term = %term, "storing definition");
        self.entries.insert(name.to_string(), term);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.entries.iter().map(|(name, term)| (name.as_str(), term))
    }

    /// Find a stored definition structurally equal to `term`.
    ///
    /// Scans in definition order, so when several names share a normal
    /// form the earliest-defined one wins. Failed terms are never
    /// recognized.
    pub fn recognize(&self, term: &Term) -> Option<&str> {
        if term.is_fail() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, stored)| *stored == term)
            .map(|(name, _)| name.as_str())
    }
}
