//! Solver registry
//!
//! Maps a [`ProblemKind`] to the [`Solver`] that parses, solves and judges fixtures of that kind. The registry is
//! an ordinary value: the CLI builds one at startup with [`Registry::with_builtin_problems`] and hands it to the
//! runner by reference.
//!
//! ## Adding a problem kind
//!
//! 1. Add a [`ProblemId`] variant and its row in `leetrun_core::problems::PROBLEMS`.
//! 2. Add the algorithm under `leetrun_core::algorithms`.
//! 3. Add a module under `crate::problem` exporting a `SOLVER` and wire it into [`builtin_solver`].

use std::collections::HashMap;

use leetrun_core::problems::{self, PROBLEMS, ProblemId};

use crate::config::ArrayParseMode;
use crate::errors::HarnessResult;
use crate::problem::{self, Comparison, Expected, ProblemInput, ProblemKind, SolveOutput};

pub type ParseInputFn = fn(&str, ArrayParseMode) -> HarnessResult<ProblemInput>;
pub type ParseExpectedFn = fn(&str, ArrayParseMode) -> HarnessResult<Expected>;
pub type SolveFn = fn(&ProblemInput) -> HarnessResult<SolveOutput>;
pub type CompareFn = fn(&Expected, &SolveOutput) -> Comparison;

/// Everything the runner needs to handle one problem kind.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    /// Canonical kind name, used in diagnostics.
    pub name: &'static str,
    /// Reads the kind's parameters from the text after `Input:`.
    pub parse_input: ParseInputFn,
    /// Reads the expected result from the text after `Output:`.
    pub parse_expected: ParseExpectedFn,
    pub solve: SolveFn,
    pub compare: CompareFn,
}

/// The solver implementing a built-in problem.
pub fn builtin_solver(id: ProblemId) -> Solver {
    match id {
        ProblemId::MergeArray => problem::merge_array::SOLVER,
        ProblemId::TwoSum => problem::two_sum::SOLVER,
        ProblemId::RemoveElement => problem::remove_element::SOLVER,
    }
}

/// Solver factory keyed by kind name; accepts canonical spellings and aliases.
pub fn solver_for(kind: &ProblemKind) -> Option<Solver> {
    problems::from_str(kind.as_str()).map(builtin_solver)
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    solvers: HashMap<ProblemKind, Solver>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in problem under its canonical name and each of its aliases.
    pub fn with_builtin_problems() -> Self {
        let mut registry = Self::new();
        for info in PROBLEMS {
            for name in std::iter::once(info.canonical).chain(info.aliases.iter().copied()) {
                let kind = ProblemKind::from(name);
                let Some(solver) = solver_for(&kind) else {
                    continue;
                };
                tracing::debug!(kind = %kind, solver = solver.name, "registered solver");
                registry.register(kind, solver);
            }
        }
        registry
    }

    /// Bind `solver` to `kind`, returning the binding it replaced.
    pub fn register(&mut self, kind: impl Into<ProblemKind>, solver: Solver) -> Option<Solver> {
        self.solvers.insert(kind.into(), solver)
    }

    pub fn lookup(&self, kind: &ProblemKind) -> Option<&Solver> {
        self.solvers.get(kind)
    }

    /// Registered kinds in name order.
    pub fn kinds(&self) -> Vec<&ProblemKind> {
        let mut kinds: Vec<_> = self.solvers.keys().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_covers_vocabulary() {
        let registry = Registry::with_builtin_problems();
        for info in PROBLEMS {
            let solver = registry.lookup(&ProblemKind::from(info.canonical)).unwrap();
            assert_eq!(solver.name, info.canonical);
            for alias in info.aliases {
                assert_eq!(registry.lookup(&ProblemKind::from(*alias)).unwrap().name, info.canonical);
            }
        }
    }

    #[test]
    fn test_kinds_are_sorted() {
        let registry = Registry::with_builtin_problems();
        let kinds: Vec<&str> = registry.kinds().into_iter().map(ProblemKind::as_str).collect();
        let mut sorted = kinds.clone();
        sorted.sort_unstable();
        assert_eq!(kinds, sorted);
        assert!(kinds.contains(&"two_sum"));
    }

    #[test]
    fn test_lookup_unknown_kind() {
        let registry = Registry::with_builtin_problems();
        assert!(registry.lookup(&ProblemKind::from("three_sum")).is_none());
        assert!(solver_for(&ProblemKind::from("three_sum")).is_none());
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.register("custom", builtin_solver(ProblemId::TwoSum)).is_none());
        let previous = registry.register("custom", builtin_solver(ProblemId::MergeArray)).unwrap();
        assert_eq!(previous.name, "two_sum");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(&ProblemKind::from("custom")).unwrap().name, "merge_array");
    }

    #[test]
    fn test_solver_for_accepts_alias() {
        let solver = solver_for(&ProblemKind::from("merge_sorted_array")).unwrap();
        assert_eq!(solver.name, "merge_array");
    }
}
