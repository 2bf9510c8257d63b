//! Backtracking search over partial assignments.
//!
//! The search reads the propagated domains but never shrinks them; each
//! tentative extension is checked from scratch against the growing
//! assignment. That re-check is deliberately minimal — no inference during
//! search — matching the baseline contract.

use std::collections::HashSet;

use tracing::trace;

use crate::{
    puzzle::Crossword,
    solver::{
        domains::DomainStore,
        heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
        stats::SearchStats,
        Assignment,
    },
};

/// Whether the assigned words are pairwise distinct and every overlap among
/// assigned slots agrees on its shared letter.
pub fn consistent(crossword: &Crossword, assignment: &Assignment) -> bool {
    let mut seen = HashSet::with_capacity(assignment.len());
    for word in assignment.values() {
        if !seen.insert(word.as_str()) {
            return false;
        }
    }

    for (&x, word_x) in assignment {
        for (&y, word_y) in assignment {
            if x == y {
                continue;
            }
            if let Some((i, j)) = crossword.overlap(x, y) {
                if word_x.as_bytes()[i] != word_y.as_bytes()[j] {
                    return false;
                }
            }
        }
    }

    true
}

/// Depth-first search with undo, parameterized over variable- and
/// value-ordering heuristics.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Searches for a complete consistent assignment over arc-consistent
    /// domains. Returns `None` when every branch is exhausted; a partial
    /// assignment is never exposed.
    pub fn search(
        &self,
        crossword: &Crossword,
        domains: &DomainStore,
        stats: &mut SearchStats,
    ) -> Option<Assignment> {
        let mut assignment = Assignment::new();
        if self.backtrack(crossword, domains, &mut assignment, stats) {
            Some(assignment)
        } else {
            None
        }
    }

    fn backtrack(
        &self,
        crossword: &Crossword,
        domains: &DomainStore,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;

        if assignment.len() == crossword.slots().len() {
            return true;
        }

        let Some(slot) = self
            .variable_heuristic
            .select_slot(crossword, domains, assignment)
        else {
            return true;
        };

        for word in self
            .value_heuristic
            .order_values(crossword, domains, assignment, slot)
        {
            trace!(slot = %slot, word = %word, "trying");
            assignment.insert(slot, word);

            if consistent(crossword, assignment)
                && self.backtrack(crossword, domains, assignment, stats)
            {
                return true;
            }

            assignment.remove(&slot);
            stats.backtracks += 1;
        }

        false
    }
}
