//! The solver entry point: wires propagation and search together.

use std::sync::Arc;

use tracing::debug;

use crate::{
    puzzle::Crossword,
    solver::{
        domains::DomainStore,
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MrvDegreeHeuristic, VariableSelectionHeuristic},
        },
        propagate::ac3,
        search::BacktrackingSearch,
        stats::SearchStats,
        Assignment,
    },
};

/// Solves one crossword: fresh domains, node consistency, AC-3, then
/// backtracking search.
///
/// Each call to [`Solver::solve`] owns its own [`DomainStore`] and
/// assignment; nothing is shared across attempts. An unsatisfiable puzzle is
/// a defined outcome (`None`), not an error.
pub struct Solver {
    crossword: Arc<Crossword>,
    search: BacktrackingSearch,
}

impl Solver {
    /// Creates a solver with the default heuristics: minimum remaining
    /// values with degree tie-break, and least-constraining value.
    pub fn new(crossword: Arc<Crossword>) -> Self {
        Self::with_heuristics(
            crossword,
            Box::new(MrvDegreeHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    pub fn with_heuristics(
        crossword: Arc<Crossword>,
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            crossword,
            search: BacktrackingSearch::new(variable_heuristic, value_heuristic),
        }
    }

    /// Finds a complete consistent assignment, or `None` if the puzzle has
    /// no solution.
    pub fn solve(&self) -> (Option<Assignment>, SearchStats) {
        let mut stats = SearchStats::default();

        let mut domains = DomainStore::new(&self.crossword);
        stats.node_consistency_removals = domains.enforce_node_consistency();

        if !ac3(&self.crossword, &mut domains, None, &mut stats) {
            debug!("propagation proved the puzzle unsatisfiable");
            return (None, stats);
        }

        // Search treats the propagated domains as read-only.
        let assignment = self.search.search(&self.crossword, &domains, &mut stats);
        debug!(
            solved = assignment.is_some(),
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            "search finished"
        );
        (assignment, stats)
    }
}
