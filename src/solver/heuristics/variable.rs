//! Heuristics for choosing which unassigned slot to branch on next.

use std::cmp::Reverse;

use crate::{
    puzzle::{Crossword, Slot},
    solver::{domains::DomainStore, Assignment},
};

/// A strategy for picking the next slot to assign during search.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    /// Picks an unassigned slot, or `None` when every slot is assigned.
    fn select_slot(
        &self,
        crossword: &Crossword,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Slot>;
}

/// Picks the first unassigned slot in the puzzle's stable slot order.
/// The trivial deterministic baseline.
#[derive(Debug)]
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_slot(
        &self,
        crossword: &Crossword,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Slot> {
        crossword
            .slots()
            .iter()
            .copied()
            .find(|slot| !assignment.contains_key(slot))
    }
}

/// Minimum remaining values with the degree heuristic as tie-break.
///
/// Prefers the slot with the fewest remaining candidates; among equals, the
/// one with the most neighbors. Remaining ties go to the first slot in the
/// puzzle's stable order, so selection is deterministic.
#[derive(Debug)]
pub struct MrvDegreeHeuristic;

impl VariableSelectionHeuristic for MrvDegreeHeuristic {
    fn select_slot(
        &self,
        crossword: &Crossword,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Slot> {
        crossword
            .slots()
            .iter()
            .copied()
            .filter(|slot| !assignment.contains_key(slot))
            .min_by_key(|&slot| (domains.len(slot), Reverse(crossword.neighbors(slot).len())))
    }
}
