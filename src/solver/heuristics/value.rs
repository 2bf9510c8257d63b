//! Heuristics for ordering a slot's candidate words during search.

use crate::{
    puzzle::{Crossword, Slot},
    solver::{domains::DomainStore, Assignment},
};

/// A strategy for the order in which a slot's candidates are tried.
pub trait ValueOrderingHeuristic: std::fmt::Debug {
    fn order_values(
        &self,
        crossword: &Crossword,
        domains: &DomainStore,
        assignment: &Assignment,
        slot: Slot,
    ) -> Vec<String>;
}

/// Yields candidates in the domain's own enumeration order.
#[derive(Debug)]
pub struct IdentityHeuristic;

impl ValueOrderingHeuristic for IdentityHeuristic {
    fn order_values(
        &self,
        _crossword: &Crossword,
        domains: &DomainStore,
        _assignment: &Assignment,
        slot: Slot,
    ) -> Vec<String> {
        domains.domain(slot).iter().cloned().collect()
    }
}

/// Least-constraining value: candidates ascending by how many words they
/// would rule out across unassigned neighboring slots.
///
/// A candidate's count sums, over each unassigned neighbor, the number of
/// that neighbor's domain words different from the candidate. The candidate
/// itself is deliberately not excluded from the neighbor's count; that
/// matches the literal heuristic definition and only affects search order,
/// never which solutions exist. Equal counts are broken lexically so runs
/// are reproducible.
#[derive(Debug)]
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        crossword: &Crossword,
        domains: &DomainStore,
        assignment: &Assignment,
        slot: Slot,
    ) -> Vec<String> {
        let mut scored: Vec<(String, usize)> = domains
            .domain(slot)
            .iter()
            .map(|candidate| {
                let ruled_out: usize = crossword
                    .neighbors(slot)
                    .iter()
                    .filter(|neighbor| !assignment.contains_key(*neighbor))
                    .map(|&neighbor| {
                        domains
                            .domain(neighbor)
                            .iter()
                            .filter(|word| word.as_str() != candidate.as_str())
                            .count()
                    })
                    .sum();
                (candidate.clone(), ruled_out)
            })
            .collect();

        scored.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        scored.into_iter().map(|(word, _)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{IdentityHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic};
    use crate::{
        puzzle::{Crossword, Direction, Slot},
        solver::{domains::DomainStore, Assignment},
    };

    const CROSS: &str = "___\n#_#\n#_#";

    #[test]
    fn identity_yields_the_whole_domain() {
        let crossword = Crossword::parse(CROSS, "CAT\nART\nTIE").unwrap();
        let mut domains = DomainStore::new(&crossword);
        domains.enforce_node_consistency();
        let across = Slot::new(0, 0, Direction::Across, 3);

        let mut values =
            IdentityHeuristic.order_values(&crossword, &domains, &Assignment::new(), across);
        values.sort();
        assert_eq!(values, vec!["ART", "CAT", "TIE"]);
    }

    #[test]
    fn lcv_prefers_the_candidate_ruling_out_fewest_neighbor_words() {
        // After ART is pruned from the across domain, the down candidates
        // CAT and TIE each match one remaining across word and so count one
        // ruled-out word; ART matches none and counts two. Equal counts
        // order lexically.
        let crossword = Crossword::parse(CROSS, "CAT\nART\nTIE").unwrap();
        let mut domains = DomainStore::new(&crossword);
        domains.enforce_node_consistency();
        let across = Slot::new(0, 0, Direction::Across, 3);
        let down = Slot::new(0, 1, Direction::Down, 3);
        domains.remove(across, "ART");

        let values = LeastConstrainingValueHeuristic.order_values(
            &crossword,
            &domains,
            &Assignment::new(),
            down,
        );
        assert_eq!(values, vec!["CAT", "TIE", "ART"]);
    }

    #[test]
    fn lcv_ignores_assigned_neighbors() {
        let crossword = Crossword::parse(CROSS, "CAT\nART\nTIE").unwrap();
        let mut domains = DomainStore::new(&crossword);
        domains.enforce_node_consistency();
        let across = Slot::new(0, 0, Direction::Across, 3);
        let down = Slot::new(0, 1, Direction::Down, 3);

        let mut assignment = Assignment::new();
        assignment.insert(across, "CAT".to_string());

        // With its only neighbor assigned, every candidate counts zero and
        // the lexical tie-break orders the result.
        let values = LeastConstrainingValueHeuristic.order_values(
            &crossword,
            &domains,
            &assignment,
            down,
        );
        assert_eq!(values, vec!["ART", "CAT", "TIE"]);
    }
}
