//! Arc-consistency propagation over the binary overlap constraints (AC-3).

use tracing::{debug, trace};

use crate::{
    puzzle::{Crossword, Slot},
    solver::{domains::DomainStore, stats::SearchStats, work_list::WorkList},
};

/// Makes `x` arc consistent with `y`: removes from `x`'s domain every word
/// with no supporting word in `y`'s domain at the overlap position.
///
/// Returns whether any word was removed. Slots with no overlap revise to no
/// change.
pub fn revise(
    crossword: &Crossword,
    domains: &mut DomainStore,
    x: Slot,
    y: Slot,
    stats: &mut SearchStats,
) -> bool {
    stats.revise_calls += 1;

    let Some((i, j)) = crossword.overlap(x, y) else {
        return false;
    };

    // Cheap structural snapshot; we iterate it while shrinking the live set.
    let candidates = domains.domain(x).clone();
    let mut revised = false;

    for word_x in candidates.iter() {
        let shared = word_x.as_bytes()[i];
        let supported = domains
            .domain(y)
            .iter()
            .any(|word_y| word_y.as_bytes()[j] == shared);
        if !supported {
            trace!(slot = %x, word = %word_x, against = %y, "pruned");
            domains.remove(x, word_x);
            stats.words_pruned += 1;
            revised = true;
        }
    }

    if revised {
        stats.prunings += 1;
    }
    revised
}

/// Runs AC-3 to a fixed point, shrinking domains in place.
///
/// The worklist is seeded from `arcs` when given, otherwise from every
/// ordered pair of intersecting slots. Returns `false` as soon as some
/// domain empties, meaning the puzzle is unsatisfiable; `true` once the
/// worklist drains. Re-running on arc-consistent domains removes nothing.
pub fn ac3(
    crossword: &Crossword,
    domains: &mut DomainStore,
    arcs: Option<Vec<(Slot, Slot)>>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    match arcs {
        Some(arcs) => {
            for (x, y) in arcs {
                worklist.push_back(x, y);
            }
        }
        None => {
            for (x, y) in crossword.arcs() {
                worklist.push_back(x, y);
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        if revise(crossword, domains, x, y, stats) {
            if domains.is_empty(x) {
                debug!(slot = %x, "domain emptied, puzzle unsatisfiable");
                return false;
            }
            // x shrank: consistency of its other neighbors with x may no
            // longer hold.
            for &z in crossword.neighbors(x) {
                if z != y {
                    worklist.push_back(z, x);
                }
            }
        }
    }

    debug!("arc consistency established");
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ac3, revise};
    use crate::{
        puzzle::{Crossword, Direction, Slot},
        solver::{domains::DomainStore, stats::SearchStats},
    };

    // One across slot of length 3 and one down slot of length 3, crossing
    // at across index 1 / down index 0.
    const CROSS: &str = "___\n#_#\n#_#";

    fn cross_slots() -> (Slot, Slot) {
        (
            Slot::new(0, 0, Direction::Across, 3),
            Slot::new(0, 1, Direction::Down, 3),
        )
    }

    fn prepared(words: &str) -> (Crossword, DomainStore) {
        let crossword = Crossword::parse(CROSS, words).unwrap();
        let mut domains = DomainStore::new(&crossword);
        domains.enforce_node_consistency();
        (crossword, domains)
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let (crossword, mut domains) = prepared("CAT\nART\nTIE");
        let (across, down) = cross_slots();
        let mut stats = SearchStats::default();

        // A down word's first letter needs support among the across words'
        // middle letters {A, R, I}: only ART survives.
        let revised = revise(&crossword, &mut domains, down, across, &mut stats);
        assert!(revised);
        let remaining = domains.domain(down);
        assert_eq!(remaining.len(), 1);
        assert!(remaining.contains("ART"));
    }

    #[test]
    fn revise_without_overlap_is_a_no_op() {
        let crossword = Crossword::parse("____\n_##_\n_##_\n____", "DATA\nSEED").unwrap();
        let mut domains = DomainStore::new(&crossword);
        domains.enforce_node_consistency();
        let top = Slot::new(0, 0, Direction::Across, 4);
        let bottom = Slot::new(3, 0, Direction::Across, 4);
        let mut stats = SearchStats::default();

        assert!(!revise(&crossword, &mut domains, top, bottom, &mut stats));
        assert_eq!(domains.len(top), 2);
    }

    #[test]
    fn ac3_reaches_the_arc_consistent_fixed_point() {
        let (crossword, mut domains) = prepared("CAT\nART\nTIE");
        let mut stats = SearchStats::default();

        assert!(ac3(&crossword, &mut domains, None, &mut stats));

        // Every remaining word in X has support in Y at the overlap.
        for (x, y) in crossword.arcs() {
            let (i, j) = crossword.overlap(x, y).unwrap();
            for word_x in domains.domain(x) {
                assert!(
                    domains
                        .domain(y)
                        .iter()
                        .any(|word_y| word_x.as_bytes()[i] == word_y.as_bytes()[j]),
                    "{word_x} in {x} lacks support in {y}"
                );
            }
        }
    }

    #[test]
    fn ac3_detects_unsatisfiability_via_an_empty_domain() {
        // No down candidate starts with any middle letter of a viable
        // across candidate once propagation runs both ways.
        let (crossword, mut domains) = prepared("BED\nRUG");
        let mut stats = SearchStats::default();
        assert!(!ac3(&crossword, &mut domains, None, &mut stats));

        let emptied = crossword
            .slots()
            .iter()
            .any(|&slot| domains.is_empty(slot));
        assert!(emptied);
    }

    #[test]
    fn ac3_is_idempotent() {
        let (crossword, mut domains) = prepared("CAT\nART\nTIE");
        let mut stats = SearchStats::default();
        assert!(ac3(&crossword, &mut domains, None, &mut stats));

        let snapshot: Vec<usize> = crossword
            .slots()
            .iter()
            .map(|&slot| domains.len(slot))
            .collect();

        let mut second = SearchStats::default();
        assert!(ac3(&crossword, &mut domains, None, &mut second));
        let after: Vec<usize> = crossword
            .slots()
            .iter()
            .map(|&slot| domains.len(slot))
            .collect();

        assert_eq!(snapshot, after);
        assert_eq!(second.words_pruned, 0);
    }

    #[test]
    fn caller_supplied_arcs_seed_the_worklist() {
        let (crossword, mut domains) = prepared("CAT\nART\nTIE");
        let (across, down) = cross_slots();
        let mut stats = SearchStats::default();

        assert!(ac3(
            &crossword,
            &mut domains,
            Some(vec![(down, across)]),
            &mut stats
        ));
        // Only the seeded arc is revised; the across domain is untouched.
        assert_eq!(domains.len(down), 1);
        assert_eq!(domains.len(across), 3);
    }
}
