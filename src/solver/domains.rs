//! The mutable per-solve domain state: one candidate word set per slot.

use tracing::trace;

use crate::puzzle::{Crossword, Slot};

/// A slot's current set of candidate words.
pub type Domain = im::HashSet<String>;

/// Mapping from each slot to its remaining candidates.
///
/// A store is created once per solve attempt with every domain equal to the
/// full vocabulary. Node-consistency filtering and AC-3 shrink it in place;
/// the search engine only reads it. Domains never grow back.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: im::HashMap<Slot, Domain>,
}

impl DomainStore {
    /// Initializes every slot's domain to the puzzle's full vocabulary.
    pub fn new(crossword: &Crossword) -> Self {
        let domains = crossword
            .slots()
            .iter()
            .map(|&slot| (slot, crossword.vocabulary().clone()))
            .collect();
        Self { domains }
    }

    /// The current domain of `slot`. Panics on a slot the store was not
    /// built with, which would be a caller bug.
    pub fn domain(&self, slot: Slot) -> &Domain {
        &self.domains[&slot]
    }

    pub fn len(&self, slot: Slot) -> usize {
        self.domains[&slot].len()
    }

    pub fn is_empty(&self, slot: Slot) -> bool {
        self.domains[&slot].is_empty()
    }

    /// Removes a single candidate from `slot`'s domain.
    pub fn remove(&mut self, slot: Slot, word: &str) {
        if let Some(domain) = self.domains.get_mut(&slot) {
            domain.remove(word);
        }
    }

    /// Enforces the unary length constraint: every candidate whose length
    /// differs from the slot's length is dropped. A single pass suffices;
    /// filtering one slot never affects another. Returns the number of
    /// words removed.
    pub fn enforce_node_consistency(&mut self) -> u64 {
        let mut removed = 0;
        for (slot, domain) in self.domains.iter_mut() {
            let before = domain.len();
            domain.retain(|word| word.len() == slot.length);
            removed += (before - domain.len()) as u64;
            trace!(
                slot = %slot,
                removed = before - domain.len(),
                remaining = domain.len(),
                "node consistency"
            );
        }
        removed
    }
}
