pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod propagate;
pub mod search;
pub mod stats;
pub mod work_list;

use crate::puzzle::Slot;

/// A (possibly partial) mapping from slots to chosen words. Complete once
/// every slot is bound; the solver only ever returns complete assignments.
pub type Assignment = std::collections::HashMap<Slot, String>;
