use std::collections::{HashSet, VecDeque};

use crate::puzzle::Slot;

/// FIFO queue of arcs awaiting revision during AC-3.
///
/// An arc already sitting in the queue is not queued a second time;
/// revising it once is enough to account for every shrink that happened
/// before it is popped.
pub struct WorkList {
    queue: VecDeque<(Slot, Slot)>,
    queue_members: HashSet<(Slot, Slot)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, x: Slot, y: Slot) {
        if self.queue_members.insert((x, y)) {
            self.queue.push_back((x, y));
        }
    }

    pub fn pop_front(&mut self) -> Option<(Slot, Slot)> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::WorkList;
    use crate::puzzle::{Direction, Slot};

    #[test]
    fn pops_in_fifo_order_and_deduplicates() {
        let a = Slot::new(0, 0, Direction::Across, 3);
        let b = Slot::new(0, 0, Direction::Down, 3);
        let c = Slot::new(0, 2, Direction::Down, 3);

        let mut worklist = WorkList::new();
        worklist.push_back(a, b);
        worklist.push_back(b, a);
        worklist.push_back(a, b); // duplicate, ignored
        worklist.push_back(a, c);

        assert_eq!(worklist.pop_front(), Some((a, b)));
        assert_eq!(worklist.pop_front(), Some((b, a)));
        assert_eq!(worklist.pop_front(), Some((a, c)));
        assert!(worklist.pop_front().is_none());
        assert!(worklist.is_empty());
    }

    #[test]
    fn an_arc_may_be_requeued_after_being_popped() {
        let a = Slot::new(0, 0, Direction::Across, 3);
        let b = Slot::new(0, 0, Direction::Down, 3);

        let mut worklist = WorkList::new();
        worklist.push_back(a, b);
        assert_eq!(worklist.pop_front(), Some((a, b)));
        worklist.push_back(a, b);
        assert_eq!(worklist.pop_front(), Some((a, b)));
    }
}
