use std::collections::VecDeque;

use super::types::ClientId;

/// Ordered waiting list of clients seeking an opponent.
///
/// A given identifier holds at most one slot. Slots are served
/// first-in-first-out, so the longest-waiting client is matched first (see
/// DESIGN.md for the queue discipline decision).
#[derive(Debug)]
pub struct MatchQueue {
    waiting: VecDeque<ClientId>,
}

impl MatchQueue {
    pub fn new() -> Self {
        Self {
            waiting: VecDeque::new(),
        }
    }

    /// Append `id` unless it already holds a slot; a repeated request must
    /// not produce a second entry.
    pub fn enqueue(&mut self, id: ClientId) {
        if !self.contains(&id) {
            self.waiting.push_back(id);
        }
    }

    /// Remove and return the longest-waiting client.
    pub fn dequeue_one(&mut self) -> Option<ClientId> {
        self.waiting.pop_front()
    }

    /// Drop `id`'s slot if it holds one; removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) {
        self.waiting.retain(|waiting| waiting != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.waiting.iter().any(|waiting| waiting == id)
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientId> {
        self.waiting.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeues_in_fifo_order() {
        let mut queue = MatchQueue::new();
        queue.enqueue("a".to_string());
        queue.enqueue("b".to_string());
        queue.enqueue("c".to_string());

        assert_eq!(queue.dequeue_one().as_deref(), Some("a"));
        assert_eq!(queue.dequeue_one().as_deref(), Some("b"));
        assert_eq!(queue.dequeue_one().as_deref(), Some("c"));
        assert_eq!(queue.dequeue_one(), None);
    }

    #[test]
    fn test_duplicate_enqueue_keeps_a_single_slot() {
        let mut queue = MatchQueue::new();
        queue.enqueue("a".to_string());
        queue.enqueue("a".to_string());

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue_one().as_deref(), Some("a"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_remove_clears_the_slot_and_keeps_order() {
        let mut queue = MatchQueue::new();
        queue.enqueue("a".to_string());
        queue.enqueue("b".to_string());
        queue.enqueue("c".to_string());

        queue.remove("b");

        assert!(!queue.contains("b"));
        assert_eq!(queue.dequeue_one().as_deref(), Some("a"));
        assert_eq!(queue.dequeue_one().as_deref(), Some("c"));
    }

    #[test]
    fn test_remove_of_an_absent_id_is_a_no_op() {
        let mut queue = MatchQueue::new();
        queue.enqueue("a".to_string());

        queue.remove("ghost");

        assert_eq!(queue.len(), 1);
        assert!(queue.contains("a"));
    }
}
