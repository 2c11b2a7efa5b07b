//! RankingQueue implementation
//!
//! Array-backed binary max-heap over `RankEntry`.

use super::RankEntry;

/// Max-heap of rank keys
///
/// Children of slot `i` live at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone, Default)]
pub struct RankingQueue {
    entries: Vec<RankEntry>,
}

impl RankingQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from arbitrary entries (bottom-up heapify)
    pub fn from_entries(entries: impl IntoIterator<Item = RankEntry>) -> Self {
        let mut queue = Self {
            entries: entries.into_iter().collect(),
        };
        for index in (0..queue.entries.len() / 2).rev() {
            queue.sift_down(index);
        }
        queue
    }

    /// Add an entry
    pub fn push(&mut self, entry: RankEntry) {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Highest-ranked entry
    pub fn peek(&self) -> Option<&RankEntry> {
        self.entries.first()
    }

    /// Remove and return the highest-ranked entry
    pub fn pop(&mut self) -> Option<RankEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Remove the entry for a student id
    ///
    /// The last entry fills the hole, then is moved down or up as needed.
    pub fn remove(&mut self, id: u32) -> Option<RankEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.swap_remove(index);

        if index < self.entries.len() {
            self.sift_down(index);
            self.sift_up(index);
        }

        Some(removed)
    }

    /// All entries in rank order (best first); the queue is left untouched
    pub fn ranked(&self) -> Vec<RankEntry> {
        let mut scratch = self.clone();
        let mut ranked = Vec::with_capacity(scratch.len());
        while let Some(entry) = scratch.pop() {
            ranked.push(entry);
        }
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether every parent outranks or equals its children
    pub fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2] >= self.entries[i])
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index] <= self.entries[parent] {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < size && self.entries[left] > self.entries[largest] {
                largest = left;
            }
            if right < size && self.entries[right] > self.entries[largest] {
                largest = right;
            }
            if largest == index {
                break;
            }

            self.entries.swap(index, largest);
            index = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[RankEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    fn sample() -> RankingQueue {
        let mut queue = RankingQueue::new();
        queue.push(RankEntry::new(7.2, 1));
        queue.push(RankEntry::new(9.4, 2));
        queue.push(RankEntry::new(8.1, 3));
        queue.push(RankEntry::new(9.4, 4));
        queue.push(RankEntry::new(6.0, 5));
        queue.push(RankEntry::new(8.8, 6));
        queue
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = RankingQueue::new();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
        assert!(queue.pop().is_none());
        assert!(queue.remove(1).is_none());
        assert!(queue.ranked().is_empty());
    }

    #[test]
    fn test_push_keeps_best_on_top() {
        let queue = sample();

        assert_eq!(queue.len(), 6);
        assert_eq!(queue.peek().map(|e| e.id), Some(2));
        assert!(queue.is_valid_heap());
    }

    #[test]
    fn test_ranked_order_and_ties() {
        let queue = sample();

        assert_eq!(ids(&queue.ranked()), vec![2, 4, 6, 3, 1, 5]);
        // ranked() does not consume
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_remove_top() {
        let mut queue = sample();

        let removed = queue.remove(2).unwrap();

        assert_eq!(removed.id, 2);
        assert_eq!(queue.peek().map(|e| e.id), Some(4));
        assert!(queue.is_valid_heap());
    }

    #[test]
    fn test_remove_interior_and_last() {
        let mut queue = sample();

        queue.remove(3).unwrap();
        assert!(queue.is_valid_heap());

        let last_id = queue.entries.last().map(|e| e.id).unwrap();
        queue.remove(last_id).unwrap();
        assert!(queue.is_valid_heap());

        assert_eq!(queue.len(), 4);
        assert!(!ids(&queue.ranked()).contains(&3));
    }

    #[test]
    fn test_remove_requires_sift_up() {
        // Replacement for the hole must move up, not down
        let mut queue = RankingQueue::from_entries(vec![
            RankEntry::new(10.0, 1),
            RankEntry::new(5.0, 2),
            RankEntry::new(9.0, 3),
            RankEntry::new(4.0, 4),
            RankEntry::new(3.0, 5),
            RankEntry::new(8.0, 6),
            RankEntry::new(7.0, 7),
        ]);

        queue.remove(4).unwrap();

        assert!(queue.is_valid_heap());
        assert_eq!(ids(&queue.ranked()), vec![1, 3, 6, 7, 2, 5]);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut queue = sample();
        assert!(queue.remove(99).is_none());
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_from_entries_heapifies() {
        let queue = RankingQueue::from_entries((1..=20).map(|id| RankEntry::new(id as f64 / 2.0, id)));

        assert!(queue.is_valid_heap());
        assert_eq!(queue.peek().map(|e| e.id), Some(20));
    }

    #[test]
    fn test_clear() {
        let mut queue = sample();
        queue.clear();
        assert!(queue.is_empty());
    }
}
