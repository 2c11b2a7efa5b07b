//! Ranking Module
//!
//! Order-keyed view of the records, used for the CGPA ranking.
//!
//! ## Ordering
//! ```text
//! higher CGPA ranks first
//! equal CGPA -> smaller id ranks first
//! ```
//!
//! ## Data Structure Choice
//! An array-backed binary max-heap of `(cgpa, id)` keys:
//! - O(log n) insert
//! - O(n) removal by id (linear scan, then re-heapify the hole)
//! - Records themselves stay in the id index; the heap only holds keys

mod heap;

use std::cmp::Ordering;

pub use heap::RankingQueue;

use crate::student::Student;

/// Heap key for one student
#[derive(Debug, Clone, Copy)]
pub struct RankEntry {
    pub cgpa: f64,
    pub id: u32,
}

impl RankEntry {
    pub fn new(cgpa: f64, id: u32) -> Self {
        Self { cgpa, id }
    }
}

impl From<&Student> for RankEntry {
    fn from(student: &Student) -> Self {
        Self::new(student.cgpa(), student.id())
    }
}

impl Ord for RankEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cgpa
            .total_cmp(&other.cgpa)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for RankEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankEntry {}
