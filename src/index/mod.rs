//! Index Module
//!
//! Id-keyed record store.
//!
//! ## Responsibilities
//! - Point lookup by student id
//! - Reject duplicate ids on insert
//! - Delete with in-order successor replacement
//! - Ascending-id iteration for listings and snapshots
//!
//! ## Data Structure Choice
//! A plain (unbalanced) binary search tree of boxed nodes:
//! - Records are owned by exactly one node
//! - In-order traversal yields ascending ids with no extra sort
//! - Snapshots are written in id order and reloaded with `from_sorted`,
//!   which rebuilds a balanced tree instead of a right spine

mod tree;

pub use tree::{Iter, StudentTree};
