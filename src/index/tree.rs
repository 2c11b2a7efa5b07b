//! StudentTree implementation
//!
//! Binary search tree keyed by student id.

use std::cmp::Ordering;
use std::mem;

use crate::error::{GradebookError, Result};
use crate::student::Student;

type Link = Option<Box<Node>>;

struct Node {
    student: Student,
    left: Link,
    right: Link,
}

impl Node {
    fn new(student: Student) -> Self {
        Self {
            student,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of student records
#[derive(Default)]
pub struct StudentTree {
    root: Link,
    len: usize,
}

impl StudentTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a height-balanced tree from records in strictly ascending id order
    pub fn from_sorted(students: Vec<Student>) -> Result<Self> {
        for pair in students.windows(2) {
            match pair[0].id().cmp(&pair[1].id()) {
                Ordering::Less => {}
                Ordering::Equal => return Err(GradebookError::DuplicateId(pair[1].id())),
                Ordering::Greater => {
                    return Err(GradebookError::Corruption(format!(
                        "records out of id order at {}",
                        pair[1].id()
                    )))
                }
            }
        }

        let len = students.len();
        let mut slots: Vec<Option<Student>> = students.into_iter().map(Some).collect();

        Ok(Self {
            root: build_balanced(&mut slots),
            len,
        })
    }

    /// Insert a record; an existing id is rejected and the tree is unchanged
    pub fn insert(&mut self, student: Student) -> Result<()> {
        let id = student.id();
        let mut link = &mut self.root;

        while let Some(node) = link {
            link = match id.cmp(&node.student.id()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(GradebookError::DuplicateId(id)),
            };
        }

        *link = Some(Box::new(Node::new(student)));
        self.len += 1;
        Ok(())
    }

    /// Look up a record by id
    pub fn get(&self, id: u32) -> Option<&Student> {
        let mut link = &self.root;

        while let Some(node) = link {
            match id.cmp(&node.student.id()) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(&node.student),
            }
        }

        None
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Remove a record by id, returning it if it was present
    pub fn remove(&mut self, id: u32) -> Option<Student> {
        let removed = remove_from(&mut self.root, id);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// In-order (ascending id) iterator
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        iter
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every record
    pub fn clear(&mut self) {
        free(self.root.take());
        self.len = 0;
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        height_of(&self.root)
    }
}

/// Walk down to `id` and unlink it
///
/// Loops instead of recursing: ids inserted in ascending order leave a
/// spine as deep as the record count.
fn remove_from(mut link: &mut Link, id: u32) -> Option<Student> {
    loop {
        match id.cmp(&link.as_ref()?.student.id()) {
            Ordering::Less => link = &mut link.as_mut()?.left,
            Ordering::Greater => link = &mut link.as_mut()?.right,
            Ordering::Equal => break,
        }
    }

    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        // Two children: the in-order successor takes this slot
        let successor = detach_min(&mut node.right)?;
        return Some(mem::replace(&mut node.student, successor));
    }

    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    Some(node.student)
}

/// Middle slot becomes the subtree root; each slot is taken exactly once
fn build_balanced(slots: &mut [Option<Student>]) -> Link {
    let mid = slots.len() / 2;
    let (left, rest) = slots.split_at_mut(mid);
    let (middle, right) = rest.split_first_mut()?;
    let student = middle.take()?;

    Some(Box::new(Node {
        student,
        left: build_balanced(left),
        right: build_balanced(right),
    }))
}

/// Unlink the smallest record under `link`, splicing its right child into its place
fn detach_min(mut link: &mut Link) -> Option<Student> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.student)
}

/// Level-by-level count of the longest root-to-leaf path
fn height_of(root: &Link) -> usize {
    let mut height = 0;
    let mut level: Vec<&Node> = root.as_deref().into_iter().collect();

    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
            .flatten()
            .collect();
    }

    height
}

/// Free a subtree one node at a time
///
/// The derived drop of `Box<Node>` recurses once per level.
fn free(link: Link) {
    let mut pending: Vec<Box<Node>> = link.into_iter().collect();

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl Drop for StudentTree {
    fn drop(&mut self) {
        free(self.root.take());
    }
}

/// In-order iterator over a StudentTree
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.student)
    }
}

impl<'a> IntoIterator for &'a StudentTree {
    type Item = &'a Student;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u32) -> Student {
        Student::new(id, "Test Student", vec![70.0], 80.0).unwrap()
    }

    fn tree_of(ids: &[u32]) -> StudentTree {
        let mut tree = StudentTree::new();
        for &id in ids {
            tree.insert(student(id)).unwrap();
        }
        tree
    }

    fn ids(tree: &StudentTree) -> Vec<u32> {
        tree.iter().map(|s| s.id()).collect()
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree = StudentTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.get(1).is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let tree = tree_of(&[50, 30, 70]);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(30).map(|s| s.id()), Some(30));
        assert_eq!(tree.get(70).map(|s| s.id()), Some(70));
        assert!(tree.get(40).is_none());
        assert!(tree.contains(50));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut tree = tree_of(&[10]);

        let result = tree.insert(student(10));

        assert!(matches!(result, Err(GradebookError::DuplicateId(10))));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_iter_is_in_order() {
        let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 35]);
        assert_eq!(ids(&tree), vec![20, 30, 35, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = tree_of(&[50, 30, 70]);

        let removed = tree.remove(30).unwrap();

        assert_eq!(removed.id(), 30);
        assert_eq!(ids(&tree), vec![50, 70]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut tree = tree_of(&[50, 30, 20]);

        tree.remove(30).unwrap();

        assert_eq!(ids(&tree), vec![20, 50]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut tree = tree_of(&[50, 30, 70, 60, 80, 65]);

        let removed = tree.remove(50).unwrap();

        assert_eq!(removed.id(), 50);
        assert_eq!(ids(&tree), vec![30, 60, 65, 70, 80]);
        assert!(tree.get(60).is_some());
        assert!(tree.get(65).is_some());
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

        for id in [4, 5, 6, 2, 7, 1, 3] {
            assert!(tree.remove(id).is_some(), "id {} should be present", id);
        }

        assert!(tree.is_empty());
        assert!(ids(&tree).is_empty());
    }

    #[test]
    fn test_remove_missing_id() {
        let mut tree = tree_of(&[1, 2]);

        assert!(tree.remove(3).is_none());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_of(&[1, 2, 3]);
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.get(2).is_none());
    }

    #[test]
    fn test_from_sorted_is_balanced() {
        let students: Vec<Student> = (1..=7).map(student).collect();

        let tree = StudentTree::from_sorted(students).unwrap();

        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(ids(&tree), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_from_sorted_rejects_bad_order() {
        let dup = vec![student(1), student(1)];
        let unordered = vec![student(2), student(1)];

        assert!(matches!(StudentTree::from_sorted(dup), Err(GradebookError::DuplicateId(1))));
        assert!(matches!(
            StudentTree::from_sorted(unordered),
            Err(GradebookError::Corruption(_))
        ));
        assert!(StudentTree::from_sorted(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_sorted_insert_builds_spine() {
        let tree = tree_of(&[1, 2, 3, 4, 5]);
        assert_eq!(tree.height(), 5);
    }

    #[test]
    fn test_remove_successor_with_right_child() {
        let mut tree = tree_of(&[50, 30, 70, 60, 80, 65, 62]);

        let removed = tree.remove(50).unwrap();

        assert_eq!(removed.id(), 50);
        assert_eq!(ids(&tree), vec![30, 60, 62, 65, 70, 80]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_deep_spine_remove_and_drop() {
        const N: u32 = 20_000;
        let ascending: Vec<u32> = (1..=N).collect();
        let mut tree = tree_of(&ascending);
        assert_eq!(tree.height(), N as usize);

        // Tail of the spine, then the root with the whole spine below it
        assert_eq!(tree.remove(N).map(|s| s.id()), Some(N));
        assert_eq!(tree.remove(1).map(|s| s.id()), Some(1));
        assert_eq!(tree.len(), (N - 2) as usize);
        assert_eq!(tree.get(N - 1).map(|s| s.id()), Some(N - 1));

        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_deep_successor_search() {
        const N: u32 = 20_000;
        // Root 1, then a long left spine hanging off its right child
        let mut tree = tree_of(&[1]);
        for id in (2..=N).rev() {
            tree.insert(student(id)).unwrap();
        }
        tree.insert(student(N + 1)).unwrap();

        assert_eq!(tree.remove(1).map(|s| s.id()), Some(1));
        assert_eq!(tree.iter().next().map(|s| s.id()), Some(2));
        assert_eq!(tree.len(), N as usize);
        assert!(tree.get(N + 1).is_some());
    }
}
