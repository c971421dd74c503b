// src/mst/tree_list.rs
//! Circular singly-linked list of partial trees.
//!
//! Nodes live in a [`Slab`] and link to each other by key. Only the key of
//! the last node is kept; the front is always `last.next`, which makes both
//! `append` and `pop_front` O(1).

use slab::Slab;

use super::forest::Forest;
use super::partial_tree::PartialTree;
use crate::error::{ArborError, Result};
use crate::graph::VertexId;

#[derive(Debug, Clone)]
struct Node {
    tree: PartialTree,
    next: usize,
}

/// The live partial trees, plus the forest that says which vertex is in which.
#[derive(Debug, Clone)]
pub struct PartialTreeList {
    nodes: Slab<Node>,
    rear: Option<usize>,
    forest: Forest,
}

// Every key reachable through `rear` and `next` is occupied in `nodes`;
// keys are only vacated together with relinking around them.
#[allow(clippy::indexing_slicing)]
impl PartialTreeList {
    /// An empty list over `vertex_count` singleton vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_forest(Forest::new(vertex_count))
    }

    #[must_use]
    pub fn with_forest(forest: Forest) -> Self {
        Self {
            nodes: Slab::new(),
            rear: None,
            forest,
        }
    }

    /// Adds `tree` after the current last node; it becomes the new last.
    pub fn append(&mut self, tree: PartialTree) {
        let key = self.nodes.vacant_key();
        let next = match self.rear {
            Some(rear) => self.nodes[rear].next,
            None => key,
        };
        self.nodes.insert(Node { tree, next });
        if let Some(rear) = self.rear {
            self.nodes[rear].next = key;
        }
        self.rear = Some(key);
    }

    /// Removes and returns the tree at the front.
    ///
    /// # Errors
    /// Returns `EmptyCollection` if the list is empty.
    pub fn pop_front(&mut self) -> Result<PartialTree> {
        let rear = self.rear.ok_or(ArborError::EmptyCollection)?;
        let front = self.nodes[rear].next;
        if front == rear {
            self.rear = None;
        } else {
            self.nodes[rear].next = self.nodes[front].next;
        }
        Ok(self.nodes.remove(front).tree)
    }

    /// Finds the tree that `vertex` belongs to, unlinks it and returns it.
    ///
    /// The scan starts at the front and goes once around the circle.
    /// Returns `Ok(None)` when no tree in the list contains `vertex`.
    ///
    /// # Errors
    /// Returns `EmptyCollection` if the list is empty, or a forest error if
    /// `vertex` is unknown or its parent chain is corrupt.
    pub fn remove_tree_containing(&mut self, vertex: VertexId) -> Result<Option<PartialTree>> {
        let rear = self.rear.ok_or(ArborError::EmptyCollection)?;

        let mut prev = rear;
        loop {
            let cur = self.nodes[prev].next;
            let root = self.nodes[cur].tree.root();
            if self.forest.chain_reaches(vertex, root)? {
                return Ok(Some(self.unlink(prev, cur)));
            }
            prev = cur;
            if prev == rear {
                return Ok(None);
            }
        }
    }

    /// Removes `cur`, whose predecessor in the circle is `prev`.
    fn unlink(&mut self, prev: usize, cur: usize) -> PartialTree {
        if prev == cur {
            // Only node in the circle.
            self.rear = None;
        } else {
            self.nodes[prev].next = self.nodes[cur].next;
            if Some(cur) == self.rear {
                self.rear = Some(prev);
            }
        }
        self.nodes.remove(cur).tree
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rear.is_none()
    }

    #[must_use]
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn forest_mut(&mut self) -> &mut Forest {
        &mut self.forest
    }

    /// Front-to-back pass over the trees present now.
    ///
    /// The iterator borrows the list, so it cannot be mutated mid-pass.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.rear.map(|rear| self.nodes[rear].next),
            remaining: self.size(),
        }
    }
}

impl<'a> IntoIterator for &'a PartialTreeList {
    type Item = &'a PartialTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`PartialTreeList::iter`].
pub struct Iter<'a> {
    list: &'a PartialTreeList,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PartialTree;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.cursor?;
        let node = self.list.nodes.get(key)?;
        self.cursor = Some(node.next);
        self.remaining -= 1;
        Some(&node.tree)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(list: &PartialTreeList) -> Vec<usize> {
        list.iter().map(|t| t.root().index()).collect()
    }

    fn list_of(n: usize) -> PartialTreeList {
        let mut list = PartialTreeList::new(n);
        for i in 0..n {
            list.append(PartialTree::new(VertexId(i)));
        }
        list
    }

    #[test]
    fn removing_last_moves_rear_back() {
        let mut list = list_of(3);
        let t = list.remove_tree_containing(VertexId(2)).unwrap().unwrap();
        assert_eq!(t.root(), VertexId(2));
        list.append(PartialTree::new(VertexId(2)));
        assert_eq!(roots(&list), vec![0, 1, 2]);
    }

    #[test]
    fn removing_front_keeps_rear() {
        let mut list = list_of(3);
        list.remove_tree_containing(VertexId(0)).unwrap().unwrap();
        assert_eq!(roots(&list), vec![1, 2]);
        assert_eq!(list.pop_front().unwrap().root(), VertexId(1));
    }

    #[test]
    fn removing_middle() {
        let mut list = list_of(4);
        list.remove_tree_containing(VertexId(2)).unwrap().unwrap();
        assert_eq!(roots(&list), vec![0, 1, 3]);
    }

    #[test]
    fn slab_keys_are_reused_safely() {
        let mut list = list_of(3);
        for _ in 0..10 {
            let t = list.pop_front().unwrap();
            list.append(t);
        }
        assert_eq!(list.size(), 3);
        assert_eq!(roots(&list).len(), 3);
    }
}
