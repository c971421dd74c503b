// src/verify/union_find.rs
//! Disjoint sets over `0..n` for the reference Kruskal.
//!
//! Kept apart from [`crate::mst::Forest`] so the cross-check shares no code
//! with the structure it is checking.

use std::cmp::Ordering;

pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

// All callers pass vertex indices from a graph of size `n`.
#[allow(clippy::indexing_slicing)]
impl UnionFind {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of `x`'s set; halves the path on the way up.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Joins the sets of `x` and `y`; false means an edge between them
    /// would close a cycle.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }

        let (low, high) = match self.rank[rx].cmp(&self.rank[ry]) {
            Ordering::Less => (rx, ry),
            Ordering::Greater => (ry, rx),
            Ordering::Equal => {
                self.rank[rx] += 1;
                (ry, rx)
            }
        };
        self.parent[low] = high;
        true
    }

    pub fn set_count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&x| self.find(x) == x).count()
    }
}
