// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor and k-nearest search.
//!
//! Both searches walk the tree depth-first with an explicit stack, visiting
//! the child on the query's side of each splitting line before the other one.
//! A subtree is skipped when the squared distance from the query to its
//! region already exceeds the current bound; the region distance is a true
//! lower bound for every point below, so skipping never loses a candidate.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;

use crate::error::Result;
use crate::tree::{KdTree, NodeIdx};
use crate::types::{check_point, distance_squared_to_rect};

/// A k-nearest candidate, ordered by distance so the heap top is the worst.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    dist2: f64,
    idx: NodeIdx,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist2.total_cmp(&other.dist2)
    }
}

impl<V> KdTree<V> {
    /// The stored point closest to `query`, or `None` if the tree is empty.
    ///
    /// When several stored points are equally close, which one is returned is
    /// unspecified.
    ///
    /// ```
    /// use understory_kdtree::KdTree;
    /// use kurbo::Point;
    ///
    /// let tree = KdTree::try_from_iter([
    ///     (Point::new(0.0, 0.0), 1),
    ///     (Point::new(1.0, 1.0), 2),
    ///     (Point::new(2.0, 1.0), 3),
    /// ])?;
    /// assert_eq!(tree.nearest(Point::new(-1.0, 1.0))?, Some(Point::new(0.0, 0.0)));
    /// assert_eq!(KdTree::<()>::new().nearest(Point::ZERO)?, None);
    /// # Ok::<(), understory_kdtree::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate of `query` is NaN or infinite.
    pub fn nearest(&self, query: Point) -> Result<Option<Point>> {
        let query = check_point(query)?;
        Ok(self.nearest_idx(query).map(|i| self.nodes[i.get()].point))
    }

    /// Like [`nearest`](Self::nearest), also returning the value and the
    /// Euclidean distance to `query`.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate of `query` is NaN or infinite.
    pub fn nearest_entry(&self, query: Point) -> Result<Option<(Point, &V, f64)>> {
        let query = check_point(query)?;
        Ok(self.nearest_idx(query).map(|i| {
            let n = &self.nodes[i.get()];
            (n.point, &n.value, n.point.distance(query))
        }))
    }

    /// Up to `k` stored points closest to `query` with their values and
    /// Euclidean distances, nearest first.
    ///
    /// Returns fewer than `k` entries only when the tree holds fewer points.
    /// Among equally distant points the selection is unspecified.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate of `query` is NaN or infinite.
    pub fn nearest_k(&self, query: Point, k: usize) -> Result<Vec<(Point, &V, f64)>> {
        let query = check_point(query)?;
        let Some(root) = self.root.filter(|_| k > 0) else {
            return Ok(Vec::new());
        };
        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k.min(self.len()) + 1);
        let mut stack = vec![root];
        let mut visited = 0_usize;
        while let Some(i) = stack.pop() {
            let n = &self.nodes[i.get()];
            let bound = match heap.peek() {
                Some(worst) if heap.len() == k => worst.dist2,
                _ => f64::INFINITY,
            };
            if bound < distance_squared_to_rect(&n.region, query) {
                continue;
            }
            visited += 1;
            let dist2 = n.point.distance_squared(query);
            if heap.len() < k {
                heap.push(Candidate { dist2, idx: i });
            } else if dist2 < bound {
                let _ = heap.pop();
                heap.push(Candidate { dist2, idx: i });
            }
            let (near, far) = n.near_far(query);
            stack.extend(far);
            stack.extend(near);
        }
        tracing::debug!(k, visited, len = self.len(), "kdtree: k-nearest search");
        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| {
                let n = &self.nodes[c.idx.get()];
                (n.point, &n.value, n.point.distance(query))
            })
            .collect())
    }

    fn nearest_idx(&self, query: Point) -> Option<NodeIdx> {
        let root = self.root?;
        let mut best = None;
        let mut best_dist2 = f64::INFINITY;
        let mut stack = vec![root];
        let mut visited = 0_usize;
        while let Some(i) = stack.pop() {
            let n = &self.nodes[i.get()];
            if best_dist2 < distance_squared_to_rect(&n.region, query) {
                continue;
            }
            visited += 1;
            let dist2 = n.point.distance_squared(query);
            // Squared distances between far-apart finite points overflow to
            // infinity, so the first visited node is always taken.
            if best.is_none() || dist2 < best_dist2 {
                best = Some(i);
                best_dist2 = dist2;
            }
            // Far child goes under the near one, so the near subtree is
            // exhausted (tightening the bound) before the far one is examined.
            let (near, far) = n.near_far(query);
            stack.extend(far);
            stack.extend(near);
        }
        tracing::debug!(visited, len = self.len(), "kdtree: nearest search");
        best
    }
}
