// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle range search.
//!
//! A node's region bounds every point in its subtree, so once the region
//! misses the query the whole subtree is skipped. When it hits, the node's own
//! point is tested and both children stay candidates.

use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use kurbo::{Point, Rect};

use crate::error::Result;
use crate::tree::{KdTree, NodeIdx};
use crate::types::{check_rect, contains_point, intersects};

/// Lazily yields stored `(point, value)` pairs inside a closed rectangle.
///
/// Created by [`KdTree::range_entries`].
#[derive(Debug)]
pub struct RangeEntries<'a, V> {
    tree: &'a KdTree<V>,
    query: Rect,
    stack: Vec<NodeIdx>,
    visited: usize,
}

impl<'a, V> Iterator for RangeEntries<'a, V> {
    type Item = (Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.stack.pop() {
            let n = &self.tree.nodes[i.get()];
            self.visited += 1;
            if !intersects(&n.region, &self.query) {
                continue;
            }
            // Right first so the left subtree pops first.
            self.stack.extend(n.right);
            self.stack.extend(n.left);
            if contains_point(&self.query, n.point) {
                return Some((n.point, &n.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.len() - self.visited))
    }
}

impl<V> FusedIterator for RangeEntries<'_, V> {}

impl<V> Drop for RangeEntries<'_, V> {
    fn drop(&mut self) {
        if self.visited == 0 {
            return;
        }
        tracing::debug!(
            query = ?self.query,
            visited = self.visited,
            len = self.tree.len(),
            "kdtree: range search"
        );
    }
}

/// Lazily yields stored points inside a closed rectangle.
///
/// Created by [`KdTree::range`].
#[derive(Debug)]
pub struct Range<'a, V>(RangeEntries<'a, V>);

impl<V> Iterator for Range<'_, V> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.0.next().map(|(p, _)| p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> FusedIterator for Range<'_, V> {}

impl<V> KdTree<V> {
    /// Stored points inside `rect`, boundary included.
    ///
    /// Zero-width or zero-height rectangles are fine and match points lying
    /// exactly on them. Infinite edges are allowed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRect`](crate::Error::InvalidRect) if an edge is NaN
    /// or the rectangle is inverted (`x0 > x1` or `y0 > y1`).
    pub fn range(&self, rect: Rect) -> Result<Range<'_, V>> {
        self.range_entries(rect).map(Range)
    }

    /// Stored `(point, value)` pairs inside `rect`, boundary included.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRect`](crate::Error::InvalidRect) under the same
    /// conditions as [`range`](Self::range).
    pub fn range_entries(&self, rect: Rect) -> Result<RangeEntries<'_, V>> {
        let query = check_rect(rect)?;
        Ok(RangeEntries {
            tree: self,
            query,
            stack: self.root.map(|r| vec![r]).unwrap_or_default(),
            visited: 0,
        })
    }
}
