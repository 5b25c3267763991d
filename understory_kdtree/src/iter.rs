// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-tree enumeration in breadth-first (level) order.

use alloc::collections::VecDeque;
use core::iter::FusedIterator;

use kurbo::Point;

use crate::tree::{KdTree, NodeIdx};

/// Iterator over every stored point and its value, level by level.
///
/// Created by [`KdTree::iter`]. The order is an implementation detail; only
/// completeness (each point exactly once) is promised.
#[derive(Debug)]
pub struct Iter<'a, V> {
    tree: &'a KdTree<V>,
    queue: VecDeque<NodeIdx>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    fn new(tree: &'a KdTree<V>) -> Self {
        Self {
            tree,
            queue: tree.root.into_iter().collect(),
            remaining: tree.len(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.queue.pop_front()?;
        let n = &self.tree.nodes[i.get()];
        self.queue.extend(n.left);
        self.queue.extend(n.right);
        self.remaining -= 1;
        Some((n.point, &n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over every stored point, level by level.
///
/// Created by [`KdTree::points`].
#[derive(Debug)]
pub struct Points<'a, V>(Iter<'a, V>);

impl<V> Iterator for Points<'_, V> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.0.next().map(|(p, _)| p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Points<'_, V> {}
impl<V> FusedIterator for Points<'_, V> {}

impl<V> KdTree<V> {
    /// All stored points, each exactly once.
    pub fn points(&self) -> Points<'_, V> {
        Points(Iter::new(self))
    }

    /// All stored `(point, value)` pairs, each exactly once.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }
}

impl<'a, V> IntoIterator for &'a KdTree<V> {
    type Item = (Point, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
