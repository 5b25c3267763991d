// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2-d tree: node arena, insertion, and exact lookup.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::error::Result;
use crate::types::{Orientation, UNBOUNDED, check_point};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(u32);

impl NodeIdx {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Arena indices are 32-bit; the tree never holds more than u32::MAX nodes."
    )]
    const fn new(i: usize) -> Self {
        Self(i as u32)
    }

    pub(crate) const fn get(self) -> usize {
        self.0 as usize
    }
}

/// One stored point. Position, region and orientation never change after
/// creation; only `value` may be replaced.
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) point: Point,
    pub(crate) value: V,
    pub(crate) region: Rect,
    pub(crate) orientation: Orientation,
    pub(crate) left: Option<NodeIdx>,
    pub(crate) right: Option<NodeIdx>,
}

impl<V> Node<V> {
    /// The child on `p`'s side of this node's splitting line, then the other one.
    #[inline]
    pub(crate) fn near_far(&self, p: Point) -> (Option<NodeIdx>, Option<NodeIdx>) {
        if self.orientation.goes_left(p, self.point) {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}

/// A symbol table from points in the plane to values, stored as a 2-d tree.
///
/// Points split the plane alternately by x (at even depths, starting with the
/// root) and by y (at odd depths). Points whose splitting coordinate is
/// strictly less than a node's go left; everything else, including ties,
/// goes right. Each node remembers the rectangle of the plane its subtree is
/// responsible for, which lets [`range`](Self::range) and
/// [`nearest`](Self::nearest) skip whole subtrees.
///
/// There is no removal and no rebalancing: the shape of the tree is decided by
/// insertion order alone. Every traversal is iterative, so degenerate shapes
/// (for instance points inserted in sorted order) cost time but not stack.
///
/// ```
/// use understory_kdtree::KdTree;
/// use kurbo::{Point, Rect};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.0, 0.0), "origin")?;
/// tree.insert(Point::new(4.0, 1.0), "east")?;
///
/// assert_eq!(tree.get(Point::new(4.0, 1.0))?, Some(&"east"));
/// assert_eq!(tree.nearest(Point::new(3.0, 3.0))?, Some(Point::new(4.0, 1.0)));
/// assert_eq!(tree.range(Rect::new(-1.0, -1.0, 1.0, 1.0))?.count(), 1);
/// # Ok::<(), understory_kdtree::Error>(())
/// ```
#[derive(Clone)]
pub struct KdTree<V> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) root: Option<NodeIdx>,
}

impl<V> Default for KdTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> KdTree<V> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create an empty tree with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            root: None,
        }
    }

    /// Build a tree by inserting `(point, value)` pairs in iteration order.
    ///
    /// Later values for a repeated point replace earlier ones.
    ///
    /// # Errors
    ///
    /// Stops at the first non-finite point and returns
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint).
    pub fn try_from_iter<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Point, V)>,
    {
        let entries = entries.into_iter();
        let mut tree = Self::with_capacity(entries.size_hint().0);
        for (p, v) in entries {
            let _ = tree.insert(p, v)?;
        }
        Ok(tree)
    }

    /// Whether the tree holds no points.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct points stored.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every point.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of levels on the longest root-to-leaf path (zero when empty).
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root, 1_usize)];
        while let Some((i, d)) = stack.pop() {
            deepest = deepest.max(d);
            let n = &self.nodes[i.get()];
            stack.extend(n.left.map(|c| (c, d + 1)));
            stack.extend(n.right.map(|c| (c, d + 1)));
        }
        deepest
    }

    /// Associate `value` with `point`.
    ///
    /// Returns the previous value if `point` was already present, in which
    /// case the tree's shape and length are unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate is NaN or infinite. The tree is not modified.
    pub fn insert(&mut self, point: Point, value: V) -> Result<Option<V>> {
        let point = check_point(point)?;
        let Some(mut cur) = self.root else {
            self.root = Some(self.push(point, value, UNBOUNDED, Orientation::Vertical));
            tracing::trace!(x = point.x, y = point.y, "kdtree: new root");
            return Ok(None);
        };
        let mut depth = 1_usize;
        loop {
            let node = &mut self.nodes[cur.get()];
            if node.point == point {
                return Ok(Some(core::mem::replace(&mut node.value, value)));
            }
            let go_left = node.orientation.goes_left(point, node.point);
            let next = if go_left { node.left } else { node.right };
            match next {
                Some(child) => {
                    cur = child;
                    depth += 1;
                }
                None => {
                    let (l, r) = node.orientation.carve(node.region, node.point);
                    let region = if go_left { l } else { r };
                    let orientation = node.orientation.flip();
                    let child = self.push(point, value, region, orientation);
                    let node = &mut self.nodes[cur.get()];
                    if go_left {
                        node.left = Some(child);
                    } else {
                        node.right = Some(child);
                    }
                    tracing::trace!(x = point.x, y = point.y, depth, "kdtree: new node");
                    return Ok(None);
                }
            }
        }
    }

    /// The value stored at `point`, if any.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate is NaN or infinite.
    pub fn get(&self, point: Point) -> Result<Option<&V>> {
        let point = check_point(point)?;
        Ok(self.find(point).map(|i| &self.nodes[i.get()].value))
    }

    /// Mutable access to the value stored at `point`, if any.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate is NaN or infinite.
    pub fn get_mut(&mut self, point: Point) -> Result<Option<&mut V>> {
        let point = check_point(point)?;
        Ok(self.find(point).map(|i| &mut self.nodes[i.get()].value))
    }

    /// Whether `point` is stored in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::NonFinitePoint`](crate::Error::NonFinitePoint) if either
    /// coordinate is NaN or infinite.
    pub fn contains(&self, point: Point) -> Result<bool> {
        Ok(self.get(point)?.is_some())
    }

    fn find(&self, point: Point) -> Option<NodeIdx> {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i.get()];
            if node.point == point {
                return Some(i);
            }
            cur = if node.orientation.goes_left(point, node.point) {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    fn push(&mut self, point: Point, value: V, region: Rect, orientation: Orientation) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node {
            point,
            value,
            region,
            orientation,
            left: None,
            right: None,
        });
        idx
    }
}

impl<V> Debug for KdTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
