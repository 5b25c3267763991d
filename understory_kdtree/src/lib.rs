// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory KD-Tree: a Kurbo-native 2-d tree symbol table.
//!
//! Understory KD-Tree maps points in the plane to values and answers two
//! geometric questions without scanning every entry:
//!
//! - Which stored points lie inside an axis-aligned rectangle? See [`KdTree::range`].
//! - Which stored point is closest to a query point? See [`KdTree::nearest`] and
//!   [`KdTree::nearest_k`].
//!
//! Points are [`kurbo::Point`]s and query rectangles are [`kurbo::Rect`]s. Unlike
//! [`kurbo::Rect::contains`], range queries treat rectangles as closed: points on
//! any edge are included.
//!
//! # Example
//!
//! ```rust
//! use understory_kdtree::KdTree;
//! use kurbo::{Point, Rect};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.0, 0.0), 1)?;
//! tree.insert(Point::new(1.0, 1.0), 2)?;
//! tree.insert(Point::new(2.0, 1.0), 3)?;
//!
//! // Re-inserting a point replaces its value.
//! assert_eq!(tree.insert(Point::new(1.0, 1.0), 4)?, Some(2));
//! assert_eq!(tree.len(), 3);
//!
//! let inside: Vec<_> = tree.range(Rect::new(-1.0, -1.0, 1.0, 1.0))?.collect();
//! assert_eq!(inside.len(), 2);
//!
//! assert_eq!(tree.nearest(Point::new(-1.0, 1.0))?, Some(Point::new(0.0, 0.0)));
//! # Ok::<(), understory_kdtree::Error>(())
//! ```
//!
//! ## Shape and cost
//!
//! The tree is never rebalanced and nothing is ever removed, so its shape is a
//! function of insertion order. Random insertion order gives logarithmic
//! expected depth; sorted input degenerates into a list. All traversals use
//! explicit stacks or queues, so degenerate trees are slow but never overflow
//! the call stack.
//!
//! ## Invalid input
//!
//! Points with NaN or infinite coordinates, and rectangles that are inverted or
//! have NaN edges, are rejected with an [`Error`] before the tree is touched.
//! Zero-area rectangles, repeated points and queries on an empty tree are all
//! valid.
//!
//! ## Logging
//!
//! Insertions emit `trace` events and queries emit a `debug` summary (nodes
//! visited versus tree size) through [`tracing`]. Nothing is recorded unless
//! the application installs a subscriber.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo on `libm` for `no_std` targets.

#![no_std]

extern crate alloc;

pub mod error;
pub mod iter;
mod nearest;
pub mod range;
pub mod tree;
mod types;


pub use error::{Error, Result};
pub use iter::{Iter, Points};
pub use range::{Range, RangeEntries};
pub use tree::KdTree;
