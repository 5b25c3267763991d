// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting orientation and the closed-rectangle geometry used by the tree.
//!
//! Kurbo's [`Rect::contains`] treats the maximum edges as exclusive. The tree
//! needs closed rectangles everywhere (range results include boundary points,
//! and sibling regions share their splitting line), so the predicates here
//! are inclusive on every edge.
//!
//! None of this is part of the public API:
//!
//! ```compile_fail
//! use understory_kdtree::types::Orientation;
//! ```

use kurbo::{Point, Rect};

use crate::error::Error;

/// Which coordinate a node compares to route its descendants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Orientation {
    /// Splits on the x coordinate: left is `x < split`, right is `x >= split`.
    Vertical,
    /// Splits on the y coordinate: left is `y < split`, right is `y >= split`.
    Horizontal,
}

impl Orientation {
    /// The orientation used by children of a node with this orientation.
    #[inline]
    pub(crate) const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The coordinate of `p` this orientation splits on.
    #[inline]
    pub(crate) const fn coord(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.x,
            Self::Horizontal => p.y,
        }
    }

    /// Whether `p` routes to the left (lower) child of a node at `split`.
    ///
    /// Ties route right.
    #[inline]
    pub(crate) fn goes_left(self, p: Point, split: Point) -> bool {
        self.coord(p) < self.coord(split)
    }

    /// Split `region` at `split`, returning the `(left, right)` child regions.
    pub(crate) fn carve(self, region: Rect, split: Point) -> (Rect, Rect) {
        match self {
            Self::Vertical => (
                Rect::new(region.x0, region.y0, split.x, region.y1),
                Rect::new(split.x, region.y0, region.x1, region.y1),
            ),
            Self::Horizontal => (
                Rect::new(region.x0, region.y0, region.x1, split.y),
                Rect::new(region.x0, split.y, region.x1, region.y1),
            ),
        }
    }
}

/// The region owned by the root: the whole plane.
pub(crate) const UNBOUNDED: Rect = Rect::new(
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::INFINITY,
);

/// Whether the closed rectangle contains the point.
#[inline]
pub(crate) fn contains_point(rect: &Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

/// Whether two closed rectangles overlap. Touching edges count.
#[inline]
pub(crate) fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Squared distance from `p` to the closest point of the closed rectangle.
///
/// Zero when `p` is inside or on the boundary. Infinite edges are fine as
/// long as `p` itself is finite.
#[inline]
pub(crate) fn distance_squared_to_rect(rect: &Rect, p: Point) -> f64 {
    let dx = axis_gap(p.x, rect.x0, rect.x1);
    let dy = axis_gap(p.y, rect.y0, rect.y1);
    dx * dx + dy * dy
}

#[inline]
fn axis_gap(v: f64, min: f64, max: f64) -> f64 {
    if v < min {
        min - v
    } else if v > max {
        v - max
    } else {
        0.0
    }
}

pub(crate) fn check_point(p: Point) -> Result<Point, Error> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(p)
    } else {
        Err(Error::NonFinitePoint { x: p.x, y: p.y })
    }
}

/// Infinite edges pass; NaN edges and inverted axes do not.
pub(crate) fn check_rect(r: Rect) -> Result<Rect, Error> {
    if r.x0 <= r.x1 && r.y0 <= r.y1 {
        Ok(r)
    } else {
        Err(Error::InvalidRect {
            x0: r.x0,
            y0: r.y0,
            x1: r.x1,
            y1: r.y1,
        })
    }
}
