// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`KdTree`](crate::KdTree) operations.

/// Invalid arguments rejected before the tree is touched.
///
/// Every variant is a caller bug rather than a transient condition: the call
/// that returned it had no effect and retrying with the same input fails
/// again.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A point argument has a NaN or infinite coordinate.
    #[error("point ({x}, {y}) must have finite coordinates")]
    NonFinitePoint {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },
    /// A query rectangle has a NaN edge or is inverted on some axis.
    #[error("rectangle ({x0}, {y0}, {x1}, {y1}) must satisfy x0 <= x1 and y0 <= y1")]
    InvalidRect {
        /// Minimum x.
        x0: f64,
        /// Minimum y.
        y0: f64,
        /// Maximum x.
        x1: f64,
        /// Maximum y.
        y1: f64,
    },
}

/// Shorthand for results of tree operations.
pub type Result<T> = core::result::Result<T, Error>;
