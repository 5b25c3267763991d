// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory KD-Tree: insert, look up, range and nearest queries.

use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

fn main() -> Result<(), understory_kdtree::Error> {
    let mut tree = KdTree::new();
    let _ = tree.insert(Point::new(0.0, 0.0), 1)?;
    let _ = tree.insert(Point::new(1.0, 1.0), 2)?;
    let _ = tree.insert(Point::new(2.0, 1.0), 3)?;

    // Replace the value at (1, 1).
    let old = tree.insert(Point::new(1.0, 1.0), 4)?;
    println!("replaced {:?}, size is still {}", old, tree.len());

    let hits: Vec<_> = tree.range(Rect::new(-1.0, -1.0, 1.0, 1.0))?.collect();
    println!("points in [-1, 1]²: {:?}", hits);

    let nearest = tree.nearest(Point::new(-1.0, 1.0))?;
    println!("nearest to (-1, 1): {:?}", nearest);
    Ok(())
}
