// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three points, one overwrite, and every query kind.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_kdtree_demos --example kdtree_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_kdtree::KdTree;

fn main() -> Result<(), understory_kdtree::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 1.0);
    let c = Point::new(2.0, 1.0);

    let mut tree = KdTree::new();
    let _ = tree.insert(a, 1)?;
    let _ = tree.insert(b, 2)?;
    let _ = tree.insert(c, 3)?;

    println!("is_empty: {}", tree.is_empty()); // false
    println!("len: {}", tree.len()); // 3
    println!("get(a): {:?}", tree.get(a)?); // Some(1)
    println!("get(b): {:?}", tree.get(b)?); // Some(2)

    let _ = tree.insert(b, 4)?;
    println!("len after overwrite: {}", tree.len()); // 3
    println!("get(b): {:?}", tree.get(b)?); // Some(4)

    println!("contains (2, 2): {}", tree.contains(Point::new(2.0, 2.0))?); // false

    let all: Vec<_> = tree.points().collect();
    println!("points: {:?}", all); // a, b and c

    let hits: Vec<_> = tree.range(Rect::new(-1.0, -1.0, 1.0, 1.0))?.collect();
    println!("range [-1, 1]²: {:?}", hits); // a and b

    println!("nearest(a): {:?}", tree.nearest(a)?); // a
    println!("nearest(-1, 1): {:?}", tree.nearest(Point::new(-1.0, 1.0))?); // a

    match tree.insert(Point::new(f64::NAN, 0.0), 5) {
        Ok(_) => println!("unexpected: NaN point accepted"),
        Err(e) => println!("rejected: {e}"),
    }
    Ok(())
}
