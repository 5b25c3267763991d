// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random points in the unit square, checked against a linear scan.
//!
//! Run:
//! - `cargo run -p understory_kdtree_demos --example kdtree_random -- [count] [seed]`
//! - `RUST_LOG=debug` prints how many nodes each query visited.

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_kdtree::KdTree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        // Xorshift has a fixed point at zero.
        Self(seed.max(1))
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point(&mut self) -> Point {
        Point::new(self.next_f64(), self.next_f64())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(10_000);
    let seed: u64 = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(0x00C0_FFEE);
    let mut rng = Rng::new(seed);

    let mut tree = KdTree::with_capacity(count);
    for i in 0..count {
        let _ = tree.insert(rng.point(), i)?;
    }
    let points: Vec<Point> = tree.points().collect();
    tracing::info!(len = tree.len(), depth = tree.depth(), "built tree");

    let query = rng.point();
    let (nearest, value, dist) = tree
        .nearest_entry(query)?
        .ok_or("tree is empty; pass a positive count")?;
    let brute = points
        .iter()
        .map(|p| p.distance(query))
        .fold(f64::INFINITY, f64::min);
    println!(
        "nearest to {:?}: {:?} (value {}, distance {:.6}, linear scan {:.6})",
        query, nearest, value, dist, brute
    );

    for (p, v, d) in tree.nearest_k(query, 5)? {
        println!("  {:?} -> {} at {:.6}", p, v, d);
    }

    let window = Rect::new(0.25, 0.25, 0.35, 0.3);
    let hits = tree.range(window)?.count();
    let brute = points
        .iter()
        .filter(|p| {
            (window.x0..=window.x1).contains(&p.x) && (window.y0..=window.y1).contains(&p.y)
        })
        .count();
    println!("points in {:?}: {} (linear scan {})", window, hits, brute);
    Ok(())
}
