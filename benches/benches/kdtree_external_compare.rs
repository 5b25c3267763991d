// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Offset odd rows so the grid is not axis-degenerate.
            let jitter = if y % 2 == 1 { cell * 0.5 } else { 0.0 };
            out.push(Point::new(x as f64 * cell + jitter, y as f64 * cell));
        }
    }
    out
}

/// Row-major grid order is close to sorted; shuffle deterministically so the
/// unbalanced tree sees a realistic insertion order.
fn shuffled(mut v: Vec<Point>) -> Vec<Point> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    for i in (1..v.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let j = (state % (i as u64 + 1)) as usize;
        v.swap(i, j);
    }
    v
}

fn bench_kdtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_external_compare");
    for &n in &[64usize, 128] {
        let points = shuffled(gen_grid_points(n, 10.0));
        let window = Rect::new(100.0, 100.0, 500.0, 500.0);
        let probe = Point::new(333.3, 444.4);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || KdTree::<u32>::with_capacity(points.len()),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32).unwrap();
                    }
                    let hits = tree.range(window).unwrap().count();
                    let near = tree.nearest(probe).unwrap();
                    black_box((hits, near));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let aabb =
                        AABB::from_corners([window.x0, window.y0], [window.x1, window.y1]);
                    let hits = tree.locate_in_envelope(&aabb).count();
                    let near = tree.nearest_neighbor(&[probe.x, probe.y]).copied();
                    black_box((hits, near));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kdtree_external_compare);
criterion_main!(benches);
