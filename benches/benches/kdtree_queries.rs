// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
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
}

fn gen_random_points(count: usize, extent: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(rng.next_f64() * extent, rng.next_f64() * extent));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point]) -> KdTree<u32> {
    let mut tree = KdTree::with_capacity(points.len());
    for (i, p) in points.iter().copied().enumerate() {
        let _ = tree.insert(p, i as u32).unwrap();
    }
    tree
}

fn scan_nearest(points: &[Point], q: Point) -> Option<Point> {
    points
        .iter()
        .copied()
        .min_by(|a, b| a.distance_squared(q).total_cmp(&b.distance_squared(q)))
}

fn scan_range(points: &[Point], r: Rect) -> usize {
    points
        .iter()
        .filter(|p| r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1)
        .count()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_insert");
    for &n in &[1_024usize, 16_384, 131_072] {
        let points = gen_random_points(n, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                || KdTree::<u32>::with_capacity(n),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32).unwrap();
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_range");
    for &n in &[1_024usize, 16_384, 131_072] {
        let points = gen_random_points(n, 2000.0);
        let tree = build(&points);
        let window = Rect::new(800.0, 800.0, 900.0, 900.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("tree_n{}", n), |b| {
            b.iter(|| black_box(tree.range(black_box(window)).unwrap().count()))
        });
        group.bench_function(format!("scan_n{}", n), |b| {
            b.iter(|| black_box(scan_range(&points, black_box(window))))
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_nearest");
    for &n in &[1_024usize, 16_384, 131_072] {
        let points = gen_random_points(n, 2000.0);
        let tree = build(&points);
        let queries = gen_random_points(256, 2000.0);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest(*q).unwrap());
                }
            })
        });
        if n <= 16_384 {
            group.bench_function(format!("scan_n{}", n), |b| {
                b.iter(|| {
                    for q in &queries {
                        black_box(scan_nearest(&points, *q));
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_nearest_k_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_nearest_k_clustered");
    let points = gen_clustered_points(16, 1024, 128.0);
    let tree = build(&points);
    let queries = gen_random_points(256, 2000.0);
    for &k in &[1usize, 8, 32] {
        group.bench_function(format!("k{}", k), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in &queries {
                    total += tree.nearest_k(*q, k).unwrap().len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_sorted_insert(c: &mut Criterion) {
    // Sorted input degenerates into a list; keep n small.
    let mut group = c.benchmark_group("kdtree_sorted_insert");
    let points: Vec<Point> = (0..2_048).map(|i| Point::new(i as f64, i as f64)).collect();
    group.bench_function("diagonal_n2048", |b| {
        b.iter(|| black_box(build(&points).depth()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_range,
    bench_nearest,
    bench_nearest_k_clustered,
    bench_sorted_insert,
);
criterion_main!(benches);
