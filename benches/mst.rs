use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mstree::graph::VertexId;
use mstree::graph::generate::random_connected;
use mstree::mst::{kruskal, prim};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    for &vertices in &[100usize, 1_000, 10_000] {
        let mut rng = StdRng::seed_from_u64(vertices as u64);
        let graph = random_connected(&mut rng, vertices, vertices * 4, 1_000);
        group.bench_with_input(BenchmarkId::new("prim", vertices), &graph, |b, graph| {
            b.iter(|| prim(black_box(graph), VertexId::new(0)))
        });
        group.bench_with_input(BenchmarkId::new("kruskal", vertices), &graph, |b, graph| {
            b.iter(|| kruskal(black_box(graph)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
