use criterion::{black_box, criterion_group, criterion_main, Criterion};
use greedy_sssp::algorithm::dijkstra::Dijkstra;
use greedy_sssp::algorithm::traits::ShortestPathAlgorithm;
use greedy_sssp::graph::generators::{generate_gnp, generate_grid};

fn bench_dijkstra(c: &mut Criterion) {
    let dijkstra = Dijkstra::new();

    let gnp = generate_gnp(500, 0.02);
    c.bench_function("dijkstra_gnp_500", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&gnp), &0).unwrap())
    });

    let grid = generate_grid(40, 40);
    c.bench_function("dijkstra_grid_40x40", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&grid), &0).unwrap())
    });
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
