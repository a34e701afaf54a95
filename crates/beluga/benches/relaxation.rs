use beluga::graphlib::Graph;
use beluga::{find_potential, shortest_paths};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct GraphSpec {
    node_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl GraphSpec {
    fn build(&self) -> Graph<usize> {
        let mut g: Graph<usize> = Graph::new();

        for v in 0..self.node_count {
            g.set_node(v);
        }

        for &(from, to, cost) in &self.edges {
            if from >= self.node_count || to >= self.node_count || from == to {
                continue;
            }
            g.set_edge(from, to, cost);
        }

        g
    }
}

/// Forward-only edges keep the graph acyclic, so negative shortcuts are safe
/// while still forcing plenty of re-relaxation.
fn build_layered_spec(node_count: usize, fanout: usize) -> GraphSpec {
    let mut edges: Vec<(usize, usize, f64)> = Vec::new();

    // A spine to guarantee connectivity.
    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1, 2.0));
    }

    // Extra forward edges, some negative, to create relaxation pressure.
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_add(k);
            if to >= node_count {
                break;
            }
            let cost = if (i + k) % 3 == 0 { -1.0 } else { 1.5 };
            edges.push((i, to, cost));
        }
    }

    GraphSpec { node_count, edges }
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.measurement_time(Duration::from_secs(5));

    for &node_count in &[64usize, 256] {
        let spec = build_layered_spec(node_count, 4);
        group.bench_with_input(
            BenchmarkId::from_parameter(node_count),
            &spec,
            |b, spec| {
                b.iter_batched(
                    || spec.build(),
                    |g| black_box(shortest_paths(&g, &0)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_find_potential(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_potential");
    group.measurement_time(Duration::from_secs(5));

    for &node_count in &[64usize, 256] {
        let spec = build_layered_spec(node_count, 4);
        group.bench_with_input(
            BenchmarkId::from_parameter(node_count),
            &spec,
            |b, spec| {
                b.iter_batched(
                    || spec.build(),
                    |g| black_box(find_potential(&g)),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_paths, bench_find_potential);
criterion_main!(benches);
