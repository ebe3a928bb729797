use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_overlap::{algo::reduce, Interval, IntervalTree};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_trees: usize,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("n_trees={}/n_values", v.n_trees), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("reduce");

    for n_trees in [2, 8] {
        for n_values in [10, 100, 1_000] {
            bench_param(&mut g, n_trees, n_values)
        }
    }
}

/// Measure the time needed to reduce `n_trees` trees, each holding `n_values`
/// random points, to their common intervals.
///
/// Each tree holds distinct points (the LFSR does not repeat within a cycle),
/// so every fold step yields at most as many intervals as the smaller input
/// and the output never exceeds `n_values`. Wide intervals would instead
/// produce one result per overlapping pair and grow with every tree folded.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_trees: usize, n_values: usize)
where
    M: Measurement,
{
    let trees = (0..n_trees)
        .map(|i| {
            let mut rand = Lfsr::with_seed(42 + i as u16);
            (0..n_values)
                .map(|_| Interval::from_point(rand.next()))
                .collect::<IntervalTree<_>>()
        })
        .collect::<Vec<_>>();

    let bench_name = BenchName { n_trees, n_values };
    g.throughput(Throughput::Elements((n_trees * n_values) as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(reduce(&trees)));
    });
}
