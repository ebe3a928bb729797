use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion};
use interval_overlap::{Interval, IntervalTree};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("overlap_search");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree of narrow intervals, so most of it can be pruned.
    let mut rand = Lfsr::default();
    let t = (0..n_values)
        .map(|_| rand.next_narrow_interval(64))
        .collect::<IntervalTree<_>>();

    // A query near the top of the value domain prunes most subtrees.
    bench_query(
        "high",
        n_values,
        g,
        &t,
        Interval::new(u16::MAX - 512, u16::MAX).unwrap(),
    );

    // A query spanning the whole domain visits every node.
    bench_query("all", n_values, g, &t, Interval::new(0, u16::MAX).unwrap());
}

fn bench_query<M>(
    bench_name: &'static str,
    n_values: usize,
    g: &mut BenchmarkGroup<'_, M>,
    t: &IntervalTree<u16>,
    query: Interval<u16>,
) where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name,
    };
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(t.overlap_search(&query).count()));
    });
}
