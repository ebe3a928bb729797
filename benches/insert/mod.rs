use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_overlap::{Interval, IntervalTree};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    input: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.input), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, "random", n_values, Lfsr::next_interval);

        // Every interval shares one of 4 low endpoints, so the tree is built
        // almost entirely from equal-key inserts sent to the right subtree.
        bench_param(&mut g, "duplicate_low", n_values, |rand| {
            let low = rand.next() % 4;
            Interval::new(low, low + rand.next() % 1_024).unwrap()
        });
    }
}

/// Measure the time needed to insert `n_values` intervals drawn from `draw` into
/// an empty tree.
fn bench_param<M, F>(
    g: &mut BenchmarkGroup<'_, M>,
    input: &'static str,
    n_values: usize,
    draw: F,
)
where
    M: Measurement,
    F: Fn(&mut Lfsr) -> Interval<u16>,
{
    let values = {
        let mut rand = Lfsr::default();
        (0..n_values).map(|_| draw(&mut rand)).collect::<Vec<_>>()
    };

    let bench_name = BenchName { input, n_values };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || values.clone(),
            |values| {
                let mut t = IntervalTree::new();
                for v in values {
                    t.insert_interval(v);
                }
                t
            },
            criterion::BatchSize::SmallInput,
        );
    });
}
