use proptest::prelude::*;

use crate::{interval::Interval, tree::IntervalTree};

const RANGE_MAX: usize = 20;

/// Generate arbitrary intervals with bounds from [0..[`RANGE_MAX`]).
///
/// The endpoints are drawn independently, so roughly half are provided in
/// reverse order and exercise normalisation.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(a, b)| Interval::new(a, b).unwrap())
}

/// Generate intervals that share one of very few low endpoints, producing long
/// runs of ties.
pub(crate) fn duplicate_heavy_interval() -> impl Strategy<Value = Interval<usize>> {
    (prop_oneof![Just(5_usize), Just(10)], 0..3_usize)
        .prop_map(|(low, len)| Interval::new(low, low + len).unwrap())
}

/// Generate a tree populated with up to `max_len` arbitrary intervals.
pub(crate) fn arbitrary_tree(max_len: usize) -> impl Strategy<Value = IntervalTree<usize>> {
    prop::collection::vec(arbitrary_interval(), 0..max_len)
        .prop_map(|v| v.into_iter().collect::<IntervalTree<_>>())
}

/// Build a tree from `(low, high)` endpoint pairs.
pub(crate) fn tree_of(values: &[(usize, usize)]) -> IntervalTree<usize> {
    values
        .iter()
        .map(|&v| Interval::try_from(v).unwrap())
        .collect()
}
