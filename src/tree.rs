use std::ops::RangeInclusive;

use crate::{
    dot,
    error::IntervalError,
    interval::Interval,
    iter::{Iter, LevelOrder, OverlapSearch, OwnedIter},
    node::Node,
};

/// A self-balancing (AVL) binary search tree of closed intervals, augmented
/// with the maximum upper bound of each subtree.
///
/// Intervals are ordered by their low endpoint. Duplicate intervals are
/// permitted and each is stored as a distinct node.
///
/// ```
/// use interval_overlap::{Interval, IntervalTree};
///
/// let mut t = IntervalTree::new();
/// t.insert(0..=2).unwrap();
/// t.insert(3..=7).unwrap();
/// t.insert(9..=11).unwrap();
///
/// let query = Interval::new(6, 10).unwrap();
/// let mut got = t.overlap_search(&query).collect::<Vec<_>>();
/// got.sort_by_key(|v| *v.low());
///
/// assert_eq!(got, [Interval::new(6, 7).unwrap(), Interval::new(9, 10).unwrap()]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalTree<R> {
    root: Option<Box<Node<R>>>,
    pub(crate) size: usize,
}

impl<R> Default for IntervalTree<R> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<R> IntervalTree<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of intervals stored in this tree.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The AVL height of the tree; 0 when empty, 1 for a single interval.
    pub fn height(&self) -> u8 {
        crate::node::height(self.root())
    }

    /// The greatest upper bound of all intervals in the tree, if any.
    pub fn max(&self) -> Option<&R> {
        self.root().map(|v| v.subtree_max())
    }

    /// Iterate over all intervals in ascending low endpoint order.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root())
    }

    /// Iterate over all intervals breadth-first, starting at the root.
    pub fn level_order(&self) -> LevelOrder<'_, R> {
        LevelOrder::new(self.root())
    }

    /// Return the `(low, high)` endpoints of every interval in ascending low
    /// endpoint order.
    pub fn collect_intervals(&self) -> Vec<(R, R)>
    where
        R: Clone,
    {
        self.iter()
            .map(|v| (v.low().clone(), v.high().clone()))
            .collect()
    }

    pub(crate) fn root(&self) -> Option<&Node<R>> {
        self.root.as_deref()
    }
}

impl<R> IntervalTree<R>
where
    R: PartialOrd + Clone,
{
    /// Insert the closed interval spanned by `range`.
    ///
    /// The endpoints may be given in either order. Returns
    /// [`IntervalError::InvalidArgument`] without modifying the tree if the
    /// endpoints are not comparable.
    pub fn insert(&mut self, range: RangeInclusive<R>) -> Result<(), IntervalError> {
        let interval = Interval::try_from(range)?;
        self.insert_interval(interval);
        Ok(())
    }

    /// Insert an already validated [`Interval`].
    pub fn insert_interval(&mut self, interval: Interval<R>) {
        match self.root {
            Some(ref mut v) => v.insert(interval),
            None => self.root = Some(Box::new(Node::new(interval))),
        }

        self.size += 1;
    }

    /// Find every stored interval overlapping `query`, yielding the
    /// intersection of the two in breadth-first tree order.
    ///
    /// Subtrees whose greatest upper bound is below `query.low()` are not
    /// visited.
    pub fn overlap_search<'a>(&'a self, query: &'a Interval<R>) -> OverlapSearch<'a, R> {
        OverlapSearch::new(self.root(), query)
    }

    /// Render this tree in the Graphviz DOT language, labelling each node with
    /// its interval, subtree max and height.
    pub fn to_dot(&self) -> String
    where
        R: std::fmt::Display,
    {
        dot::print_dot(self.root())
    }
}

impl<R> IntoIterator for IntervalTree<R> {
    type Item = Interval<R>;
    type IntoIter = OwnedIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root)
    }
}

impl<'a, R> IntoIterator for &'a IntervalTree<R> {
    type Item = &'a Interval<R>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R> Extend<Interval<R>> for IntervalTree<R>
where
    R: PartialOrd + Clone,
{
    fn extend<T: IntoIterator<Item = Interval<R>>>(&mut self, iter: T) {
        for v in iter {
            self.insert_interval(v);
        }
    }
}

impl<R> FromIterator<Interval<R>> for IntervalTree<R>
where
    R: PartialOrd + Clone,
{
    fn from_iter<T: IntoIterator<Item = Interval<R>>>(iter: T) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}
