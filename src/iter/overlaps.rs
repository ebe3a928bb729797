use std::collections::VecDeque;

use crate::{interval::Interval, node::Node};

/// An [`Iterator`] that performs a breadth-first walk of a tree, yielding the
/// intersection of the query with every stored interval that overlaps it.
///
/// Results are yielded in level order, not sorted order.
///
/// A subtree is only visited if its subtree max is at least the query's low
/// endpoint; otherwise every interval within it ends before the query starts.
#[derive(Debug)]
pub struct OverlapSearch<'a, R> {
    query: &'a Interval<R>,
    queue: VecDeque<&'a Node<R>>,
}

impl<'a, R> OverlapSearch<'a, R>
where
    R: PartialOrd,
{
    pub(crate) fn new(root: Option<&'a Node<R>>, query: &'a Interval<R>) -> Self {
        let mut this = Self {
            queue: VecDeque::new(),
            query,
        };

        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<R>) {
        if subtree_root.subtree_max() < self.query.low() {
            // Prune this subtree rooted at "subtree_root" from the search.
            //
            // All intervals in this subtree end strictly before the query
            // starts.
            return;
        }

        self.queue.push_back(subtree_root);
    }
}

impl<R> Iterator for OverlapSearch<'_, R>
where
    R: PartialOrd + Clone,
{
    type Item = Interval<R>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.queue.pop_front()?;

            for child in [v.left(), v.right()].into_iter().flatten() {
                self.push_subtree(child);
            }

            if let Some(overlap) = v.interval().intersection(self.query) {
                return Some(overlap);
            }
        }
    }
}
