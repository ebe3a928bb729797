use std::collections::VecDeque;

use crate::{interval::Interval, node::Node};

/// A breadth-first [`Iterator`] over the intervals of an [`IntervalTree`],
/// yielding the root first and then each level from left to right.
///
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug)]
pub struct LevelOrder<'a, R> {
    queue: VecDeque<&'a Node<R>>,
}

impl<'a, R> LevelOrder<'a, R> {
    pub(crate) fn new(root: Option<&'a Node<R>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, R> Iterator for LevelOrder<'a, R> {
    type Item = &'a Interval<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        self.queue.extend(v.left().into_iter().chain(v.right()));
        Some(v.interval())
    }
}
