use crate::{interval::Interval, node::Node};

/// An iterator of owned [`Interval`] instances in ascending low endpoint
/// order, as the underlying tree `into_iter()` impl.
#[derive(Debug)]
pub struct OwnedIter<R> {
    stack: Vec<Box<Node<R>>>,
}

impl<R> OwnedIter<R> {
    pub(crate) fn new(root: Option<Box<Node<R>>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<R>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<R> Iterator for OwnedIter<R> {
    type Item = Interval<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_interval())
    }
}
