use log::trace;

use crate::interval::{max_ref, Interval};

#[derive(Debug, Clone)]
pub(crate) struct Node<R> {
    /// Child nodes pointers.
    left: Option<Box<Node<R>>>,
    right: Option<Box<Node<R>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent child is considered to have a
    /// height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: R,

    interval: Interval<R>,
}

impl<R> Node<R> {
    pub(crate) fn new(interval: Interval<R>) -> Self
    where
        R: Clone,
    {
        Self {
            subtree_max: interval.high().clone(),
            interval,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `interval` into the subtree rooted at `self`, rebalancing every
    /// node on the path back up to `self`.
    ///
    /// Intervals are ordered by their low endpoint only. Equal low endpoints
    /// (including exact duplicates) are placed in the right subtree.
    pub(crate) fn insert(self: &mut Box<Self>, interval: Interval<R>)
    where
        R: PartialOrd + Clone,
    {
        let child = if interval.low() < self.interval.low() {
            &mut self.left
        } else {
            &mut self.right
        };

        match child {
            Some(v) => v.insert(interval),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(interval)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                update_subtree_max(self);
                return;
            }
        };

        rebalance(self);
    }

    pub(crate) fn interval(&self) -> &Interval<R> {
        &self.interval
    }

    pub(crate) fn subtree_max(&self) -> &R {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn into_interval(self) -> Interval<R> {
        self.interval
    }
}

pub(crate) fn height<R>(n: Option<&Node<R>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<R>(n: &mut Node<R>) {
    n.height = height(n.left()).max(height(n.right())) + 1;
}

/// Recompute the subtree max of `n` from its own upper bound and the cached
/// subtree max of its direct children.
///
/// The children must already hold a correct subtree max.
fn update_subtree_max<R>(n: &mut Node<R>)
where
    R: PartialOrd + Clone,
{
    let mut new_max = n.interval.high();
    for child in [n.left(), n.right()].into_iter().flatten() {
        new_max = max_ref(new_max, child.subtree_max());
    }

    n.subtree_max = new_max.clone();
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<R>(n: &Node<R>) -> i16 {
    height(n.left()) as i16 - height(n.right()) as i16
}

/// Restore the height, AVL balance and subtree max of `v`, assuming both child
/// subtrees are already well-formed.
///
/// The rotation case is chosen from the balance of the heavy child, not from
/// the value that was inserted.
fn rebalance<R>(v: &mut Box<Node<R>>)
where
    R: PartialOrd + Clone,
{
    update_height(v);

    match balance(v) {
        // Left-Left
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        // Left-Right
        (2..) => {
            if let Some(l) = v.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        // Right-Right
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        // Right-Left
        (..=-2) => {
            if let Some(r) = v.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    update_subtree_max(v);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(v).abs() <= 1);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A no-op if `x` has no right child.
fn rotate_left<R>(x: &mut Box<Node<R>>)
where
    R: PartialOrd + Clone,
{
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    // "p" is now the demoted node, updated before its new parent.
    p.right = x.left.take();
    update_height(&mut p);
    update_subtree_max(&mut p);

    x.left = Some(p);
    update_height(x);
    update_subtree_max(x);

    trace!("rotate left, new subtree height {}", x.height);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A no-op if `y` has no left child.
fn rotate_right<R>(y: &mut Box<Node<R>>)
where
    R: PartialOrd + Clone,
{
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);
    update_subtree_max(&mut p);

    y.right = Some(p);
    update_height(y);
    update_subtree_max(y);

    trace!("rotate right, new subtree height {}", y.height);
}
