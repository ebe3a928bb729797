//! Set operations over one or more [`IntervalTree`] instances.

use std::{borrow::Borrow, cmp::Ordering, fmt::Display};

use log::debug;

use crate::{
    error::InvariantViolation,
    interval::max_ref,
    node::{balance, height, Node},
    tree::IntervalTree,
};

/// Compute the pairwise overlaps of `a` and `b`.
///
/// The returned tree holds one interval for every (interval in `a`, interval
/// in `b`) pair that overlaps, trimmed to the intersection of the two.
///
/// ```
/// use interval_overlap::{algo::intersect, IntervalTree};
///
/// let mut a = IntervalTree::new();
/// a.insert(0..=10).unwrap();
///
/// let mut b = IntervalTree::new();
/// b.insert(2..=3).unwrap();
/// b.insert(8..=12).unwrap();
///
/// let got = intersect(&a, &b);
/// assert_eq!(got.collect_intervals(), [(2, 3), (8, 10)]);
/// ```
pub fn intersect<R>(a: &IntervalTree<R>, b: &IntervalTree<R>) -> IntervalTree<R>
where
    R: PartialOrd + Clone,
{
    let mut out = IntervalTree::new();

    if a.is_empty() || b.is_empty() {
        return out;
    }

    for v in a.level_order() {
        out.extend(b.overlap_search(v));
    }

    debug!(
        "intersected trees of {} and {} intervals into {} intervals",
        a.len(),
        b.len(),
        out.len()
    );

    out
}

/// Reduce `trees` to the intervals common to all of them by folding
/// [`intersect()`] from left to right.
///
/// Returns an empty tree when `trees` is empty, and a copy of the only tree
/// when it contains a single entry. Once the accumulated result is empty the
/// remaining trees are not visited, as every subsequent intersection is empty
/// too.
///
/// ```
/// use interval_overlap::{algo::reduce, IntervalTree};
///
/// let mut a = IntervalTree::new();
/// a.insert(0..=5).unwrap();
///
/// let mut b = IntervalTree::new();
/// b.insert(3..=9).unwrap();
///
/// let mut c = IntervalTree::new();
/// c.insert(4..=4).unwrap();
///
/// let got = reduce([&a, &b, &c]);
/// assert_eq!(got.collect_intervals(), [(4, 4)]);
/// ```
pub fn reduce<R, I, T>(trees: I) -> IntervalTree<R>
where
    R: PartialOrd + Clone,
    I: IntoIterator<Item = T>,
    T: Borrow<IntervalTree<R>>,
{
    let mut trees = trees.into_iter();

    let Some(first) = trees.next() else {
        debug!("reducing empty tree list");
        return IntervalTree::new();
    };
    let Some(second) = trees.next() else {
        return first.borrow().clone();
    };

    let mut acc = intersect(first.borrow(), second.borrow());
    let mut folded = 2;
    let mut short_circuit = false;
    for t in trees {
        if acc.is_empty() {
            short_circuit = true;
            break;
        }
        acc = intersect(&acc, t.borrow());
        folded += 1;
    }

    debug!(
        "folded {folded} trees into {} common intervals (stopped early: {short_circuit})",
        acc.len()
    );

    acc
}

/// Returns true if `a` and `b` hold the same multiset of intervals,
/// regardless of the shape of either tree.
pub fn equivalent<R>(a: &IntervalTree<R>, b: &IntervalTree<R>) -> bool
where
    R: PartialOrd + Clone,
{
    if a.len() != b.len() {
        return false;
    }

    // The in-order walk is sorted by low endpoint only; intervals sharing a
    // low endpoint may appear in any order.
    let sorted = |t: &IntervalTree<R>| {
        let mut v = t.collect_intervals();
        v.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
        v
    };

    sorted(a) == sorted(b)
}

/// Returns true if [`validate()`] finds no broken invariant.
pub fn is_valid<R>(t: &IntervalTree<R>) -> bool
where
    R: PartialOrd + Display,
{
    validate(t).is_ok()
}

/// Assert the BST, AVL and interval tree properties of every node in `t`, and
/// that the reported size matches the number of reachable nodes.
///
/// The subtree max of each node is checked against a full recomputation from
/// the intervals beneath it, not against the cached values of its children.
pub fn validate<R>(t: &IntervalTree<R>) -> Result<(), InvariantViolation>
where
    R: PartialOrd + Display,
{
    let found = match t.root() {
        Some(root) => validate_subtree(root, None, None)?.0,
        None => 0,
    };

    if found != t.len() {
        return Err(InvariantViolation::Size {
            reported: t.len(),
            found,
        });
    }

    Ok(())
}

/// Validate the subtree rooted at `n`, where `lower` and `upper` are the
/// nearest ancestors that `n` descends to the right and left of respectively.
///
/// Returns the number of nodes and the true max of the subtree.
fn validate_subtree<'a, R>(
    n: &'a Node<R>,
    lower: Option<&'a Node<R>>,
    upper: Option<&'a Node<R>>,
) -> Result<(usize, &'a R), InvariantViolation>
where
    R: PartialOrd + Display,
{
    let low = n.interval().low();

    // Invariant 1: every node in a left subtree has a low endpoint less than
    // or equal to the subtree's parent.
    if let Some(upper) = upper.filter(|v| low > v.interval().low()) {
        return Err(InvariantViolation::LeftOrder {
            node: upper.interval().to_string(),
            child: n.interval().to_string(),
        });
    }

    // Invariant 2: and every node in a right subtree a low endpoint greater
    // than or equal to it.
    if let Some(lower) = lower.filter(|v| low < v.interval().low()) {
        return Err(InvariantViolation::RightOrder {
            node: lower.interval().to_string(),
            child: n.interval().to_string(),
        });
    }

    let mut count = 1;
    let mut subtree_max = n.interval().high();

    if let Some(left) = n.left() {
        let (c, m) = validate_subtree(left, lower, Some(n))?;
        count += c;
        subtree_max = max_ref(subtree_max, m);
    }
    if let Some(right) = n.right() {
        let (c, m) = validate_subtree(right, Some(n), upper)?;
        count += c;
        subtree_max = max_ref(subtree_max, m);
    }

    // Invariant 3: the height of this node is always +1 of the maximum child
    // height.
    let want = height(n.left()).max(height(n.right())) + 1;
    if n.height() != want {
        return Err(InvariantViolation::Height {
            node: n.interval().to_string(),
            got: n.height(),
            want,
        });
    }

    // Invariant 4: the absolute height difference between the left subtree
    // and right subtree (the "balance factor") cannot exceed 1.
    let b = balance(n);
    if b.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            node: n.interval().to_string(),
            balance: b,
        });
    }

    // Invariant 5: the cached subtree max is the greatest upper bound of any
    // interval in the subtree.
    if n.subtree_max() != subtree_max {
        return Err(InvariantViolation::SubtreeMax {
            node: n.interval().to_string(),
        });
    }

    Ok((count, subtree_max))
}
