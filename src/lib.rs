//! An AVL interval tree of closed intervals, augmented with the maximum upper
//! bound of each subtree, and set operations that reduce many such trees to
//! the intervals common to all of them.
//!
//! ```
//! use interval_overlap::{algo::reduce, IntervalTree};
//!
//! let mut alice = IntervalTree::new();
//! alice.insert(9..=12).unwrap();
//! alice.insert(14..=17).unwrap();
//!
//! let mut bob = IntervalTree::new();
//! bob.insert(11..=15).unwrap();
//!
//! let common = reduce([alice, bob]);
//! assert_eq!(common.collect_intervals(), [(11, 12), (14, 15)]);
//! ```
//!
//! Trees are not internally synchronised. Concurrent reads of an unmodified
//! tree are safe, mutation requires exclusive access (`&mut`).

pub mod algo;
mod dot;
pub mod error;
mod interval;
pub mod iter;
mod node;
pub mod schedule;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::IntervalError;
pub use interval::Interval;
pub use tree::IntervalTree;
