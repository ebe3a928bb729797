use thiserror::Error;

/// Errors returned when constructing or inserting an [`Interval`].
///
/// [`Interval`]: crate::Interval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// An endpoint cannot be ordered against itself or the other endpoint
    /// (for example `f64::NAN`).
    #[error("invalid interval endpoint: endpoints must be comparable numbers")]
    InvalidArgument,
}

/// A broken structural invariant reported by [`validate()`].
///
/// [`validate()`]: crate::algo::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("node {node} has a left descendant {child} with a greater low endpoint")]
    LeftOrder { node: String, child: String },

    #[error("node {node} has a right descendant {child} with a lesser low endpoint")]
    RightOrder { node: String, child: String },

    #[error("node {node} has height {got}, want {want}")]
    Height { node: String, got: u8, want: u8 },

    #[error("node {node} has balance factor {balance}")]
    Unbalanced { node: String, balance: i16 },

    #[error("node {node} caches an incorrect subtree max")]
    SubtreeMax { node: String },

    #[error("tree reports {reported} nodes, found {found}")]
    Size { reported: usize, found: usize },
}

/// Errors returned when constructing a [`Slot`].
///
/// [`Slot`]: crate::schedule::Slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("hour {0} is out of range, must be less than 24")]
    HourOutOfRange(u32),
}
