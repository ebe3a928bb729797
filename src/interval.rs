use std::{cmp::Ordering, fmt::Display, ops::RangeInclusive};

use crate::error::IntervalError;

/// A closed interval `[low, high]` over a numeric endpoint type `R`.
///
/// Both endpoints are included: `[1, 3]` and `[3, 5]` overlap at 3. An
/// [`Interval`] is normalised at construction, so `low <= high` always holds
/// regardless of the order the endpoints were provided in.
///
/// ```
/// use interval_overlap::Interval;
///
/// let a = Interval::new(7, 3).unwrap();
/// assert_eq!((*a.low(), *a.high()), (3, 7));
///
/// // Endpoints that cannot be ordered are rejected.
/// assert!(Interval::new(1.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<R> {
    low: R,
    high: R,
}

impl<R> Interval<R>
where
    R: PartialOrd,
{
    /// Construct a new [`Interval`] spanning the two endpoints, in any order.
    ///
    /// Returns [`IntervalError::InvalidArgument`] if either endpoint is not
    /// comparable with itself or with the other endpoint.
    pub fn new(a: R, b: R) -> Result<Self, IntervalError> {
        // A NaN-like value is not equal to itself.
        if a.partial_cmp(&a).is_none() || b.partial_cmp(&b).is_none() {
            return Err(IntervalError::InvalidArgument);
        }

        match a.partial_cmp(&b) {
            Some(Ordering::Greater) => Ok(Self { low: b, high: a }),
            Some(_) => Ok(Self { low: a, high: b }),
            None => Err(IntervalError::InvalidArgument),
        }
    }

    /// Returns true if `self` and `other` share at least one point.
    ///
    /// Touching endpoints count as an overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Return the interval covered by both `self` and `other`, if any.
    ///
    /// ```
    /// use interval_overlap::Interval;
    ///
    /// let a = Interval::new(0, 5).unwrap();
    /// let b = Interval::new(3, 9).unwrap();
    /// assert_eq!(a.intersection(&b), Some(Interval::new(3, 5).unwrap()));
    ///
    /// let c = Interval::new(6, 9).unwrap();
    /// assert_eq!(a.intersection(&c), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self>
    where
        R: Clone,
    {
        if !self.overlaps(other) {
            return None;
        }

        Some(Self {
            low: max_ref(&self.low, &other.low).clone(),
            high: min_ref(&self.high, &other.high).clone(),
        })
    }
}

impl<R> Interval<R>
where
    R: Ord + Clone,
{
    /// Construct the degenerate interval `[v, v]`.
    ///
    /// Totally ordered endpoints are always valid, so this cannot fail.
    pub fn from_point(v: R) -> Self {
        Self {
            low: v.clone(),
            high: v,
        }
    }
}

impl<R> Interval<R> {
    pub fn low(&self) -> &R {
        &self.low
    }

    pub fn high(&self) -> &R {
        &self.high
    }

    /// Explode this [`Interval`] into its `(low, high)` endpoints.
    pub fn into_inner(self) -> (R, R) {
        (self.low, self.high)
    }
}

impl<R> TryFrom<RangeInclusive<R>> for Interval<R>
where
    R: PartialOrd,
{
    type Error = IntervalError;

    fn try_from(value: RangeInclusive<R>) -> Result<Self, Self::Error> {
        let (a, b) = value.into_inner();
        Self::new(a, b)
    }
}

impl<R> TryFrom<(R, R)> for Interval<R>
where
    R: PartialOrd,
{
    type Error = IntervalError;

    fn try_from((a, b): (R, R)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl<R> From<Interval<R>> for RangeInclusive<R> {
    fn from(value: Interval<R>) -> Self {
        value.low..=value.high
    }
}

impl<R> Display for Interval<R>
where
    R: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// Return the greater of `a` and `b`, preferring `a` when they are equal or
/// incomparable.
pub(crate) fn max_ref<'a, R>(a: &'a R, b: &'a R) -> &'a R
where
    R: PartialOrd,
{
    if b > a {
        b
    } else {
        a
    }
}

pub(crate) fn min_ref<'a, R>(a: &'a R, b: &'a R) -> &'a R
where
    R: PartialOrd,
{
    if b < a {
        b
    } else {
        a
    }
}
