//! Common availability across participants, each selecting hour-long slots of
//! a multi-day calendar.
//!
//! Each `(day, hour)` [`Slot`] maps to the degenerate interval
//! `[day * 24 + hour, day * 24 + hour]`. One [`IntervalTree`] is built per
//! participant and the trees are [`reduce`]d to the slots every participant
//! selected.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{algo::reduce, error::SlotError, interval::Interval, tree::IntervalTree};

pub const HOURS_PER_DAY: u32 = 24;

/// A single hour of a given day.
///
/// Slots are ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    day: u32,
    hour: u32,
}

impl Slot {
    /// Construct a [`Slot`] for `hour` (0-23) of `day`.
    pub fn new(day: u32, hour: u32) -> Result<Self, SlotError> {
        if hour >= HOURS_PER_DAY {
            return Err(SlotError::HourOutOfRange(hour));
        }
        Ok(Self { day, hour })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The number of hours between the start of day 0 and this slot.
    ///
    /// ```
    /// use interval_overlap::schedule::Slot;
    ///
    /// let s = Slot::new(2, 5).unwrap();
    /// assert_eq!(s.global(), 53);
    /// assert_eq!(Slot::from_global(53), Some(s));
    /// ```
    pub fn global(&self) -> u64 {
        u64::from(self.day) * u64::from(HOURS_PER_DAY) + u64::from(self.hour)
    }

    /// The inverse of [`Slot::global()`].
    ///
    /// Returns [`None`] if the day does not fit in a `u32`.
    pub fn from_global(global: u64) -> Option<Self> {
        let hours = u64::from(HOURS_PER_DAY);
        Some(Self {
            day: u32::try_from(global / hours).ok()?,
            hour: (global % hours) as u32,
        })
    }

    fn interval(&self) -> Interval<u64> {
        let g = self.global();
        Interval::from_point(g)
    }
}

/// The slot selections of a set of named participants.
///
/// A participant that has joined but selected nothing has no availability, so
/// no slot is common to all participants until they select at least one.
#[derive(Debug, Default, Clone)]
pub struct Availability {
    participants: BTreeMap<String, BTreeSet<Slot>>,
}

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `participant` with no selected slots, if not already known.
    pub fn join(&mut self, participant: impl Into<String>) {
        self.participants.entry(participant.into()).or_default();
    }

    /// Mark `slot` as available for `participant`, registering the
    /// participant if needed.
    ///
    /// Returns false if the slot was already selected.
    pub fn select(&mut self, participant: impl Into<String>, slot: Slot) -> bool {
        self.participants
            .entry(participant.into())
            .or_default()
            .insert(slot)
    }

    /// Remove `slot` from the selection of `participant`.
    ///
    /// Returns false if the slot was not selected.
    pub fn unselect(&mut self, participant: &str, slot: Slot) -> bool {
        self.participants
            .get_mut(participant)
            .map(|v| v.remove(&slot))
            .unwrap_or_default()
    }

    /// Forget all participants and their selections.
    pub fn reset(&mut self) {
        self.participants.clear();
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.participants.keys().map(String::as_str)
    }

    /// The slots selected by `participant`, in chronological order.
    pub fn selected(&self, participant: &str) -> impl Iterator<Item = Slot> + '_ {
        self.participants
            .get(participant)
            .into_iter()
            .flatten()
            .copied()
    }

    /// Compute the slots selected by every participant, in chronological
    /// order.
    ///
    /// ```
    /// use interval_overlap::schedule::{Availability, Slot};
    ///
    /// let mut a = Availability::new();
    /// a.select("ana", Slot::new(0, 9).unwrap());
    /// a.select("ana", Slot::new(1, 14).unwrap());
    /// a.select("bo", Slot::new(1, 14).unwrap());
    ///
    /// assert_eq!(a.common_slots(), [Slot::new(1, 14).unwrap()]);
    /// ```
    pub fn common_slots(&self) -> Vec<Slot> {
        let trees = self.participants.values().map(|slots| {
            slots
                .iter()
                .map(Slot::interval)
                .collect::<IntervalTree<_>>()
        });

        let common = reduce(trees)
            .into_iter()
            .filter_map(|v| Slot::from_global(*v.low()))
            .collect::<Vec<_>>();

        debug!(
            "{} participants share {} common slots",
            self.participants.len(),
            common.len()
        );

        common
    }
}
