use std::fmt;
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};

/// Inclusive bounds on how many times an expected event may fire.
///
/// The default is exactly once. Plain integers and the inclusive range
/// types convert automatically, so declaration sites read naturally:
///
/// ```
/// use kiku::CountRange;
///
/// assert_eq!(CountRange::from(2), CountRange::exactly(2));
/// assert_eq!(CountRange::from(1..=3), CountRange::between(1, 3));
/// assert_eq!(CountRange::from(2..), CountRange::at_least(2));
/// assert_eq!(CountRange::from(..=4), CountRange::at_most(4));
/// assert_eq!(CountRange::from(..), CountRange::any());
/// ```
///
/// A range whose `min` exceeds its `max` is rejected when the expectation
/// is registered, not silently normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountRange {
    min: usize,
    max: Option<usize>,
}

impl CountRange {
    /// The event must fire exactly `n` times.
    pub fn exactly(n: usize) -> Self {
        Self { min: n, max: Some(n) }
    }

    /// The event must fire at least `min` times, with no upper bound.
    pub fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// The event may fire up to `max` times, including not at all.
    pub fn at_most(max: usize) -> Self {
        Self { min: 0, max: Some(max) }
    }

    /// The event must fire between `min` and `max` times, inclusive.
    pub fn between(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    /// Any number of emissions, including none.
    pub fn any() -> Self {
        Self { min: 0, max: None }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    /// The inclusive upper bound, or `None` when unbounded.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// The satisfaction rule: `min <= count <= max`.
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl Default for CountRange {
    fn default() -> Self {
        CountRange::exactly(1)
    }
}

impl From<usize> for CountRange {
    fn from(n: usize) -> Self {
        CountRange::exactly(n)
    }
}

impl From<RangeInclusive<usize>> for CountRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (min, max) = range.into_inner();
        CountRange::between(min, max)
    }
}

impl From<RangeFrom<usize>> for CountRange {
    fn from(range: RangeFrom<usize>) -> Self {
        CountRange::at_least(range.start)
    }
}

impl From<RangeToInclusive<usize>> for CountRange {
    fn from(range: RangeToInclusive<usize>) -> Self {
        CountRange::at_most(range.end)
    }
}

impl From<RangeFull> for CountRange {
    fn from(_: RangeFull) -> Self {
        CountRange::any()
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "exactly {max}"),
            Some(max) if self.min == 0 => write!(f, "at most {max}"),
            Some(max) => write!(f, "between {} and {max}", self.min),
            None if self.min == 0 => write!(f, "any number"),
            None => write!(f, "at least {}", self.min),
        }
    }
}
