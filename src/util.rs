//! Miscellaneous utility structs.

use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval of parameter values.
///
/// The interval is stored exactly as given, so `min` may be greater than
/// `max` when a path is traversed in reverse.
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    /// The first end; the start value for a path's bounds.
    pub min: T,
    /// The second end; the finish value for a path's bounds.
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> Interval<T> {
    /// Gets the interval as an array.
    pub fn as_array(&self) -> [T; 2] {
        [self.min, self.max]
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Returns the interval with its ends swapped if needed so that `min <= max`.
    pub fn ordered(&self) -> Self {
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            *self
        }
    }

    /// Returns true if the value lies between the two ends, in either order.
    pub fn contains(&self, value: T) -> bool {
        let ord = self.ordered();
        value >= ord.min && value <= ord.max
    }

    /// Returns true if the interval runs backwards.
    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }
}

impl Interval<f64> {
    /// Gets the signed length of the interval.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Linearly interpolates between the two ends.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }

    /// The inverse of [Interval::lerp].
    pub fn inv_lerp(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}
