//! The contract shared by every parametric path.
//!
//! A path maps a parameter `t` onto a point `(x(t), y(t))` in the plane.
//! Each concrete path embeds a [PathState] which holds its name, the range
//! of `t` over which it is defined, and whether it forms a closed loop.

use std::fmt;

use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::{Point2d, Vector2d};
use crate::name::{is_valid_name, to_name, valid_name};
use crate::util::Interval;

/// The attributes used to create a [PathState].
#[derive(Clone, Copy, Debug)]
pub struct PathAttributes<'a> {
    /// The language independent name, normalized with [to_name].
    pub name: &'a str,
    /// The localized name; falls back to `name` when absent or empty.
    pub local_name: Option<&'a str>,
    /// The starting value of `t`.
    pub start_t: f64,
    /// The ending value of `t`.
    pub finish_t: f64,
    /// Whether the path ends where it starts.
    pub closed_loop: bool,
}

/// The identity and parameter range of a path.
///
/// No ordering between `start_t` and `finish_t` is enforced, and marking a
/// path as a closed loop does not check that its ends meet. Both are the
/// responsibility of whoever defines or reconfigures the path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPathState"))]
pub struct PathState {
    /// The canonical name.
    name: String,
    /// The name shown to users.
    local_name: String,
    /// The starting value of `t`.
    start_t: f64,
    /// The ending value of `t`.
    finish_t: f64,
    /// Whether the path is a closed loop.
    closed_loop: bool,
}

impl PathState {
    /// Creates a new path state from its attributes.
    pub fn new(attribs: &PathAttributes) -> Result<Self> {
        Self::create(
            attribs.name,
            attribs.local_name,
            attribs.start_t,
            attribs.finish_t,
            attribs.closed_loop,
        )
    }

    /// Creates a new path state.
    ///
    /// # Parameters
    /// * `name` - The language independent name
    /// * `local_name` - The localized name, or `None` to display `name` as given
    /// * `start_t` - The starting value of `t`
    /// * `finish_t` - The ending value of `t`
    /// * `closed_loop` - Whether the path ends where it starts
    ///
    /// # Errors
    /// Returns [PathError::InvalidName](crate::PathError::InvalidName) if
    /// `name` does not normalize to a valid name.
    pub fn create(
        name: &str,
        local_name: Option<&str>,
        start_t: f64,
        finish_t: f64,
        closed_loop: bool,
    ) -> Result<Self> {
        let canonical = valid_name(&to_name(name))?.to_owned();
        let local_name = match local_name {
            Some(local) if !local.is_empty() => local,
            _ => name,
        };
        log::debug!(
            "created path {} over [{}, {}], closed_loop={}",
            canonical,
            start_t,
            finish_t,
            closed_loop
        );
        Ok(Self {
            name: canonical,
            local_name: local_name.to_owned(),
            start_t,
            finish_t,
            closed_loop,
        })
    }

    /// Creates the state of a built-in path, whose name is already canonical.
    pub(crate) fn builtin(
        name: &'static str,
        local_name: &'static str,
        start_t: f64,
        finish_t: f64,
        closed_loop: bool,
    ) -> Self {
        debug_assert!(is_valid_name(name), "not a valid name: {}", name);
        Self {
            name: name.to_owned(),
            local_name: local_name.to_owned(),
            start_t,
            finish_t,
            closed_loop,
        }
    }

    /// Gets the canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the localized name.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns true if `name` refers to this path once normalized.
    pub fn name_equals(&self, name: &str) -> bool {
        self.name == to_name(name)
    }

    /// Gets the starting value of `t`.
    pub fn start_t_value(&self) -> f64 {
        self.start_t
    }

    /// Gets the ending value of `t`.
    pub fn finish_t_value(&self) -> f64 {
        self.finish_t
    }

    /// Sets the starting value of `t`.
    pub fn set_start_t_value(&mut self, value: f64) {
        log::trace!("{}: start_t {} -> {}", self.name, self.start_t, value);
        self.start_t = value;
    }

    /// Sets the ending value of `t`.
    pub fn set_finish_t_value(&mut self, value: f64) {
        log::trace!("{}: finish_t {} -> {}", self.name, self.finish_t, value);
        self.finish_t = value;
    }

    /// Returns true if the path ends at the same point it starts.
    pub fn is_closed_loop(&self) -> bool {
        self.closed_loop
    }

    /// Sets whether the path is a closed loop.
    pub fn set_closed_loop(&mut self, value: bool) {
        log::trace!("{}: closed_loop {} -> {}", self.name, self.closed_loop, value);
        self.closed_loop = value;
    }

    /// Writes the state in the form `Class{name_: ..., closedLoop_: ...}`.
    pub(crate) fn fmt_with_class(&self, class: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{name_: \"{}\", localName_: \"{}\", startTValue_: {:.5}, finishTValue_: {:.5}, closedLoop_: {}}}",
            class, self.name, self.local_name, self.start_t, self.finish_t, self.closed_loop
        )
    }
}

/// A [PathState] as read by serde, before its name is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPathState {
    name: String,
    local_name: String,
    start_t: f64,
    finish_t: f64,
    closed_loop: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPathState> for PathState {
    type Error = crate::PathError;

    fn try_from(raw: RawPathState) -> Result<Self> {
        Self::create(
            &raw.name,
            Some(&raw.local_name),
            raw.start_t,
            raw.finish_t,
            raw.closed_loop,
        )
    }
}

impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_class("PathState", f)
    }
}

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// A path defined by a pair of parametric equations.
///
/// This trait is sealed; the variants in [paths](crate::paths) are the
/// only implementors. Use [CustomPath](crate::paths::CustomPath) to supply
/// your own equations.
///
/// The equations must give a finite value for every `t` between the start
/// and finish values. Nothing is checked: evaluating outside that range,
/// or where the equations are undefined, yields whatever the equations do.
pub trait ParametricPath: Sealed + fmt::Display {
    /// The x-coordinate of the path at `t`.
    fn x(&self, t: f64) -> f64;

    /// The y-coordinate of the path at `t`.
    fn y(&self, t: f64) -> f64;

    /// The name of the type of path.
    fn class_name(&self) -> &'static str;

    /// The shared state of the path.
    fn state(&self) -> &PathState;

    /// The shared state of the path, mutably.
    fn state_mut(&mut self) -> &mut PathState;

    /// Gets the canonical name, or the localized name if `localized` is set.
    fn get_name(&self, localized: bool) -> &str {
        if localized {
            self.state().local_name()
        } else {
            self.state().name()
        }
    }

    /// Returns true if `name` refers to this path once normalized.
    fn name_equals(&self, name: &str) -> bool {
        self.state().name_equals(name)
    }

    /// Gets the starting value of `t`.
    fn start_t_value(&self) -> f64 {
        self.state().start_t_value()
    }

    /// Gets the ending value of `t`.
    fn finish_t_value(&self) -> f64 {
        self.state().finish_t_value()
    }

    /// Sets the starting value of `t`.
    fn set_start_t_value(&mut self, value: f64) {
        self.state_mut().set_start_t_value(value)
    }

    /// Sets the ending value of `t`.
    fn set_finish_t_value(&mut self, value: f64) {
        self.state_mut().set_finish_t_value(value)
    }

    /// Returns true if the path ends at the same point it starts.
    fn is_closed_loop(&self) -> bool {
        self.state().is_closed_loop()
    }

    /// Sets whether the path is a closed loop.
    fn set_closed_loop(&mut self, value: bool) {
        self.state_mut().set_closed_loop(value)
    }

    /// Samples the path.
    fn sample(&self, t: f64) -> Point2d {
        Point2d::new(self.x(t), self.y(t))
    }

    /// Returns the start and finish values of `t`, as stored.
    fn bounds(&self) -> Interval<f64> {
        Interval::new(self.start_t_value(), self.finish_t_value())
    }

    /// Samples the derivative of the path.
    ///
    /// The default implementation approximates the derivative by sampling
    /// two very nearby points along the path.
    fn sample_dt(&self, t: f64) -> Vector2d {
        let mut delta = self.bounds().length().abs() * 0.0001;
        if delta == 0.0 {
            delta = 0.0001;
        }
        let p1 = self.sample(t);
        let p2 = self.sample(t + delta);
        (p2 - p1) / delta
    }

    /// The distance between the start and finish points.
    ///
    /// This is close to zero for a path that honours its closed loop flag.
    fn endpoint_gap(&self) -> f64 {
        let start = self.sample(self.start_t_value());
        let finish = self.sample(self.finish_t_value());
        (finish - start).magnitude()
    }

    /// Samples `count` points spaced evenly in `t` from start to finish.
    fn sample_points(&self, count: usize) -> Vec<Point2d> {
        // `min` is the start value and `max` the finish value, in either order
        let bounds = self.bounds();
        match count {
            0 => vec![],
            1 => vec![self.sample(self.start_t_value())],
            _ => (0..count)
                .map(|i| bounds.lerp(i as f64 / (count - 1) as f64))
                .map(|t| self.sample(t))
                .collect(),
        }
    }
}
