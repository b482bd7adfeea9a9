//! Parametric paths for bead and track simulations.
//!
//! A [ParametricPath] gives the position `(x(t), y(t))` of a point on a
//! track as a function of a parameter `t`, along with the track's name,
//! the range of `t` it is defined over, and whether it is a closed loop.

pub use cgmath;
pub use error::{PathError, Result};
pub use name::{is_valid_name, to_name, valid_name};
pub use path::{ParametricPath, PathAttributes, PathState};
pub use set::PathSet;
use slotmap::new_key_type;
pub use util::Interval;

#[cfg(feature = "debug")]
pub mod debug;
mod error;
pub mod math;
mod name;
mod path;
pub mod paths;
mod set;
mod util;

new_key_type! {
    /// Unique ID of a path in a [PathSet].
    pub struct PathId;
}
