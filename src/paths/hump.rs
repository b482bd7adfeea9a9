#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ParametricPath, PathState};

/// A symmetric track with two dips either side of a central hump.
///
/// `y = 3 + t^2 (t^2 - 7) / 6`, parameterised by x.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HumpPath {
    state: PathState,
}

impl HumpPath {
    pub fn new() -> Self {
        Self {
            state: PathState::builtin("HUMP_PATH", "Hump", -4.0, 4.0, false),
        }
    }
}

impl Default for HumpPath {
    fn default() -> Self {
        Self::new()
    }
}

path_boilerplate!(HumpPath);

impl ParametricPath for HumpPath {
    fn x(&self, t: f64) -> f64 {
        t
    }

    fn y(&self, t: f64) -> f64 {
        3.0 + t * t * (t * t - 7.0) / 6.0
    }

    path_state_accessors!(HumpPath);
}
