#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ParametricPath, PathState};

/// A horizontal straight line along the x-axis, parameterised by x.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatPath {
    state: PathState,
}

impl FlatPath {
    pub fn new() -> Self {
        Self {
            state: PathState::builtin("FLAT_PATH", "Flat", -10.0, 10.0, false),
        }
    }
}

impl Default for FlatPath {
    fn default() -> Self {
        Self::new()
    }
}

path_boilerplate!(FlatPath);

impl ParametricPath for FlatPath {
    fn x(&self, t: f64) -> f64 {
        t
    }

    fn y(&self, _t: f64) -> f64 {
        0.0
    }

    path_state_accessors!(FlatPath);
}
