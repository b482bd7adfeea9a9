use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ParametricPath, PathState};

/// A figure-eight (lemniscate of Bernoulli) centred on the origin.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LemniscatePath {
    state: PathState,
    /// Half the width of the figure.
    size: f64,
}

impl LemniscatePath {
    pub fn new(size: f64) -> Self {
        Self {
            state: PathState::builtin("LEMNISCATE_PATH", "Lemniscate", -0.5 * PI, 1.5 * PI, true),
            size,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

path_boilerplate!(LemniscatePath);

impl ParametricPath for LemniscatePath {
    fn x(&self, t: f64) -> f64 {
        let s = t.sin();
        self.size * t.cos() / (1.0 + s * s)
    }

    fn y(&self, t: f64) -> f64 {
        let s = t.sin();
        self.size * s * t.cos() / (1.0 + s * s)
    }

    path_state_accessors!(LemniscatePath);
}
