use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ParametricPath, PathState};

/// A circle centred on the origin.
///
/// The path starts and finishes at the top of the circle, running
/// anticlockwise.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CirclePath {
    state: PathState,
    radius: f64,
}

impl CirclePath {
    /// Creates a circle of the given radius.
    pub fn new(radius: f64) -> Self {
        Self {
            state: PathState::builtin("CIRCLE_PATH", "Circle", -1.5 * PI, 0.5 * PI, true),
            radius,
        }
    }

    /// Gets the radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

path_boilerplate!(CirclePath);

impl ParametricPath for CirclePath {
    fn x(&self, t: f64) -> f64 {
        self.radius * t.cos()
    }

    fn y(&self, t: f64) -> f64 {
        self.radius * t.sin()
    }

    path_state_accessors!(CirclePath);
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn starts_and_finishes_at_top() {
        let path = CirclePath::new(2.0);
        let start = path.sample(path.start_t_value());
        let finish = path.sample(path.finish_t_value());
        assert_approx_eq!(start.x, 0.0);
        assert_approx_eq!(start.y, 2.0);
        assert_approx_eq!(finish.x, 0.0);
        assert_approx_eq!(finish.y, 2.0);
        assert!(path.is_closed_loop());
        assert!(path.endpoint_gap() < 1e-9);
    }

    #[test]
    fn identity() {
        let path = CirclePath::new(1.0);
        assert_eq!(path.get_name(false), "CIRCLE_PATH");
        assert_eq!(path.get_name(true), "Circle");
        assert_eq!(path.class_name(), "CirclePath");
        assert!(path.name_equals("circle path"));
        assert!(path.to_string().starts_with("CirclePath{name_: \"CIRCLE_PATH\""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let mut path = CirclePath::new(2.5);
        path.set_closed_loop(false);
        let json = serde_json::to_string(&path).unwrap();
        let back: CirclePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back.radius(), 2.5);
        assert_eq!(back.get_name(false), "CIRCLE_PATH");
        assert_eq!(back.get_name(true), "Circle");
        assert!(!back.is_closed_loop());
        assert_approx_eq!(back.start_t_value(), path.start_t_value(), 1e-12);
        assert_approx_eq!(back.finish_t_value(), path.finish_t_value(), 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_invalid_name() {
        let json = r#"{"state":{"name":"3 circles","local_name":"","start_t":0.0,"finish_t":1.0,"closed_loop":true},"radius":1.0}"#;
        assert!(serde_json::from_str::<CirclePath>(json).is_err());
    }
}
