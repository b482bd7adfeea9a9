use std::fmt;

use crate::error::Result;
use crate::{ParametricPath, PathAttributes, PathState};

type CoordFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// A path defined by caller supplied equations.
pub struct CustomPath {
    state: PathState,
    x_fn: CoordFn,
    y_fn: CoordFn,
}

impl CustomPath {
    /// Creates a new custom path.
    ///
    /// # Parameters
    /// * `attribs` - The name, range and closed loop flag of the path
    /// * `x_fn` - The equation for the x-coordinate
    /// * `y_fn` - The equation for the y-coordinate
    pub fn new(
        attribs: &PathAttributes,
        x_fn: impl Fn(f64) -> f64 + Send + Sync + 'static,
        y_fn: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Result<Self> {
        Ok(Self {
            state: PathState::new(attribs)?,
            x_fn: Box::new(x_fn),
            y_fn: Box::new(y_fn),
        })
    }
}

impl crate::path::Sealed for CustomPath {}

impl fmt::Display for CustomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.fmt_with_class("CustomPath", f)
    }
}

impl fmt::Debug for CustomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPath")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ParametricPath for CustomPath {
    fn x(&self, t: f64) -> f64 {
        (self.x_fn)(t)
    }

    fn y(&self, t: f64) -> f64 {
        (self.y_fn)(t)
    }

    path_state_accessors!(CustomPath);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PathError;
    use assert_approx_eq::assert_approx_eq;

    fn parabola() -> CustomPath {
        CustomPath::new(
            &PathAttributes {
                name: "parabola",
                local_name: None,
                start_t: -2.0,
                finish_t: 2.0,
                closed_loop: false,
            },
            |t| t,
            |t| t * t,
        )
        .unwrap()
    }

    #[test]
    fn evaluates_closures() {
        let path = parabola();
        assert_eq!(path.get_name(false), "PARABOLA");
        assert_eq!(path.get_name(true), "parabola");
        assert_approx_eq!(path.y(1.5), 2.25);
        let dt = path.sample_dt(1.0);
        assert_approx_eq!(dt.y, 2.0, 1e-3);
    }

    #[test]
    fn non_finite_values_propagate() {
        let path = CustomPath::new(
            &PathAttributes {
                name: "hyperbola",
                local_name: Some("Hyperbola"),
                start_t: 0.5,
                finish_t: 4.0,
                closed_loop: false,
            },
            |t| t,
            |t| 1.0 / t,
        )
        .unwrap();
        assert!(path.y(0.0).is_infinite());
        assert!(path.y(f64::NAN).is_nan());
    }

    #[test]
    fn invalid_name_is_rejected() {
        let result = CustomPath::new(
            &PathAttributes {
                name: "1-2",
                local_name: Some("Dash"),
                start_t: 0.0,
                finish_t: 1.0,
                closed_loop: false,
            },
            |t| t,
            |t| t,
        );
        assert!(matches!(result, Err(PathError::InvalidName(name)) if name == "1_2"));
    }

    #[test]
    fn debug_output() {
        let path = parabola();
        assert!(format!("{:?}", path).starts_with("CustomPath { state: PathState {"));
        assert_eq!(
            path.to_string(),
            "CustomPath{name_: \"PARABOLA\", localName_: \"parabola\", startTValue_: -2.00000, \
             finishTValue_: 2.00000, closedLoop_: false}"
        );
    }
}
