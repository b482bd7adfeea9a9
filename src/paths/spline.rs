#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PathError, Result};
use crate::math::{CubicBezier2d, Point2d};
use crate::{ParametricPath, PathState};

/// A smooth track passing through a list of points.
///
/// Each pair of consecutive points is joined by a cubic segment with
/// Catmull-Rom tangents, and segment `i` covers `t` in `[i, i + 1]`. Outside
/// the segments the first or last segment is extrapolated.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSplinePath"))]
pub struct SplinePath {
    state: PathState,
    segments: Vec<CubicBezier2d>,
}

impl SplinePath {
    /// Creates a new spline path through `points`.
    ///
    /// A closed spline has an extra segment joining the last point back to
    /// the first, and its tangents wrap around.
    ///
    /// # Errors
    /// Fails if the name is invalid or fewer than two points are given.
    pub fn new(
        name: &str,
        local_name: Option<&str>,
        points: &[Point2d],
        closed_loop: bool,
    ) -> Result<Self> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints {
                count: points.len(),
            });
        }
        let segments = if closed_loop {
            closed_segments(points)
        } else {
            open_segments(points)
        };
        let state = PathState::create(
            name,
            local_name,
            0.0,
            segments.len() as f64,
            closed_loop,
        )?;
        Ok(Self { state, segments })
    }

    /// Gets the number of segments.
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Finds the segment covering `t` and the local parameter within it.
    fn segment_at(&self, t: f64) -> (&CubicBezier2d, f64) {
        let last = self.segments.len() - 1;
        let idx = (t.floor().max(0.0) as usize).min(last);
        (&self.segments[idx], t - idx as f64)
    }
}

/// A [SplinePath] as read by serde, before its segments are checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSplinePath {
    state: PathState,
    segments: Vec<CubicBezier2d>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSplinePath> for SplinePath {
    type Error = PathError;

    fn try_from(raw: RawSplinePath) -> Result<Self> {
        if raw.segments.is_empty() {
            return Err(PathError::TooFewPoints { count: 0 });
        }
        Ok(Self {
            state: raw.state,
            segments: raw.segments,
        })
    }
}

fn open_segments(points: &[Point2d]) -> Vec<CubicBezier2d> {
    let n = points.len();
    // Reflect the end points to get the neighbours of the first and last point
    let before = points[0] + (points[0] - points[1]);
    let after = points[n - 1] + (points[n - 1] - points[n - 2]);
    (0..n - 1)
        .map(|i| {
            let p0 = if i == 0 { before } else { points[i - 1] };
            let p3 = if i + 2 < n { points[i + 2] } else { after };
            CubicBezier2d::catmull_rom(p0, points[i], points[i + 1], p3)
        })
        .collect()
}

fn closed_segments(points: &[Point2d]) -> Vec<CubicBezier2d> {
    let n = points.len();
    (0..n)
        .map(|i| {
            CubicBezier2d::catmull_rom(
                points[(i + n - 1) % n],
                points[i],
                points[(i + 1) % n],
                points[(i + 2) % n],
            )
        })
        .collect()
}

path_boilerplate!(SplinePath);

impl ParametricPath for SplinePath {
    fn x(&self, t: f64) -> f64 {
        self.sample(t).x
    }

    fn y(&self, t: f64) -> f64 {
        self.sample(t).y
    }

    fn sample(&self, t: f64) -> Point2d {
        let (segment, t) = self.segment_at(t);
        segment.sample(t)
    }

    path_state_accessors!(SplinePath);
}
