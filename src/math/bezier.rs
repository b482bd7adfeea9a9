use cgmath::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Point2d, Vector2d};

/// A cubic bezier curve, parameterised over `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicBezier2d {
    points: [Point2d; 4],
}

impl CubicBezier2d {
    pub const fn new(points: &[Point2d; 4]) -> Self {
        Self { points: *points }
    }

    /// Creates the segment from `p1` to `p2` of a Catmull-Rom spline,
    /// where `p0` and `p3` are the neighbouring points.
    pub fn catmull_rom(p0: Point2d, p1: Point2d, p2: Point2d, p3: Point2d) -> Self {
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        Self::new(&[p1, c1, c2, p2])
    }

    /// Gets the control points.
    pub fn points(&self) -> &[Point2d; 4] {
        &self.points
    }

    /// Samples the curve.
    pub fn sample(&self, t: f64) -> Point2d {
        let t1 = 1.0 - t;
        Point2d::from_vec(
            t1 * t1 * t1 * self.points[0].to_vec()
                + 3.0 * t1 * t1 * t * self.points[1].to_vec()
                + 3.0 * t1 * t * t * self.points[2].to_vec()
                + t * t * t * self.points[3].to_vec(),
        )
    }

    /// Samples the derivative of the curve.
    pub fn sample_dt(&self, t: f64) -> Vector2d {
        let t1 = 1.0 - t;
        (-3.0 * t1 * t1) * self.points[0].to_vec()
            + (9.0 * t * t - 12.0 * t + 3.0) * self.points[1].to_vec()
            + (-9.0 * t * t + 6.0 * t) * self.points[2].to_vec()
            + (3.0 * t * t) * self.points[3].to_vec()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn catmull_rom_interpolates_ends() {
        let p = [
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 2.0),
            Point2d::new(3.0, 2.5),
            Point2d::new(4.0, 0.0),
        ];
        let seg = CubicBezier2d::catmull_rom(p[0], p[1], p[2], p[3]);
        assert_eq!(seg.sample(0.0), p[1]);
        assert_approx_eq!(seg.sample(1.0).x, p[2].x);
        assert_approx_eq!(seg.sample(1.0).y, p[2].y);

        // Tangent at p1 is half the chord from p0 to p2
        let tan = seg.sample_dt(0.0);
        assert_approx_eq!(tan.x, 1.5);
        assert_approx_eq!(tan.y, 1.25);
    }
}
