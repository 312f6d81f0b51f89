//! Derives the circle packing from the projected points.
//!
//! Every point `q` of the Poincaré disk (other than the origin) determines a
//! unique circle that passes through `q`, is centered on the ray from the
//! origin through `q`, and meets the unit circle at right angles. The circles
//! of all motif points partition the disk into the regions the rasterizer
//! colors.
use cgmath::{InnerSpace, Point2};
use quick_error::quick_error;

use super::disk::PoincarePoint;

/// A circle in the Poincaré disk's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackingCircle {
    pub center: Point2<f32>,
    pub radius: f32,
}

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum PackingError {
        /// The point has no radial direction (it's at the origin) or the
        /// resulting circle is not finite.
        DegeneratePoint { index: usize, point: Point2<f32> } {
            display("point #{} at {:?} does not define a packing circle", index, point)
        }
    }
}

impl PackingCircle {
    /// Construct the circle through `q`, orthogonal to the unit circle.
    ///
    /// The radius is `(1/‖q‖ − ‖q‖) / 2`, and the center is `q` moved away
    /// from the origin by the radius. Returns `None` if `q` is the origin or
    /// the result is not finite.
    pub fn through(q: PoincarePoint) -> Option<Self> {
        let v = q - Point2::new(0.0, 0.0);
        let norm = (v.x * v.x + v.y * v.y).sqrt();
        if norm == 0.0 {
            return None;
        }

        let radius = (1.0 / norm - norm) / 2.0;
        let dir = v * (1.0 / norm);
        let center = q + dir * radius;

        if radius.is_finite() && center.x.is_finite() && center.y.is_finite() {
            Some(Self { center, radius })
        } else {
            None
        }
    }

    /// Check if `p` is inside the circle or on its boundary.
    #[inline]
    pub fn contains(&self, p: Point2<f32>) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        (dx * dx + dy * dy).sqrt() <= self.radius
    }

    /// Get the distance between `p` and the circle's boundary.
    pub fn boundary_distance(&self, p: Point2<f32>) -> f32 {
        ((p - self.center).magnitude() - self.radius).abs()
    }
}

/// Construct one circle per point, preserving the order.
///
/// Fails on the first point that doesn't define a circle, so that no `NaN`
/// ever reaches the rasterizer.
pub fn build_packing(points: &[PoincarePoint]) -> Result<Vec<PackingCircle>, PackingError> {
    points
        .iter()
        .enumerate()
        .map(|(index, &point)| {
            PackingCircle::through(point).ok_or(PackingError::DegeneratePoint { index, point })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::EuclideanSpace;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn circle_through_point_on_axis() {
        let c = PackingCircle::through(Point2::new(0.5, 0.0)).unwrap();
        // (1/0.5 - 0.5) / 2
        assert_relative_eq!(c.radius, 0.75);
        assert_relative_eq!(c.center.x, 1.25);
        assert_eq!(c.center.y, 0.0);
    }

    #[test]
    fn origin_is_degenerate() {
        assert_eq!(PackingCircle::through(Point2::origin()), None);

        let points = [Point2::new(0.3, 0.1), Point2::origin()];
        assert_eq!(
            build_packing(&points),
            Err(PackingError::DegeneratePoint {
                index: 1,
                point: Point2::origin()
            })
        );
    }

    #[test]
    fn boundary_is_inclusive() {
        let c = PackingCircle {
            center: Point2::new(1.0, 0.0),
            radius: 0.5,
        };
        assert!(c.contains(Point2::new(0.5, 0.0)));
        assert!(c.contains(Point2::new(1.0, 0.0)));
        assert!(!c.contains(Point2::new(0.49, 0.0)));
    }

    #[quickcheck]
    fn circles_pass_through_their_points(x: f32, y: f32) -> TestResult {
        let q = Point2::new(x, y);
        let norm = q.to_vec().magnitude();
        if !(norm > 1.0e-3 && norm < 0.999) {
            return TestResult::discard();
        }

        let c = PackingCircle::through(q).unwrap();
        let tolerance = 1.0e-5 * c.radius.max(1.0);
        if c.boundary_distance(q) > tolerance {
            return TestResult::error(format!("{:?} does not pass through {:?}", c, q));
        }
        TestResult::passed()
    }

    #[quickcheck]
    fn circles_are_orthogonal_to_the_unit_circle(x: f32, y: f32) -> TestResult {
        let q = Point2::new(x, y);
        let norm = q.to_vec().magnitude();
        if !(norm > 1.0e-2 && norm < 0.99) {
            return TestResult::discard();
        }

        // Two circles are orthogonal iff d² = r1² + r2²
        let c = PackingCircle::through(q).unwrap();
        let d2 = c.center.to_vec().magnitude2();
        let expected = 1.0 + c.radius * c.radius;
        if (d2 - expected).abs() > 1.0e-4 * expected {
            return TestResult::error(format!("{:?}: d² = {}, expected {}", c, d2, expected));
        }

        // The center is on the ray through `q`
        let cross = q.x * c.center.y - q.y * c.center.x;
        let dot = q.to_vec().dot(c.center.to_vec());
        if cross.abs() > 1.0e-4 * d2.sqrt() || dot <= 0.0 {
            return TestResult::error(format!("{:?} is not on the ray through {:?}", c, q));
        }
        TestResult::passed()
    }
}
