//! Projects hyperboloid points to the Poincaré disk.
use cgmath::Point2;

use super::hyperboloid::HyperboloidPoint;

/// A point inside the open unit disk.
pub type PoincarePoint = Point2<f32>;

/// Project a point through the "south pole" `(0, 0, −1)` onto the plane
/// `z = 0`.
///
/// `p.z + 1` is positive for every point on the upper sheet, so this never
/// divides by zero for the points produced by [`crate::hyperboloid`].
#[inline]
pub fn project(p: HyperboloidPoint) -> PoincarePoint {
    let denom = p.z + 1.0;
    Point2::new(p.x / denom, p.y / denom)
}

/// Project a sequence of points, preserving the order.
pub fn project_all(points: &[HyperboloidPoint]) -> Vec<PoincarePoint> {
    points.iter().cloned().map(project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperboloid::{Construction, Motif};
    use cgmath::{EuclideanSpace, InnerSpace, Vector3};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn apex_maps_to_origin() {
        assert_eq!(project(Vector3::unit_z()), Point2::origin());
    }

    #[test]
    fn cardinality_and_order() {
        let points = Motif::default().points();
        let projected = project_all(&points);
        assert_eq!(projected.len(), points.len());
        for (p, q) in points.iter().zip(projected.iter()) {
            assert_eq!(*q, project(*p));
        }
    }

    #[quickcheck]
    fn projected_points_are_inside_disk(sector: u32, dh: f32, geodesic: bool) -> TestResult {
        if !(dh >= 0.0 && dh <= 6.0) {
            return TestResult::discard();
        }
        let motif = Motif {
            construction: if geodesic {
                Construction::Geodesic
            } else {
                Construction::Nested
            },
            ..Motif::default()
        };
        let q = project(motif.point(motif.direction(sector % 9), dh));
        let r2 = q.to_vec().magnitude2();

        if !(r2 < 1.0) {
            return TestResult::error(format!("{:?} is outside the disk", q));
        }
        TestResult::passed()
    }
}
