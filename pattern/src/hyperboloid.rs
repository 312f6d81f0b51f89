//! Lays out the tiling motif on the hyperboloid model.
//!
//! The hyperboloid model represents the hyperbolic plane as the upper sheet of
//! `x² + y² − z² = −1` in the Minkowski space. The apex `(0, 0, 1)` is the
//! starting point of every ray generated here.
use cgmath::Vector3;
use std::f64::consts::PI;

/// A point on (or, for [`Construction::Nested`], near) the upper sheet of the
/// hyperboloid.
pub type HyperboloidPoint = Vector3<f32>;

/// Selects how a point is derived from a direction and a hyperbolic distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construction {
    /// `ivv = apex·sinh(d) + dir·cosh(d)`, then `p = apex·cosh(d) + ivv·sinh(d)`.
    ///
    /// This is the construction the reference pattern is generated with. The
    /// result lies on the upper sheet's side of the light cone (`z ≥ 1`,
    /// `x² + y² < z²`) but not on the unit hyperboloid itself.
    Nested,
    /// `p = apex·cosh(d) + dir·sinh(d)`, the point at distance `d` along the
    /// geodesic leaving the apex in direction `dir`. Satisfies
    /// `x² + y² − z² = −1`.
    Geodesic,
}

/// Describes the set of generated points: `sectors` equally spaced directions,
/// each with the hyperbolic distances `first_offset`, `first_offset +
/// offset_step`, … up to and including `last_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motif {
    pub sectors: u32,
    pub first_offset: f32,
    pub offset_step: f32,
    pub last_offset: f32,
    pub construction: Construction,
}

impl Default for Motif {
    /// The 9-fold motif with six offsets per direction (54 points).
    fn default() -> Self {
        Self {
            sectors: 9,
            first_offset: 0.5,
            offset_step: 1.0,
            last_offset: 5.5,
            construction: Construction::Nested,
        }
    }
}

impl Motif {
    /// Get the hyperbolic distances generated for each direction, in ascending
    /// order.
    ///
    /// Produces nothing if `offset_step` is not a positive finite number.
    pub fn offsets(&self) -> impl Iterator<Item = f32> + Clone {
        let step = self.offset_step;
        let last = self.last_offset;
        let limit = if step > 0.0 && step.is_finite() {
            usize::max_value()
        } else {
            0
        };

        std::iter::successors(Some(self.first_offset), move |dh| Some(dh + step))
            .take(limit)
            .take_while(move |dh| *dh <= last)
    }

    /// Get the unit direction of sector `i` on the equator of the hyperboloid.
    pub fn direction(&self, i: u32) -> Vector3<f32> {
        // The angle is evaluated in double precision before the conversion,
        // like `(i * 40) * π / 180` with `sectors == 9`
        let deg = f64::from(i) * (360.0 / f64::from(self.sectors));
        let rad = (deg * PI / 180.0) as f32;
        Vector3::new(rad.cos(), rad.sin(), 0.0)
    }

    /// Compute the point at distance `dh` in direction `dir`.
    pub fn point(&self, dir: Vector3<f32>, dh: f32) -> HyperboloidPoint {
        let apex = Vector3::unit_z();
        match self.construction {
            Construction::Nested => {
                let ivv = apex * dh.sinh() + dir * dh.cosh();
                apex * dh.cosh() + ivv * dh.sinh()
            }
            Construction::Geodesic => apex * dh.cosh() + dir * dh.sinh(),
        }
    }

    /// Generate all points, direction-major.
    pub fn points(&self) -> Vec<HyperboloidPoint> {
        let offsets = self.offsets();
        let mut points = Vec::with_capacity(self.len());
        points.extend((0..self.sectors).flat_map(|i| {
            let dir = self.direction(i);
            offsets.clone().map(move |dh| self.point(dir, dh))
        }));
        points
    }

    /// Get the number of points `points` returns.
    pub fn len(&self) -> usize {
        self.sectors as usize * self.offsets().count()
    }
}

/// Compute `x² + y² − z²`, the Minkowski quadratic form. Points on the unit
/// hyperboloid evaluate to `−1`.
pub fn minkowski_norm2(p: HyperboloidPoint) -> f32 {
    p.x * p.x + p.y * p.y - p.z * p.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn default_offsets() {
        let offsets: Vec<f32> = Motif::default().offsets().collect();
        assert_eq!(offsets, vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5]);
    }

    #[test]
    fn default_len() {
        let motif = Motif::default();
        assert_eq!(motif.len(), 54);
        assert_eq!(motif.points().len(), 54);
    }

    #[test]
    fn non_positive_step_yields_nothing() {
        for &step in &[0.0, -1.0, std::f32::NAN] {
            let motif = Motif {
                offset_step: step,
                ..Motif::default()
            };
            assert_eq!(motif.offsets().count(), 0);
            assert!(motif.points().is_empty());
        }
    }

    #[test]
    fn directions_are_40_degrees_apart() {
        let motif = Motif::default();
        let d0 = motif.direction(0);
        assert_eq!(d0, Vector3::new(1.0, 0.0, 0.0));

        let d1 = motif.direction(1);
        assert_relative_eq!(d1.x, 40.0f32.to_radians().cos(), epsilon = 1.0e-6);
        assert_relative_eq!(d1.y, 40.0f32.to_radians().sin(), epsilon = 1.0e-6);
    }

    #[test]
    fn ordering_is_direction_major() {
        let motif = Motif::default();
        let points = motif.points();

        // The first six points share the direction of sector 0 (the x axis)
        assert!(points[..6].iter().all(|p| p.y == 0.0 && p.x > 0.0));
        // ... and move away from the apex
        assert!(points[..6].windows(2).all(|w| w[0].z < w[1].z));
        // The seventh point starts sector 1
        assert!(points[6].y > 0.0);
        assert_eq!(points[6], motif.point(motif.direction(1), 0.5));
    }

    #[test]
    fn nested_construction_matches_closed_form() {
        let motif = Motif::default();
        let (c, s) = (0.5f32.cosh(), 0.5f32.sinh());
        let p = motif.point(Vector3::unit_x(), 0.5);
        assert_relative_eq!(p.x, c * s, max_relative = 1.0e-6);
        assert_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, c + s * s, max_relative = 1.0e-6);
    }

    #[test]
    fn zero_offset_is_the_apex() {
        for &construction in &[Construction::Nested, Construction::Geodesic] {
            let motif = Motif {
                construction,
                ..Motif::default()
            };
            assert_eq!(motif.point(motif.direction(3), 0.0), Vector3::unit_z());
        }
    }

    #[test]
    fn geodesic_points_lie_on_the_hyperboloid() {
        let motif = Motif {
            construction: Construction::Geodesic,
            ..Motif::default()
        };
        for p in motif.points() {
            assert_abs_diff_eq!(minkowski_norm2(p), -1.0, epsilon = 1.0e-5 * p.z * p.z);
        }
    }
}
