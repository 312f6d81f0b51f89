use cggeom::prelude::*;
use cgmath::{Matrix3, Point2};
use rayon::prelude::*;
use rgb::RGBA8;
use std::ops::Range;

use super::{sample, Image};
use crate::iface::Vertex;

/// A triangle in the screen space.
#[derive(Debug)]
struct Tri {
    p: [Point2<f32>; 3],
    uv: [Point2<f32>; 3],
    inv_area: f32,
    rows: Range<usize>,
    cols: Range<usize>,
}

#[inline]
fn edge(a: Point2<f32>, b: Point2<f32>, p: Point2<f32>) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Convert a range of coordinates to a range of pixel indices whose centers
/// may be covered, clipped to `0..len`.
fn pixel_range(min: f32, max: f32, len: usize) -> Range<usize> {
    let start = (min - 0.5).ceil().max(0.0) as usize;
    let end = ((max - 0.5).floor() + 1.0).max(0.0) as usize;
    start.min(len)..end.min(len)
}

impl Tri {
    /// Returns `None` if the triangle has no area.
    fn new(p: [Point2<f32>; 3], uv: [Point2<f32>; 3], size: [usize; 2]) -> Option<Self> {
        let area = edge(p[0], p[1], p[2]);
        if !area.is_finite() || area == 0.0 {
            return None;
        }

        let min_x = p[0].x.min(p[1].x).min(p[2].x);
        let max_x = p[0].x.max(p[1].x).max(p[2].x);
        let min_y = p[0].y.min(p[1].y).min(p[2].y);
        let max_y = p[0].y.max(p[1].y).max(p[2].y);

        Some(Self {
            p,
            uv,
            inv_area: 1.0 / area,
            rows: pixel_range(min_y, max_y, size[1]),
            cols: pixel_range(min_x, max_x, size[0]),
        })
    }

    /// Compute the interpolated texture coordinates at `pt`. Returns `None` if
    /// `pt` is outside the triangle.
    ///
    /// Dividing by the signed area makes the barycentric weights independent
    /// of the winding order.
    #[inline]
    fn interpolate(&self, pt: Point2<f32>) -> Option<Point2<f32>> {
        let [a, b, c] = self.p;
        let w0 = edge(b, c, pt) * self.inv_area;
        let w1 = edge(c, a, pt) * self.inv_area;
        let w2 = edge(a, b, pt) * self.inv_area;
        if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
            return None;
        }

        let [t0, t1, t2] = self.uv;
        Some(Point2::new(
            t0.x * w0 + t1.x * w1 + t2.x * w2,
            t0.y * w0 + t1.y * w1 + t2.y * w2,
        ))
    }
}

/// Draw a textured triangle fan into `frame`.
///
/// `frame` is a row-major image of size `size` whose first row is the top
/// edge. `xform` maps the vertex positions to the normalized device
/// coordinates.
pub(super) fn draw_fan(
    frame: &mut [RGBA8],
    size: [usize; 2],
    image: &Image,
    vertices: &[Vertex],
    xform: Matrix3<f32>,
) {
    let [width, height] = size;
    if width == 0 || height == 0 || vertices.len() < 3 {
        return;
    }
    debug_assert_eq!(frame.len(), width * height);

    let screen: Vec<Point2<f32>> = vertices
        .iter()
        .map(|v| {
            let ndc = xform.transform_point_2d(v.position);
            Point2::new(
                (ndc.x + 1.0) * 0.5 * width as f32,
                (1.0 - ndc.y) * 0.5 * height as f32,
            )
        })
        .collect();

    let tris: Vec<Tri> = (1..vertices.len() - 1)
        .filter_map(|i| {
            Tri::new(
                [screen[0], screen[i], screen[i + 1]],
                [vertices[0].uv, vertices[i].uv, vertices[i + 1].uv],
                size,
            )
        })
        .collect();

    if tris.is_empty() {
        return;
    }

    // For each row of pixels...
    frame
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let py = y as f32 + 0.5;
            for tri in tris.iter().filter(|tri| tri.rows.contains(&y)) {
                for x in tri.cols.clone() {
                    if let Some(uv) = tri.interpolate(Point2::new(x as f32 + 0.5, py)) {
                        row[x] = sample::to_rgba8(sample::sample(image, uv));
                    }
                }
            }
        });
}
