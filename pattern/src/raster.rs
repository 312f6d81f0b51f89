//! Colors pixels by the parity of the number of covering circles.
use cgmath::Point2;
use circlelimit_pal::RGBAF32;
use rayon::prelude::*;

use super::packing::PackingCircle;

/// The color of pixels outside the unit disk.
pub const OUTSIDE_COLOR: RGBAF32 = RGBAF32 {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// The color of pixels covered by an even number of circles.
pub const EVEN_COLOR: RGBAF32 = RGBAF32 {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// The color of pixels covered by an odd number of circles.
pub const ODD_COLOR: RGBAF32 = RGBAF32 {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// The classification of a sampling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coverage {
    Outside,
    Even,
    Odd,
}

impl Coverage {
    /// Classify the point `p` covered by `count` circles. The disk test takes
    /// precedence over the parity.
    pub fn classify(p: Point2<f32>, count: usize) -> Self {
        // Evaluated in double precision
        let (x, y) = (f64::from(p.x), f64::from(p.y));
        if (x * x + y * y).sqrt() > 1.0 {
            Coverage::Outside
        } else if count % 2 == 0 {
            Coverage::Even
        } else {
            Coverage::Odd
        }
    }

    pub fn color(self) -> RGBAF32 {
        match self {
            Coverage::Outside => OUTSIDE_COLOR,
            Coverage::Even => EVEN_COLOR,
            Coverage::Odd => ODD_COLOR,
        }
    }
}

/// Count the circles containing `p` (boundary inclusive).
pub fn coverage_count(circles: &[PackingCircle], p: Point2<f32>) -> usize {
    circles.iter().filter(|c| c.contains(p)).count()
}

/// Map the raster cell `[xc, yc]` to the disk's coordinate space.
///
/// Both axes are divided by the width. This maps the raster onto `[-1, 1]²`
/// only if the raster is square; for a taller raster the rows beyond the
/// width fall outside the disk, and for a wider one the disk is cut off.
#[inline]
pub fn cell_coord(width: u32, [xc, yc]: [u32; 2]) -> Point2<f32> {
    let w = width as f32;
    Point2::new(xc as f32 / w * 2.0 - 1.0, yc as f32 / w * 2.0 - 1.0)
}

/// Compute the color of the raster cell `[xc, yc]`.
#[inline]
pub fn shade(circles: &[PackingCircle], width: u32, cell: [u32; 2]) -> RGBAF32 {
    let p = cell_coord(width, cell);
    Coverage::classify(p, coverage_count(circles, p)).color()
}

/// Rasterize the circle packing into a row-major buffer of `size[0] * size[1]`
/// pixels. Row `0` corresponds to `y = -1`.
///
/// Returns an empty buffer if either dimension is zero. Rows are processed in
/// parallel; the output doesn't depend on the scheduling.
pub fn rasterize(circles: &[PackingCircle], size: [u32; 2]) -> Vec<RGBAF32> {
    let [width, height] = size;
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut out = vec![OUTSIDE_COLOR; width as usize * height as usize];

    // For each row...
    out.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(yc, row)| {
            for (xc, px) in row.iter_mut().enumerate() {
                *px = shade(circles, width, [xc as u32, yc as u32]);
            }
        });

    out
}
