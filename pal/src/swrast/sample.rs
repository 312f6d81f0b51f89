use cgmath::Point2;
use rgb::{ComponentMap, RGBA8};

use super::Image;
use crate::iface::{FilterMode, RGBAF32};

/// Clamp a (possibly fractional or negative) texel coordinate to a valid
/// index.
#[inline]
fn clamp_index(x: f32, len: usize) -> usize {
    if x <= 0.0 {
        0
    } else {
        (x as usize).min(len - 1)
    }
}

#[inline]
fn lerp(a: RGBAF32, b: RGBAF32, t: f32) -> RGBAF32 {
    RGBAF32::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Sample `image` at the texture coordinates `uv` using its filter mode.
///
/// An empty image samples as transparent black.
pub(super) fn sample(image: &Image, uv: Point2<f32>) -> RGBAF32 {
    let [w, h] = image.size;
    if w == 0 || h == 0 {
        return RGBAF32::new(0.0, 0.0, 0.0, 0.0);
    }
    let texel = |x: usize, y: usize| image.texels[x + y * w];

    match image.filter {
        FilterMode::Nearest => texel(
            clamp_index((uv.x * w as f32).floor(), w),
            clamp_index((uv.y * h as f32).floor(), h),
        ),
        FilterMode::Linear => {
            // Texel centers are located at half-integer coordinates
            let fx = uv.x * w as f32 - 0.5;
            let fy = uv.y * h as f32 - 0.5;
            let (x0, y0) = (fx.floor(), fy.floor());
            let (tx, ty) = (fx - x0, fy - y0);

            let [xa, xb] = [clamp_index(x0, w), clamp_index(x0 + 1.0, w)];
            let [ya, yb] = [clamp_index(y0, h), clamp_index(y0 + 1.0, h)];

            lerp(
                lerp(texel(xa, ya), texel(xb, ya), tx),
                lerp(texel(xa, yb), texel(xb, yb), tx),
                ty,
            )
        }
    }
}

/// Quantize a color to 8 bits per channel, clamping each channel to `[0, 1]`.
pub fn to_rgba8(c: RGBAF32) -> RGBA8 {
    c.map(|x| (x.max(0.0).min(1.0) * 255.0 + 0.5) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_blue(filter: FilterMode) -> Image {
        Image {
            size: [2, 1],
            texels: vec![
                RGBAF32::new(1.0, 0.0, 0.0, 1.0),
                RGBAF32::new(0.0, 0.0, 1.0, 1.0),
            ],
            filter,
        }
    }

    #[test]
    fn nearest_picks_covering_texel() {
        let image = red_blue(FilterMode::Nearest);
        assert_eq!(sample(&image, Point2::new(0.25, 0.5)).r, 1.0);
        assert_eq!(sample(&image, Point2::new(0.49, 0.5)).r, 1.0);
        assert_eq!(sample(&image, Point2::new(0.51, 0.5)).b, 1.0);
        assert_eq!(sample(&image, Point2::new(1.0, 0.5)).b, 1.0);
    }

    #[test]
    fn linear_blends_between_texel_centers() {
        let image = red_blue(FilterMode::Linear);
        let mid = sample(&image, Point2::new(0.5, 0.5));
        assert!((mid.r - 0.5).abs() < 1.0e-6);
        assert!((mid.b - 0.5).abs() < 1.0e-6);

        // Texel centers reproduce the texels exactly
        assert_eq!(sample(&image, Point2::new(0.25, 0.5)), image.texels[0]);
        assert_eq!(sample(&image, Point2::new(0.75, 0.5)), image.texels[1]);
    }

    #[test]
    fn coordinates_are_clamped_to_edge() {
        for &filter in &[FilterMode::Nearest, FilterMode::Linear] {
            let image = red_blue(filter);
            assert_eq!(sample(&image, Point2::new(-3.0, -1.0)), image.texels[0]);
            assert_eq!(sample(&image, Point2::new(7.0, 2.0)), image.texels[1]);
        }
    }

    #[test]
    fn conversion_to_rgba8() {
        assert_eq!(
            to_rgba8(RGBAF32::new(1.0, 0.5, -1.0, 2.0)),
            RGBA8::new(255, 128, 0, 255)
        );
    }
}
