//! Defines an abstract interface to the rendering backend.
//!
//! This module defines an abstract interface not bound to any specific
//! backend. A backend owns device-resident images (textures) and can draw
//! textured triangle fans into its render target.
use cgmath::{Matrix3, Point2};
use rgb::RGBA;
use std::{fmt::Debug, hash::Hash};

pub type RGBAF32 = RGBA<f32>;

/// The maximum width and height of an image. Every backend must accept images
/// up to this size.
pub const MAX_IMAGE_SIZE: u32 = 16384;

/// Specifies how an image is sampled when it's magnified or minified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Use the texel nearest to the sampling point.
    Nearest,
    /// Interpolate bilinearly between the four texels surrounding the
    /// sampling point.
    Linear,
}

impl Default for FilterMode {
    fn default() -> Self {
        FilterMode::Linear
    }
}

/// A vertex of a textured polygon.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// The position in the model space.
    pub position: Point2<f32>,
    /// The texture coordinates. `[0, 0]` is the first texel of the image
    /// (the first row of the uploaded pixel data) and `[1, 1]` is the
    /// opposite corner.
    pub uv: Point2<f32>,
}

impl Vertex {
    pub fn new(position: [f32; 2], uv: [f32; 2]) -> Self {
        Self {
            position: position.into(),
            uv: uv.into(),
        }
    }
}

/// A trait for rendering backends.
///
/// Images are identified by opaque handles. Using a handle after passing it to
/// `remove_image`, or passing a handle created by another device, is a
/// contract violation and may cause a panic.
pub trait Device: Debug {
    /// An image handle type.
    type HImage: Debug + Clone + PartialEq + Eq + Hash;

    /// Create an image from row-major pixel data.
    ///
    /// `pixels.len()` must be equal to `size[0] * size[1]`, and each dimension
    /// must not exceed [`MAX_IMAGE_SIZE`]. The new image uses
    /// `FilterMode::default()`.
    fn new_image(&mut self, size: [u32; 2], pixels: &[RGBAF32]) -> Self::HImage;

    /// Replace the contents of an image, possibly changing its size. The filter
    /// mode is preserved.
    fn update_image(&mut self, image: &Self::HImage, size: [u32; 2], pixels: &[RGBAF32]);

    /// Set the filter mode used to sample an image.
    fn set_image_filter(&mut self, image: &Self::HImage, filter: FilterMode);

    /// Get the dimensions of an image.
    fn image_size(&self, image: &Self::HImage) -> [u32; 2];

    /// Release an image and its associated resources.
    fn remove_image(&mut self, image: &Self::HImage);

    /// Fill the whole render target with a color.
    fn clear(&mut self, color: RGBAF32);

    /// Draw a textured triangle fan.
    ///
    /// The first vertex is shared by every triangle; each following pair of
    /// adjacent vertices forms a triangle with it. `xform` maps the vertex
    /// positions to the normalized device coordinates, where `[-1, -1]` is the
    /// bottom-left corner and `[1, 1]` the top-right corner of the render
    /// target. Fewer than three vertices draw nothing.
    fn draw_triangle_fan(
        &mut self,
        image: &Self::HImage,
        vertices: &[Vertex],
        xform: Matrix3<f32>,
    );
}
