//! Software-based rendering backend.
//!
//! # Restrictions
//!
//!  - The maximum render target and image size is 16384×16384.
//!  - The render target's pixel format is RGBA8888 (non-premultiplied).
//!  - Blending is not supported. Each drawn fragment replaces the existing
//!    contents of the render target.
//!  - Images are sampled with the clamp-to-edge addressing mode.
//!
use cgmath::Matrix3;
use iterpool::{Pool, PoolPtr};
use log::trace;
use rgb::RGBA8;

use super::iface::{self, FilterMode, Vertex, MAX_IMAGE_SIZE, RGBAF32};

mod rast;
mod sample;

pub use self::sample::to_rgba8;

/// The image handle type of [`SwDevice`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HImage {
    ptr: PoolPtr,
}

#[derive(Debug)]
struct Image {
    size: [usize; 2],
    texels: Vec<RGBAF32>,
    filter: FilterMode,
}

/// A [`iface::Device`] implementation rendering into a memory framebuffer.
#[derive(Debug)]
pub struct SwDevice {
    size: [usize; 2],
    frame: Vec<RGBA8>,
    images: Pool<Image>,
}

impl SwDevice {
    /// Construct a `SwDevice` with a render target of the specified size. The
    /// render target is initially filled with transparent black.
    pub fn new(size: [u32; 2]) -> Self {
        let size = validate_size(size);
        Self {
            size,
            frame: vec![RGBA8::new(0, 0, 0, 0); size[0] * size[1]],
            images: Pool::new(),
        }
    }

    /// Get the dimensions of the render target.
    pub fn size(&self) -> [u32; 2] {
        [self.size[0] as u32, self.size[1] as u32]
    }

    /// Get the contents of the render target. The first row is the top edge.
    pub fn frame(&self) -> &[RGBA8] {
        &self.frame
    }

    /// Get the pixel at the specified position of the render target.
    pub fn pixel(&self, x: u32, y: u32) -> RGBA8 {
        let [w, h] = self.size;
        let (x, y) = (x as usize, y as usize);
        assert!(x < w && y < h, "out of bounds");
        self.frame[x + y * w]
    }

    /// Get the contents of an image, as last uploaded.
    pub fn image_texels(&self, image: &HImage) -> &[RGBAF32] {
        &self.image(image).texels
    }

    /// Get the filter mode of an image.
    pub fn image_filter(&self, image: &HImage) -> FilterMode {
        self.image(image).filter
    }

    /// Get the number of live images.
    pub fn num_images(&self) -> usize {
        self.images.len()
    }

    fn image(&self, image: &HImage) -> &Image {
        self.images.get(image.ptr).expect("invalid image handle")
    }

    fn image_mut(&mut self, image: &HImage) -> &mut Image {
        self.images.get_mut(image.ptr).expect("invalid image handle")
    }
}

fn validate_size(size: [u32; 2]) -> [usize; 2] {
    assert!(
        size[0] <= MAX_IMAGE_SIZE && size[1] <= MAX_IMAGE_SIZE,
        "too large"
    );
    [size[0] as usize, size[1] as usize]
}

fn new_texels(size: [usize; 2], pixels: &[RGBAF32]) -> Vec<RGBAF32> {
    assert_eq!(
        pixels.len(),
        size[0] * size[1],
        "pixel data length does not match the image size"
    );
    pixels.to_vec()
}

impl iface::Device for SwDevice {
    type HImage = HImage;

    fn new_image(&mut self, size: [u32; 2], pixels: &[RGBAF32]) -> Self::HImage {
        let size = validate_size(size);
        let image = Image {
            size,
            texels: new_texels(size, pixels),
            filter: FilterMode::default(),
        };

        HImage {
            ptr: self.images.allocate(image),
        }
    }

    fn update_image(&mut self, image: &Self::HImage, size: [u32; 2], pixels: &[RGBAF32]) {
        let size = validate_size(size);
        let texels = new_texels(size, pixels);
        let image = self.image_mut(image);
        image.size = size;
        image.texels = texels;
    }

    fn set_image_filter(&mut self, image: &Self::HImage, filter: FilterMode) {
        self.image_mut(image).filter = filter;
    }

    fn image_size(&self, image: &Self::HImage) -> [u32; 2] {
        let size = self.image(image).size;
        [size[0] as u32, size[1] as u32]
    }

    fn remove_image(&mut self, image: &Self::HImage) {
        self.images
            .deallocate(image.ptr)
            .expect("invalid image handle");
    }

    fn clear(&mut self, color: RGBAF32) {
        let color = sample::to_rgba8(color);
        for p in self.frame.iter_mut() {
            *p = color;
        }
    }

    fn draw_triangle_fan(
        &mut self,
        image: &Self::HImage,
        vertices: &[Vertex],
        xform: Matrix3<f32>,
    ) {
        trace!(
            "Drawing a fan of {} vertices with {:?}",
            vertices.len(),
            image
        );
        let size = self.size;
        let image = self.images.get(image.ptr).expect("invalid image handle");
        rast::draw_fan(&mut self.frame, size, image, vertices, xform);
    }
}
