//! Rendering abstraction layer
//!
//! The crate defines the interface through which the pattern generator and
//! the scene talk to the rendering backend (see [`iface`]), a reusable image
//! resource built on top of it, and a software-based backend (`swrast`) that
//! renders into a memory framebuffer.
pub mod iface;
mod image;
pub mod swrast;

/// Re-exports traits from `iface`.
pub mod prelude {
    pub use super::iface::Device;
}

pub use self::{
    iface::{FilterMode, Vertex, MAX_IMAGE_SIZE, RGBAF32},
    image::ImageResource,
};
