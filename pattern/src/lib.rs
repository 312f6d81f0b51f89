//! Synthesizes a "Circle Limit"-style texture from a hyperbolic tiling.
//!
//! The pipeline consists of the following stages:
//!
//!  1. [`hyperboloid`]: Points are laid out on the hyperboloid model along
//!     geodesic rays emanating from its apex.
//!  2. [`disk`]: The points are projected to the Poincaré disk.
//!  3. [`packing`]: Each projected point yields a circle orthogonal to the
//!     disk boundary.
//!  4. [`raster`]: Pixels are colored by the parity of the number of circles
//!     covering them.
//!
//! [`PoincareTexture`] runs the pipeline and keeps the result on a
//! [`circlelimit_pal::iface::Device`].
pub mod disk;
pub mod hyperboloid;
pub mod packing;
pub mod raster;
mod texture;

pub use self::{
    hyperboloid::{Construction, Motif},
    packing::{PackingCircle, PackingError},
    texture::{PoincareTexture, TextureError},
};

/// Run the geometric part of the pipeline (stages 1 to 3) for `motif`.
///
/// The result only depends on `motif`, not on the raster resolution, so it can
/// be reused for any number of calls to [`raster::rasterize`].
pub fn build_circles(motif: &Motif) -> Result<Vec<PackingCircle>, PackingError> {
    let points = motif.points();
    let disk_points = disk::project_all(&points);
    packing::build_packing(&disk_points)
}
