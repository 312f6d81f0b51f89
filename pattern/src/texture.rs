use circlelimit_pal::{iface::Device, FilterMode, ImageResource, MAX_IMAGE_SIZE, RGBAF32};
use log::{debug, info};
use quick_error::quick_error;
use std::{convert::TryFrom, fmt::Debug};

use super::{build_circles, packing::PackingCircle, raster, Motif, PackingError};

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum TextureError {
        /// The requested dimensions are not positive or too large for the
        /// device.
        InvalidResolution { width: i64, height: i64 } {
            display("invalid texture resolution {}x{}", width, height)
        }
        Packing(err: PackingError) {
            from()
            cause(err)
            display("failed to build the circle packing: {}", err)
        }
    }
}

/// A device-resident image of the Circle Limit pattern.
///
/// The circle packing is computed once on construction. Changing the
/// resolution only re-runs the rasterizer, and the new contents replace the
/// old ones only after they are fully computed.
#[derive(Debug)]
pub struct PoincareTexture<H> {
    circles: Vec<PackingCircle>,
    pixels: Vec<RGBAF32>,
    image: ImageResource<H>,
}

fn validate_size(width: i64, height: i64) -> Result<[u32; 2], TextureError> {
    let check = |x: i64| match u32::try_from(x) {
        Ok(x) if x > 0 && x <= MAX_IMAGE_SIZE => Some(x),
        _ => None,
    };
    match (check(width), check(height)) {
        (Some(w), Some(h)) => Ok([w, h]),
        _ => Err(TextureError::InvalidResolution { width, height }),
    }
}

impl<H: Debug> PoincareTexture<H> {
    /// Construct a `PoincareTexture` of the default motif.
    pub fn new<D>(device: &mut D, size: [u32; 2]) -> Result<Self, TextureError>
    where
        D: Device<HImage = H>,
    {
        Self::with_motif(device, size, &Motif::default())
    }

    /// Construct a `PoincareTexture` of the specified motif.
    pub fn with_motif<D>(
        device: &mut D,
        size: [u32; 2],
        motif: &Motif,
    ) -> Result<Self, TextureError>
    where
        D: Device<HImage = H>,
    {
        let size = validate_size(size[0].into(), size[1].into())?;

        let circles = build_circles(motif)?;
        debug!("Built a packing of {} circles", circles.len());

        let pixels = raster::rasterize(&circles, size);
        let image = ImageResource::new(device, size, &pixels);
        info!("Created a {}x{} pattern texture", size[0], size[1]);

        Ok(Self {
            circles,
            pixels,
            image,
        })
    }

    /// Add `delta` to both the width and height, and regenerate the image.
    ///
    /// If the new dimensions are invalid, this returns an error and leaves
    /// `self` (and the device image) unchanged.
    pub fn increase_resolution<D>(
        &mut self,
        device: &mut D,
        delta: i32,
    ) -> Result<(), TextureError>
    where
        D: Device<HImage = H>,
    {
        let [width, height] = self.size();
        let size = validate_size(
            i64::from(width) + i64::from(delta),
            i64::from(height) + i64::from(delta),
        )?;

        let pixels = raster::rasterize(&self.circles, size);
        self.image.upload(device, size, &pixels);
        self.pixels = pixels;
        info!("Texture resolution is now {}x{}", size[0], size[1]);

        Ok(())
    }

    /// Set the filter mode used to sample the image. The contents are not
    /// regenerated.
    pub fn set_filtering_mode<D>(&mut self, device: &mut D, mode: FilterMode)
    where
        D: Device<HImage = H>,
    {
        self.image.set_filter(device, mode);
        info!("Texture filter is now {:?}", mode);
    }

    /// Release the device image.
    pub fn remove<D>(self, device: &mut D)
    where
        D: Device<HImage = H>,
    {
        self.image.remove(device);
    }

    pub fn filtering_mode(&self) -> FilterMode {
        self.image.filter()
    }

    pub fn size(&self) -> [u32; 2] {
        self.image.size()
    }

    /// Get the most recently rasterized contents.
    pub fn pixels(&self) -> &[RGBAF32] {
        &self.pixels
    }

    pub fn circles(&self) -> &[PackingCircle] {
        &self.circles
    }

    pub fn himage(&self) -> &H {
        self.image.himage()
    }
}
