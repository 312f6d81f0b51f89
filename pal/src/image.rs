use log::debug;
use std::fmt::Debug;

use super::iface::{Device, FilterMode, RGBAF32};

/// A device-resident image together with the state needed to regenerate it.
///
/// This is a building block for types that produce image contents on the CPU
/// and need to upload, resize, and reconfigure them on a [`Device`]. It keeps
/// track of the current size and filter mode so that callers don't have to
/// query the device.
///
/// `ImageResource` doesn't release the image on drop because it doesn't own
/// the device. Call [`ImageResource::remove`] instead.
#[derive(Debug)]
pub struct ImageResource<H> {
    himage: H,
    size: [u32; 2],
    filter: FilterMode,
}

impl<H: Debug> ImageResource<H> {
    /// Create a device image and upload `pixels` to it.
    pub fn new<D>(device: &mut D, size: [u32; 2], pixels: &[RGBAF32]) -> Self
    where
        D: Device<HImage = H>,
    {
        debug!("Creating a {}x{} image", size[0], size[1]);
        Self {
            himage: device.new_image(size, pixels),
            size,
            filter: FilterMode::default(),
        }
    }

    /// Replace the image contents. The filter mode is retained.
    pub fn upload<D>(&mut self, device: &mut D, size: [u32; 2], pixels: &[RGBAF32])
    where
        D: Device<HImage = H>,
    {
        debug!(
            "Uploading a {}x{} image to {:?}",
            size[0], size[1], self.himage
        );
        device.update_image(&self.himage, size, pixels);
        self.size = size;
    }

    /// Change the filter mode. Does not touch the image contents.
    pub fn set_filter<D>(&mut self, device: &mut D, filter: FilterMode)
    where
        D: Device<HImage = H>,
    {
        device.set_image_filter(&self.himage, filter);
        self.filter = filter;
    }

    /// Release the device image.
    pub fn remove<D>(self, device: &mut D)
    where
        D: Device<HImage = H>,
    {
        debug!("Removing {:?}", self.himage);
        device.remove_image(&self.himage);
    }

    pub fn himage(&self) -> &H {
        &self.himage
    }

    pub fn size(&self) -> [u32; 2] {
        self.size
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }
}
