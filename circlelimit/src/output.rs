//! Writes rendered frames and textures as PNG files.
use circlelimit_pal::{
    swrast::{to_rgba8, SwDevice},
    RGBAF32,
};
use image::{ColorType, ImageResult};
use log::info;
use rgb::{ComponentBytes, RGBA8};
use std::path::{Path, PathBuf};

/// Write the render target of `device`.
pub fn save_frame(device: &SwDevice, path: &Path) -> ImageResult<()> {
    let [width, height] = device.size();
    let bytes = device.frame().as_bytes();
    image::save_buffer(path, bytes, width, height, ColorType::Rgba8)?;
    info!("Wrote a {}x{} frame to {:?}", width, height, path);
    Ok(())
}

/// Write the contents of a texture. The first row of `pixels` (`v = 0`)
/// becomes the bottom row of the image.
pub fn save_texture(pixels: &[RGBAF32], size: [u32; 2], path: &Path) -> ImageResult<()> {
    let [width, height] = size;
    let bytes = texture_to_rgba8(pixels, width as usize);
    image::save_buffer(path, bytes.as_bytes(), width, height, ColorType::Rgba8)?;
    info!("Wrote a {}x{} texture to {:?}", width, height, path);
    Ok(())
}

/// Quantize `pixels` and reorder the rows so that the first one is the top
/// edge.
fn texture_to_rgba8(pixels: &[RGBAF32], width: usize) -> Vec<RGBA8> {
    if width == 0 {
        return Vec::new();
    }
    pixels
        .rchunks(width)
        .flat_map(|row| row.iter())
        .map(|&c| to_rgba8(c))
        .collect()
}

/// Get the output path of frame `index` out of `count`. A single frame is
/// written to `base` as is; otherwise, the frame number is appended to the
/// file stem (`out.png` → `out-0003.png`).
pub fn frame_path(base: &Path, index: u32, count: u32) -> PathBuf {
    if count <= 1 {
        return base.to_owned();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{}-{:04}", stem, index);
    if let Some(ext) = base.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    base.with_file_name(name)
}
