//! Pixel export - the luminance upload format and grayscale PNG.

use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::RasterSurface;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Luminance plane of the surface, one byte per pixel, row-major.
///
/// This is the `L` upload format: the red channel of each pixel, which
/// for black ink on a white background is the luminance.
pub fn luminance_bytes(surface: &RasterSurface) -> Vec<u8> {
    surface
        .pixels()
        .iter()
        .map(|pixel| (pixel[0].clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

/// Write the surface as an 8-bit grayscale PNG.
pub fn write_png<W: Write>(surface: &RasterSurface, writer: W) -> Result<(), ExportError> {
    let bytes = luminance_bytes(surface);
    PngEncoder::new(writer).write_image(
        &bytes,
        surface.width,
        surface.height,
        ExtendedColorType::L8,
    )?;
    Ok(())
}
