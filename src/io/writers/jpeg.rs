use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::DynamicImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

/// Encode `img` as JPEG at the given quality (1-100).
///
/// Luma/RGB/RGBA buffers are handed to the encoder as-is; anything else is
/// converted to RGB first. JPEG dimensions are capped at 65535 per axis.
pub fn write_jpeg(output: &Path, img: &DynamicImage, quality: u8) -> Result<()> {
    let (width, height) = (img.width(), img.height());
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(Error::invalid_argument(
            "output",
            format!("{width}x{height} exceeds JPEG dimension limit"),
        ));
    }

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);

    match img {
        DynamicImage::ImageLuma8(buf) => {
            encoder.encode(buf.as_raw(), width as u16, height as u16, ColorType::Luma)?
        }
        DynamicImage::ImageRgb8(buf) => {
            encoder.encode(buf.as_raw(), width as u16, height as u16, ColorType::Rgb)?
        }
        DynamicImage::ImageRgba8(buf) => {
            encoder.encode(buf.as_raw(), width as u16, height as u16, ColorType::Rgba)?
        }
        other => {
            let rgb = other.to_rgb8();
            encoder.encode(rgb.as_raw(), width as u16, height as u16, ColorType::Rgb)?
        }
    }
    Ok(())
}
