use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::PngEncoder;

use crate::error::{Error, Result};

/// Encode `img` as PNG, preserving its color mode.
pub fn write_png(output: &Path, img: &DynamicImage) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(writer))
        .map_err(|e| Error::Encode {
            path: output.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn round_trips_pixels_losslessly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([9, 8, 7, 200])));

        write_png(&path, &img).unwrap();

        let back = image::open(&path).unwrap();
        assert_eq!(back.to_rgba8().as_raw(), img.to_rgba8().as_raw());
    }
}
