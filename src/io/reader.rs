//! Source-image decoding via the `image` crate.
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode the image at `path`. Open and parse failures are both decode
/// errors: the source could not be read as an image.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            source: ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!("Decoded {:?}: {}x{}", path, img.width(), img.height());
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = decode_image(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn non_image_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"plain text").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn decodes_written_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        image::RgbaImage::from_pixel(5, 7, image::Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let img = decode_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (5, 7));
    }
}
