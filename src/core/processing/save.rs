//! Persistence for transformed images: parent-directory creation, format
//! selection, and dispatch to the `io::writers` encoders.
use std::fs;
use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::core::params::SaveOptions;
use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_jpeg;
use crate::io::writers::png::write_png;
use crate::types::OutputFormat;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Write `img` to `output`, creating missing parent directories first.
///
/// The format comes from `options.format`, falling back to the destination
/// extension; an unrecognizable destination fails before anything is written.
pub fn save_transformed_image(
    img: &DynamicImage,
    output: &Path,
    options: &SaveOptions,
) -> Result<()> {
    let format = match options.format {
        Some(format) => format,
        None => OutputFormat::from_path(output)
            .ok_or_else(|| Error::invalid_argument("output", output.display()))?,
    };

    let quality = options.quality.unwrap_or(DEFAULT_JPEG_QUALITY);
    if !(1..=100).contains(&quality) {
        return Err(Error::invalid_argument("quality", quality));
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    info!("Saving {} image to {:?}", format, output);
    match format {
        OutputFormat::Png => write_png(output, img),
        OutputFormat::Jpeg => write_jpeg(output, img, quality),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 200, 30, 255])))
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a/b/c/out.png");

        save_transformed_image(&sample(), &output, &SaveOptions::default()).unwrap();
        assert!(output.is_file());

        let back = image::open(&output).unwrap();
        assert_eq!((back.width(), back.height()), (8, 8));
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.dat");

        let options = SaveOptions {
            format: Some(OutputFormat::Jpeg),
            quality: Some(80),
        };
        save_transformed_image(&sample(), &output, &options).unwrap();
        assert!(output.is_file());
    }

    #[test]
    fn unknown_extension_without_format_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.dat");

        let err =
            save_transformed_image(&sample(), &output, &SaveOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "output", .. }));
        assert!(!output.exists());
    }

    #[test]
    fn out_of_range_quality_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.jpg");

        let options = SaveOptions {
            format: None,
            quality: Some(0),
        };
        let err = save_transformed_image(&sample(), &output, &options).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "quality", .. }));
        assert!(!output.exists());
    }
}
