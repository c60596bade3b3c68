//! High-level, ergonomic library API: the `resize_and_crop` / `resize_and_fit`
//! transforms, path-level processing entrypoints, and the variant cache
//! helper. Prefer these over the low-level processing modules when embedding
//! IMGBOX.
use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::core::naming::{Variant, variant_rel_path};
use crate::core::params::TransformParams;
use crate::core::processing::crop::{apply_crop, crop_rect};
use crate::core::processing::fit::fit_onto_background;
use crate::core::processing::ratio::{AspectCase, classify_aspect};
use crate::core::processing::save::save_transformed_image;
use crate::core::processing::scale::{contain_dimensions, cover_dimensions, resize_exact};
use crate::error::{Error, Result};
use crate::types::{Anchor, Dimensions, FillColor, ImageSource, TransformMode};

/// Resize `img` so it covers `target`, then crop the overhang per `anchor`.
///
/// The result has exactly the target dimensions. Equal aspect ratios reduce
/// to a direct resize with no cropping.
pub fn resize_and_crop(
    img: &DynamicImage,
    target: Dimensions,
    anchor: Anchor,
) -> Result<DynamicImage> {
    let source = Dimensions::of(img);
    let case = classify_aspect(source, target)?;

    match case {
        AspectCase::Equal => resize_exact(img, target),
        _ => {
            let intermediate = cover_dimensions(source, target, case);
            let scaled = resize_exact(img, intermediate)?;
            let rect = crop_rect(intermediate, target, case, anchor);
            Ok(apply_crop(&scaled, rect))
        }
    }
}

/// Resize `img` so it fits inside `target`, then pad with `fill` per `anchor`.
///
/// The result has exactly the target dimensions. Equal aspect ratios reduce
/// to a direct resize; no background canvas is allocated in that case.
pub fn resize_and_fit(
    img: &DynamicImage,
    target: Dimensions,
    anchor: Anchor,
    fill: FillColor,
) -> Result<DynamicImage> {
    let source = Dimensions::of(img);
    let case = classify_aspect(source, target)?;

    match case {
        AspectCase::Equal => resize_exact(img, target),
        _ => {
            let intermediate = contain_dimensions(source, target, case);
            let scaled = resize_exact(img, intermediate)?;
            if Dimensions::of(&scaled) == target {
                return Ok(scaled);
            }
            Ok(fit_onto_background(&scaled, target, anchor, fill))
        }
    }
}

/// Resolve `source` and apply the transform described by `params` (no disk
/// output).
pub fn process_to_buffer(source: ImageSource, params: &TransformParams) -> Result<DynamicImage> {
    let img = source.resolve()?;
    match params.mode {
        TransformMode::Crop => resize_and_crop(&img, params.size, params.anchor),
        TransformMode::Fit => resize_and_fit(&img, params.size, params.anchor, params.fill_color),
    }
}

/// Resolve `source`, apply the transform, and persist the result at `output`,
/// creating missing parent directories.
pub fn process_to_path(
    source: ImageSource,
    output: &Path,
    params: &TransformParams,
) -> Result<()> {
    let img = process_to_buffer(source, params)?;
    save_transformed_image(&img, output, &params.save)
}

/// Ensure the `params`-sized variant of `source` exists under `root_dir`.
///
/// The variant is named `prefix/stem@WxH.ext` next to its relative URL path.
/// When the destination file already exists nothing is recomputed; otherwise
/// the source is decoded, transformed, and saved. All failures surface as
/// structured errors.
pub fn ensure_variant(
    source: &Path,
    root_dir: &Path,
    prefix: &str,
    params: &TransformParams,
) -> Result<Variant> {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::invalid_argument("source", source.display()))?;

    let rel_path = variant_rel_path(name, prefix, params.size)?;
    let path = root_dir.join(&rel_path);

    if path.is_file() {
        info!("Variant already exists: {:?}", path);
        return Ok(Variant {
            rel_path,
            path,
            created: false,
        });
    }

    process_to_path(ImageSource::Path(source.to_path_buf()), &path, params)?;
    Ok(Variant {
        rel_path,
        path,
        created: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::SaveOptions;
    use image::{Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbaImage::new(width, height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgba([(x % 256) as u8, (y % 256) as u8, 55, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn crop_always_hits_target_dimensions() {
        let target = Dimensions::new(100, 100);
        for (w, h) in [(400, 200), (200, 400), (150, 151), (90, 33)] {
            for anchor in [Anchor::Start, Anchor::Center, Anchor::End] {
                let out = resize_and_crop(&gradient(w, h), target, anchor).unwrap();
                assert_eq!(Dimensions::of(&out), target, "source {w}x{h} anchor {anchor}");
            }
        }
    }

    #[test]
    fn fit_always_hits_target_dimensions() {
        let target = Dimensions::new(120, 80);
        for (w, h) in [(400, 200), (200, 400), (37, 111), (80, 120)] {
            for anchor in [Anchor::Start, Anchor::Center, Anchor::End] {
                let out =
                    resize_and_fit(&gradient(w, h), target, anchor, FillColor::BLACK).unwrap();
                assert_eq!(Dimensions::of(&out), target, "source {w}x{h} anchor {anchor}");
            }
        }
    }

    #[test]
    fn wide_source_center_crops_the_middle_window() {
        // 200x100 covers 100x100 with no resampling, so pixel positions are
        // directly checkable: the window is (50, 0, 150, 100).
        let out = resize_and_crop(
            &gradient(200, 100),
            Dimensions::new(100, 100),
            Anchor::Center,
        )
        .unwrap();
        let rgba = out.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0)[0], 50);
        assert_eq!(rgba.get_pixel(99, 99)[0], 149);
    }

    #[test]
    fn equal_ratio_is_a_pure_rescale() {
        let out = resize_and_crop(
            &gradient(300, 300),
            Dimensions::new(150, 150),
            Anchor::Center,
        )
        .unwrap();
        assert_eq!(Dimensions::of(&out), Dimensions::new(150, 150));

        let out = resize_and_fit(
            &gradient(300, 300),
            Dimensions::new(150, 150),
            Anchor::Center,
            FillColor::BLACK,
        )
        .unwrap();
        assert_eq!(Dimensions::of(&out), Dimensions::new(150, 150));
    }

    #[test]
    fn crop_to_own_size_is_identity() {
        let img = gradient(120, 80);
        let out = resize_and_crop(&img, Dimensions::new(120, 80), Anchor::Center).unwrap();
        assert_eq!(out.to_rgba8().as_raw(), img.to_rgba8().as_raw());
    }

    #[test]
    fn tall_source_fits_at_origin_with_top_anchor() {
        // Source is already at contain size (25x100), so the paste content is
        // exact: image at the origin, black border elsewhere.
        let red = Rgba([210, 0, 0, 255]);
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(25, 100, red));
        let out = resize_and_fit(
            &img,
            Dimensions::new(200, 100),
            Anchor::Start,
            FillColor::BLACK,
        )
        .unwrap();

        assert_eq!(Dimensions::of(&out), Dimensions::new(200, 100));
        let rgba = out.to_rgba8();
        assert_eq!(*rgba.get_pixel(0, 0), red);
        assert_eq!(*rgba.get_pixel(24, 99), red);
        assert_eq!(*rgba.get_pixel(25, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*rgba.get_pixel(199, 99), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn zero_target_fails_before_any_work() {
        let err = resize_and_crop(&gradient(10, 10), Dimensions::new(100, 0), Anchor::Center)
            .unwrap_err();
        assert!(matches!(err, Error::ZeroDimension { .. }));

        let err = resize_and_fit(
            &gradient(10, 10),
            Dimensions::new(0, 100),
            Anchor::Center,
            FillColor::BLACK,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ZeroDimension { .. }));
    }

    #[test]
    fn process_to_path_writes_the_transformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/out.png");

        let params = TransformParams {
            mode: TransformMode::Crop,
            size: Dimensions::new(50, 50),
            anchor: Anchor::Center,
            fill_color: FillColor::BLACK,
            save: SaveOptions::default(),
        };
        process_to_path(ImageSource::Decoded(gradient(200, 100)), &output, &params).unwrap();

        let back = image::open(&output).unwrap();
        assert_eq!((back.width(), back.height()), (50, 50));
    }

    #[test]
    fn ensure_variant_creates_once_then_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cat.png");
        gradient(40, 20).save(&source).unwrap();
        let root = dir.path().join("media");

        let params = TransformParams {
            size: Dimensions::new(20, 20),
            ..TransformParams::default()
        };

        let first = ensure_variant(&source, &root, "thumbs", &params).unwrap();
        assert!(first.created);
        assert_eq!(first.rel_path, "thumbs/cat@20x20.png");
        assert!(first.path.is_file());

        let second = ensure_variant(&source, &root, "thumbs", &params).unwrap();
        assert!(!second.created);
        assert_eq!(second.path, first.path);
    }

    #[test]
    fn ensure_variant_propagates_decode_failures() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"not an image").unwrap();

        let err = ensure_variant(
            &source,
            dir.path(),
            "thumbs",
            &TransformParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
