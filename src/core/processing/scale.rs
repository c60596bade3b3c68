//! Intermediate-dimension math and the actual resample step.
use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;
use tracing::debug;

use crate::core::processing::ratio::AspectCase;
use crate::error::Result;
use crate::types::Dimensions;

/// Proportional extent of the free axis when the fixed axis is scaled from
/// `fixed_source` to `fixed_target`. Rounds half away from zero, never 0.
fn scale_axis(free: u32, fixed_target: u32, fixed_source: u32) -> u32 {
    let scaled = free as f64 * fixed_target as f64 / fixed_source as f64;
    scaled.round().max(1.0) as u32
}

/// Smallest aspect-preserving dimensions that cover the target box.
///
/// One axis equals the target exactly; the other is clamped to at least the
/// target extent so the cropper always has non-negative slack.
pub fn cover_dimensions(source: Dimensions, target: Dimensions, case: AspectCase) -> Dimensions {
    match case {
        AspectCase::Equal => target,
        AspectCase::TargetWider => Dimensions::new(
            target.width,
            scale_axis(source.height, target.width, source.width).max(target.height),
        ),
        AspectCase::TargetNarrower => Dimensions::new(
            scale_axis(source.width, target.height, source.height).max(target.width),
            target.height,
        ),
    }
}

/// Largest aspect-preserving dimensions that fit inside the target box.
///
/// One axis equals the target exactly; the other is clamped to at most the
/// target extent so the fitter always has non-negative slack.
pub fn contain_dimensions(source: Dimensions, target: Dimensions, case: AspectCase) -> Dimensions {
    match case {
        AspectCase::Equal => target,
        AspectCase::TargetWider => Dimensions::new(
            scale_axis(source.width, target.height, source.height).min(target.width),
            target.height,
        ),
        AspectCase::TargetNarrower => Dimensions::new(
            target.width,
            scale_axis(source.height, target.width, source.width).min(target.height),
        ),
    }
}

/// Resample `img` to exactly `dims` with a Lanczos3 convolution.
///
/// A resize to the image's current dimensions is the identity and performs no
/// resampling, so same-size calls return pixel-identical content.
pub fn resize_exact(img: &DynamicImage, dims: Dimensions) -> Result<DynamicImage> {
    if Dimensions::of(img) == dims {
        return Ok(img.clone());
    }

    debug!("Resampling {} -> {}", Dimensions::of(img), dims);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    let mut dst = DynamicImage::new(dims.width, dims.height, img.color());
    resizer.resize(img, &mut dst, &options)?;
    Ok(dst)
}
