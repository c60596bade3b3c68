//! Background-canvas compositing for the fit-to-box path.
use image::{DynamicImage, RgbImage, RgbaImage, imageops};
use tracing::debug;

use crate::types::{Anchor, Dimensions, FillColor};

/// Offset of the pasted image along one axis.
/// Center truncates the half-pixel remainder; the crop path rounds it. The
/// two offsets follow different historical contracts and are kept distinct.
fn paste_axis_offset(target_extent: u32, scaled_extent: u32, anchor: Anchor) -> u32 {
    let slack = target_extent - scaled_extent;
    match anchor {
        Anchor::Start => 0,
        Anchor::Center => slack / 2,
        Anchor::End => slack,
    }
}

/// Top-left position of a contain-scaled image on the target canvas.
/// The axis that already matches the target yields 0 for every anchor.
pub fn paste_offset(scaled: Dimensions, target: Dimensions, anchor: Anchor) -> (u32, u32) {
    (
        paste_axis_offset(target.width, scaled.width, anchor),
        paste_axis_offset(target.height, scaled.height, anchor),
    )
}

/// Composite `scaled` onto a uniform `fill`-colored canvas of exactly
/// `target` size. Covered pixels are overwritten outright, no blending.
///
/// The canvas carries an alpha channel only when the input does, so the
/// output stays in the input's color family.
pub fn fit_onto_background(
    scaled: &DynamicImage,
    target: Dimensions,
    anchor: Anchor,
    fill: FillColor,
) -> DynamicImage {
    let (x, y) = paste_offset(Dimensions::of(scaled), target, anchor);
    debug!("Pasting {} at ({}, {}) on {} canvas", Dimensions::of(scaled), x, y, target);

    let mut canvas = if scaled.color().has_alpha() {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            target.width,
            target.height,
            fill.to_rgba(),
        ))
    } else {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(
            target.width,
            target.height,
            fill.to_rgb(),
        ))
    };
    imageops::replace(&mut canvas, scaled, x as i64, y as i64);
    canvas
}
