//! Crop-rectangle computation and extraction for the crop-to-fill path.
use image::DynamicImage;
use tracing::debug;

use crate::core::processing::ratio::AspectCase;
use crate::types::{Anchor, Dimensions};

/// Pixel rectangle with exclusive right/bottom edges.
/// Invariant: left <= right, top <= bottom, within the source image bounds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Offset of the surviving window along the axis with slack.
/// Center rounds the half-pixel remainder to the nearest integer.
fn crop_offset(scaled_extent: u32, target_extent: u32, anchor: Anchor) -> u32 {
    let slack = scaled_extent - target_extent;
    match anchor {
        Anchor::Start => 0,
        Anchor::Center => ((slack as f64) / 2.0).round() as u32,
        Anchor::End => slack,
    }
}

/// Rectangle cutting a `target`-sized window out of a cover-scaled image.
///
/// The reduced axis spans exactly the target extent; the other axis already
/// equals the target and is taken in full.
pub fn crop_rect(
    scaled: Dimensions,
    target: Dimensions,
    case: AspectCase,
    anchor: Anchor,
) -> CropRect {
    let rect = match case {
        AspectCase::TargetWider => {
            let top = crop_offset(scaled.height, target.height, anchor);
            CropRect {
                left: 0,
                top,
                right: scaled.width,
                bottom: top + target.height,
            }
        }
        AspectCase::TargetNarrower => {
            let left = crop_offset(scaled.width, target.width, anchor);
            CropRect {
                left,
                top: 0,
                right: left + target.width,
                bottom: scaled.height,
            }
        }
        AspectCase::Equal => CropRect {
            left: 0,
            top: 0,
            right: scaled.width,
            bottom: scaled.height,
        },
    };
    debug!(
        "Crop window ({}, {}, {}, {}) from {}",
        rect.left, rect.top, rect.right, rect.bottom, scaled
    );
    rect
}

/// Extract `rect` from `img` into a new image of the rectangle's size.
pub fn apply_crop(img: &DynamicImage, rect: CropRect) -> DynamicImage {
    img.crop_imm(rect.left, rect.top, rect.width(), rect.height())
}
