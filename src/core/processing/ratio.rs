//! Aspect-ratio analysis: decides which axis constrains a transform.
use crate::error::{Error, Result};
use crate::types::Dimensions;

/// Two ratios closer than this are treated as equal.
pub const RATIO_TOLERANCE: f64 = 1e-9;

/// Relation between the target box's aspect ratio and the source's.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AspectCase {
    /// Target is relatively wider: width is the constraining axis for crop,
    /// height for fit.
    TargetWider,
    /// Target is relatively taller: the mirror case.
    TargetNarrower,
    /// Ratios match within tolerance: a direct resize suffices.
    Equal,
}

/// Classify `target` against `source`.
///
/// Fails with `ZeroDimension` before any ratio is computed if either operand
/// has a zero component.
pub fn classify_aspect(source: Dimensions, target: Dimensions) -> Result<AspectCase> {
    for dims in [source, target] {
        if dims.width == 0 || dims.height == 0 {
            return Err(Error::ZeroDimension {
                width: dims.width,
                height: dims.height,
            });
        }
    }

    let source_ratio = source.width as f64 / source.height as f64;
    let target_ratio = target.width as f64 / target.height as f64;

    if (target_ratio - source_ratio).abs() <= RATIO_TOLERANCE {
        Ok(AspectCase::Equal)
    } else if target_ratio > source_ratio {
        Ok(AspectCase::TargetWider)
    } else {
        Ok(AspectCase::TargetNarrower)
    }
}
