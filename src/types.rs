//! Shared types used across IMGBOX.
//! Includes `Anchor`, `TransformMode`, `OutputFormat`, `Dimensions`,
//! `FillColor`, and the polymorphic `ImageSource` input.
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::{DynamicImage, Rgb, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Alignment rule choosing which part of an oversized image survives cropping,
/// or where an undersized image sits on the padded canvas.
///
/// On the vertical axis `Start` is the top edge; on the horizontal axis it is
/// the left edge. The CLI and config names are "top", "middle", "bottom".
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Anchor {
    #[serde(rename = "top")]
    Start,
    #[serde(rename = "middle")]
    Center,
    #[serde(rename = "bottom")]
    End,
}

impl Anchor {
    /// Parse the wire/CLI spelling. Rejects anything outside
    /// top/middle/bottom so bad values fail before any resizing work.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Anchor::Start),
            "middle" => Ok(Anchor::Center),
            "bottom" => Ok(Anchor::End),
            other => Err(Error::invalid_argument("anchor", other)),
        }
    }
}

// Manual implementation to keep the historical top/middle/bottom spellings
// instead of the derived start/center/end.
impl ValueEnum for Anchor {
    fn value_variants<'a>() -> &'a [Self] {
        &[Anchor::Start, Anchor::Center, Anchor::End]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Anchor::Start => clap::builder::PossibleValue::new("top"),
            Anchor::Center => clap::builder::PossibleValue::new("middle"),
            Anchor::End => clap::builder::PossibleValue::new("bottom"),
        })
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Anchor::Start => "top",
            Anchor::Center => "middle",
            Anchor::End => "bottom",
        };
        write!(f, "{}", s)
    }
}

/// Which normalization policy a transform applies.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Resize to cover the box, then crop the overhang.
    Crop,
    /// Resize to fit inside the box, then pad with a solid background.
    Fit,
}

impl std::fmt::Display for TransformMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformMode::Crop => write!(f, "crop"),
            TransformMode::Fit => write!(f, "fit"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Infer the output format from a destination extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// An ordered (width, height) pair in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }

    pub fn of(img: &DynamicImage) -> Self {
        Dimensions {
            width: img.width(),
            height: img.height(),
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Solid background color used by the fit path.
///
/// Parsed from `#RRGGBB` or `#RRGGBBAA`; alpha defaults to opaque.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FillColor {
    pub const BLACK: FillColor = FillColor {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub fn parse(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::invalid_argument("fill_color", s))?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(Error::invalid_argument("fill_color", s));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::invalid_argument("fill_color", s))
        };
        Ok(FillColor {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: if hex.len() == 8 { byte(6)? } else { 255 },
        })
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for FillColor {
    fn default() -> Self {
        FillColor::BLACK
    }
}

impl std::fmt::Display for FillColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Polymorphic transform input: a path for the decoder, or an image that is
/// already in memory. Resolved exactly once at the facade entry.
pub enum ImageSource {
    Path(PathBuf),
    Decoded(DynamicImage),
}

impl ImageSource {
    pub fn resolve(self) -> Result<DynamicImage> {
        match self {
            ImageSource::Path(path) => crate::io::reader::decode_image(&path),
            ImageSource::Decoded(img) => Ok(img),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(img: DynamicImage) -> Self {
        ImageSource::Decoded(img)
    }
}
