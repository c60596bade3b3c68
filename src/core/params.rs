use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Anchor, Dimensions, FillColor, OutputFormat, TransformMode};

/// Encoder options applied when persisting a transformed image.
///
/// Constructed fresh per call (`SaveOptions::default()` is an empty value,
/// never a shared one). `None` fields fall back to extension inference and
/// the default JPEG quality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveOptions {
    pub format: Option<OutputFormat>,
    pub quality: Option<u8>,
}

/// Transform parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformParams {
    pub mode: TransformMode,
    pub size: Dimensions,
    pub anchor: Anchor,
    /// Background color for the fit path; ignored by crop.
    pub fill_color: FillColor,
    #[serde(default)]
    pub save: SaveOptions,
}

impl TransformParams {
    /// Load a preset from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::invalid_argument("params", format!("{}: {e}", path.display())))
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            mode: TransformMode::Crop,
            size: Dimensions::new(200, 200),
            anchor: Anchor::Center,
            fill_color: FillColor::BLACK,
            save: SaveOptions::default(),
        }
    }
}
