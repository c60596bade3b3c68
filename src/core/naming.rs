//! Naming scheme for persisted transform variants: `stem@WxH.ext`.
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::Dimensions;

/// A persisted rendition of a source image at one target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Path relative to the variant root, usable as a URL path.
    pub rel_path: String,
    /// Absolute destination path.
    pub path: PathBuf,
    /// False when the file already existed and no work was done.
    pub created: bool,
}

/// Relative destination for a variant of `src_name` under `prefix`.
///
/// `photos/cat.png` at 200x100 under `thumbs` becomes
/// `thumbs/photos/cat@200x100.png`. A leading `./` is stripped. The name
/// must carry an extension so the output format stays inferable.
pub fn variant_rel_path(src_name: &str, prefix: &str, size: Dimensions) -> Result<String> {
    let name = src_name.strip_prefix("./").unwrap_or(src_name);
    let (stem, ext) = name
        .rsplit_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
        .ok_or_else(|| Error::invalid_argument("src_name", src_name))?;

    let rel = format!("{stem}@{}x{}.{ext}", size.width, size.height);
    if prefix.is_empty() {
        Ok(rel)
    } else {
        let prefix = prefix.strip_prefix("./").unwrap_or(prefix);
        Ok(format!("{}/{rel}", prefix.trim_end_matches('/')))
    }
}
