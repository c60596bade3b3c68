#![doc = r##"
IMGBOX — deterministic image normalization to a fixed bounding box.

This crate provides two pure geometric transforms over decoded raster images:
crop-to-fill (resize to cover the target box, then crop the overhang) and
fit-to-box (resize to fit inside the target box, then pad with a solid
background color). It powers the IMGBOX CLI and can be embedded in your own
Rust applications.

Both transforms are synchronous, single-threaded, and reentrant: each call is
a bounded computation over one image buffer with no shared state, so separate
buffers can be processed in parallel without coordination.

Quick start: transform a file to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use imgbox::{
    api::process_to_path,
    Anchor, Dimensions, FillColor, ImageSource, SaveOptions, TransformMode, TransformParams,
};

fn main() -> imgbox::Result<()> {
    let params = TransformParams {
        mode: TransformMode::Crop,
        size: Dimensions::new(200, 200),
        anchor: Anchor::Center,
        fill_color: FillColor::BLACK,
        save: SaveOptions::default(),
    };

    process_to_path(
        ImageSource::Path("/photos/cat.png".into()),
        Path::new("/out/cat_thumb.png"),
        &params,
    )
}
```

Pure in-memory transforms
-------------------------
```rust
use image::{DynamicImage, Rgba, RgbaImage};
use imgbox::{api, Anchor, Dimensions, FillColor};

fn main() -> imgbox::Result<()> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        400,
        200,
        Rgba([128, 128, 128, 255]),
    ));

    // Cover a square box and keep the middle window
    let thumb = api::resize_and_crop(&img, Dimensions::new(100, 100), Anchor::Center)?;
    assert_eq!((thumb.width(), thumb.height()), (100, 100));

    // Fit inside a wide box, padding with white
    let padded = api::resize_and_fit(
        &img,
        Dimensions::new(300, 300),
        Anchor::Start,
        FillColor::parse("#FFFFFF")?,
    )?;
    assert_eq!((padded.width(), padded.height()), (300, 300));
    Ok(())
}
```

Variant cache helper
--------------------
```rust,no_run
use std::path::Path;
use imgbox::{api, TransformParams};

fn main() -> imgbox::Result<()> {
    // Creates media/thumbs/cat@200x200.png on first call, reuses it after.
    let variant = api::ensure_variant(
        Path::new("/photos/cat.png"),
        Path::new("/srv/media"),
        "thumbs",
        &TransformParams::default(),
    )?;
    println!("url path: {} (created: {})", variant.rel_path, variant.created);
    Ok(())
}
```

Error handling
--------------
All public functions return `imgbox::Result<T>`; match on `imgbox::Error` to
handle specific cases. Argument validation (`InvalidArgument`,
`ZeroDimension`) fails before any resampling work; decode, encode, and I/O
errors propagate unmodified.

```rust,no_run
use std::path::Path;
use imgbox::{api, Error, TransformParams};

fn main() {
    match api::process_to_path(
        Path::new("/bad/path.png").into(),
        Path::new("/out.png"),
        &TransformParams::default(),
    ) {
        Ok(()) => {}
        Err(Error::Decode { path, source }) => {
            eprintln!("cannot read {}: {source}", path.display())
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `Anchor`, `Dimensions`, `FillColor`).
- [`io`] — image decoding and PNG/JPEG writers.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{SaveOptions, TransformParams};
pub use error::{Error, Result};
pub use types::{Anchor, Dimensions, FillColor, ImageSource, OutputFormat, TransformMode};

// Processing primitives kept public for fine-grained consumers
pub use crate::core::naming::{Variant, variant_rel_path};
pub use crate::core::processing::ratio::{AspectCase, classify_aspect};

// High-level API re-exports
pub use api::{
    ensure_variant, process_to_buffer, process_to_path, resize_and_crop, resize_and_fit,
};
