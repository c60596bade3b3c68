use std::path::Path;

use tracing::info;

use imgbox::types::{Anchor, Dimensions, FillColor, ImageSource, TransformMode};
use imgbox::{SaveOptions, TransformParams, api};

use super::args::{CliArgs, Command, CommonArgs};
use super::errors::AppError;

fn build_params(
    mode: TransformMode,
    common: &CommonArgs,
    anchor: Anchor,
    fill_color: &str,
) -> Result<TransformParams, Box<dyn std::error::Error>> {
    // A preset file replaces the per-flag configuration wholesale; only the
    // mode is forced by the chosen subcommand.
    if let Some(preset) = &common.params {
        let mut params = TransformParams::from_json_file(preset)?;
        params.mode = mode;
        return Ok(params);
    }

    let (width, height) = (common.size[0], common.size[1]);
    if width == 0 || height == 0 {
        return Err(AppError::ZeroSize { width, height }.into());
    }

    if let Some(quality) = common.quality {
        if !(1..=100).contains(&quality) {
            return Err(AppError::InvalidQuality { quality }.into());
        }
    }

    Ok(TransformParams {
        mode,
        size: Dimensions::new(width, height),
        anchor,
        fill_color: FillColor::parse(fill_color)?,
        save: SaveOptions {
            format: common.format,
            quality: common.quality,
        },
    })
}

fn process_single_file(
    input: &Path,
    output: &Path,
    params: &TransformParams,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Processing ({}): {:?} -> {:?}", params.mode, input, output);
    info!("Target size: {}, anchor: {}", params.size, params.anchor);

    api::process_to_path(ImageSource::Path(input.to_path_buf()), output, params)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match args.command {
        Command::Crop(crop) => {
            let params = build_params(
                TransformMode::Crop,
                &crop.common,
                crop.crop_type,
                "#000000",
            )?;
            process_single_file(&crop.input, &crop.output, &params)?;
            info!("Successfully processed: {:?} -> {:?}\n", crop.input, crop.output);
        }
        Command::Fit(fit) => {
            let params = build_params(
                TransformMode::Fit,
                &fit.common,
                fit.fit_type,
                &fit.fill_color,
            )?;
            process_single_file(&fit.input, &fit.output, &params)?;
            info!("Successfully processed: {:?} -> {:?}\n", fit.input, fit.output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::{Rgba, RgbaImage};

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn zero_size_is_rejected_before_processing() {
        let args = parse(&["imgbox", "crop", "in.png", "out.png", "--size", "0", "100"]);
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("Size must be greater than 0"));
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        let args = parse(&[
            "imgbox", "fit", "in.png", "out.jpg", "--quality", "101",
        ]);
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("Quality must be between"));
    }

    #[test]
    fn crop_subcommand_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("sub/out.png");
        RgbaImage::from_pixel(400, 200, Rgba([50, 60, 70, 255]))
            .save(&input)
            .unwrap();

        let args = parse(&[
            "imgbox",
            "crop",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--size",
            "100",
            "100",
            "--crop-type",
            "middle",
        ]);
        run(args).unwrap();

        let back = image::open(&output).unwrap();
        assert_eq!((back.width(), back.height()), (100, 100));
    }

    #[test]
    fn fit_subcommand_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        RgbaImage::from_pixel(100, 400, Rgba([255, 0, 0, 255]))
            .save(&input)
            .unwrap();

        let args = parse(&[
            "imgbox",
            "fit",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--size",
            "200",
            "100",
            "--fit-type",
            "top",
            "--fill-color",
            "#000000",
        ]);
        run(args).unwrap();

        let back = image::open(&output).unwrap().to_rgba8();
        assert_eq!((back.width(), back.height()), (200, 100));
        // padded corner is pure fill
        assert_eq!(*back.get_pixel(199, 99), Rgba([0, 0, 0, 255]));
    }
}
