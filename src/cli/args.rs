use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use imgbox::types::{Anchor, OutputFormat};

#[derive(Parser)]
#[command(name = "imgbox", version, about = "IMGBOX CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resize to cover the target box, then crop the overhang
    Crop(CropArgs),
    /// Resize to fit inside the target box, then pad with a solid background
    Fit(FitArgs),
}

#[derive(Args)]
pub struct CropArgs {
    /// Source image path
    pub input: PathBuf,

    /// Destination path (.png, .jpg or .jpeg)
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Which part of the oversized image survives the crop
    #[arg(long, alias = "crop_type", value_enum, default_value_t = Anchor::Center)]
    pub crop_type: Anchor,
}

#[derive(Args)]
pub struct FitArgs {
    /// Source image path
    pub input: PathBuf,

    /// Destination path (.png, .jpg or .jpeg)
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Where the undersized image sits on the padded canvas
    #[arg(long, alias = "fit_type", value_enum, default_value_t = Anchor::Center)]
    pub fit_type: Anchor,

    /// Background color as #RRGGBB or #RRGGBBAA
    #[arg(long, alias = "fill_color", default_value = "#000000")]
    pub fill_color: String,
}

#[derive(Args)]
pub struct CommonArgs {
    /// Target box as width and height in pixels
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [200, 200])]
    pub size: Vec<u32>,

    /// Output format; inferred from the destination extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JPEG quality (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    /// JSON preset file; replaces size/anchor/fill/format/quality flags
    #[arg(long)]
    pub params: Option<PathBuf>,
}
