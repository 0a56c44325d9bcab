// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "line-raster")]
#[command(about = "Rasterize a batch of line segments into an image", long_about = None)]
pub struct Cli {
    /// JSON batch request (width, height, channels, color, lines)
    #[arg(long, short = 'r', conflicts_with = "star")]
    pub request: Option<PathBuf>,

    /// Draw N rays from the image centre instead of reading a request
    #[arg(long, value_name = "N")]
    pub star: Option<u32>,

    /// Image size for --star, as WIDTHxHEIGHT
    #[arg(long, default_value = "256x256", value_parser = parse_size)]
    pub size: (usize, usize),

    /// Output file (.pgm/.ppm for 1/3 channels, raw bytes otherwise)
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Suppress the summary line
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

fn parse_size(value: &str) -> Result<(usize, usize), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width = width.parse().map_err(|e| format!("bad width {width:?}: {e}"))?;
    let height = height.parse().map_err(|e| format!("bad height {height:?}: {e}"))?;
    Ok((width, height))
}
