use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use line_raster::cli::Cli;
use line_raster::output::write_image;
use line_raster::pattern::star;
use line_raster::request::BatchRequest;
use line_raster::{draw_lines, ImageMut};

fn load_request(cli: &Cli) -> Result<BatchRequest> {
    if let Some(path) = &cli.request {
        return BatchRequest::load(path);
    }

    let Some(rays) = cli.star else {
        bail!("Nothing to draw: pass --request FILE or --star N");
    };

    let (width, height) = cli.size;
    Ok(BatchRequest {
        width,
        height,
        channels: Some(3),
        color: vec![255, 255, 255],
        background: None,
        lines: star(width, height, rays)
            .into_iter()
            .map(|s| [s.x0, s.y0, s.x1, s.y1])
            .collect(),
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = load_request(&cli)?;

    let mut pixels = request.allocate()?;
    let mut image = ImageMut::new(&mut pixels, &request.shape()).context("Invalid image shape")?;
    let layout = image.layout();

    let stats = draw_lines(&mut image, &request.segments(), &request.color)
        .context("Failed to draw lines")?;
    info!("{:?}", stats);

    write_image(&cli.output, layout, &pixels)?;

    if !cli.quiet {
        println!(
            "Drew {} lines ({} pixels) into {}x{}x{} image: {:?}",
            stats.segments,
            stats.pixels_written,
            layout.width(),
            layout.height(),
            layout.channels(),
            cli.output
        );
    }

    Ok(())
}
