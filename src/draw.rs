use log::{debug, trace};

use crate::error::DrawError;
use crate::image::ImageMut;
use crate::raster::rasterize;
use crate::segment::Segment;

/// Summary of a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Segments processed
    pub segments: usize,
    /// In-bounds pixel writes, counting overdraw
    pub pixels_written: usize,
}

/// Draw every segment in `segments`, in order, with a single `color`.
///
/// The color is checked against the image channel count before anything is
/// drawn, so on error the image is left untouched. Where segments overlap the
/// later one wins.
pub fn draw_lines(
    image: &mut ImageMut<'_>,
    segments: &[Segment],
    color: &[u8],
) -> Result<DrawStats, DrawError> {
    let layout = image.layout();
    if color.len() != layout.channels() {
        return Err(DrawError::ColorLengthMismatch {
            expected: layout.channels(),
            actual: color.len(),
        });
    }

    debug!(
        "drawing {} lines into {}x{}x{} image",
        segments.len(),
        layout.width(),
        layout.height(),
        layout.channels()
    );

    let mut stats = DrawStats::default();
    for (i, segment) in segments.iter().enumerate() {
        let written = rasterize(image, *segment, color);
        trace!("line {i} {segment:?}: {written} pixels");

        stats.segments += 1;
        stats.pixels_written += written;
    }

    Ok(stats)
}

/// Draw into a raw buffer described by an array shape (`[H, W]` or `[H, W, C]`).
///
/// Shape, buffer length and color are all validated before the first write.
pub fn draw_lines_in(
    pixels: &mut [u8],
    shape: &[usize],
    segments: &[Segment],
    color: &[u8],
) -> Result<DrawStats, DrawError> {
    let mut image = ImageMut::new(pixels, shape)?;
    draw_lines(&mut image, segments, color)
}
