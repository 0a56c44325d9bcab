use crate::bresenham::BresenhamLine;
use crate::image::ImageMut;
use crate::segment::Segment;

/// Draw one segment into `image`, writing `color` into every in-bounds pixel on its path.
///
/// Pixels outside the image are skipped without interrupting the walk, so a
/// segment that is partly or fully off-image still terminates normally.
/// Returns the number of pixels written.
///
/// Crate-internal: callers go through [`draw_lines`](crate::draw::draw_lines),
/// which rejects a color of the wrong length before anything is drawn.
///
/// # Panics
///
/// Panics if `color.len()` differs from the image channel count.
pub(crate) fn rasterize(image: &mut ImageMut<'_>, segment: Segment, color: &[u8]) -> usize {
    assert_eq!(
        color.len(),
        image.layout().channels(),
        "color length must match the image channel count"
    );

    let mut written = 0;
    for (x, y) in BresenhamLine::new(segment) {
        if let Some(pixel) = image.pixel_mut(x, y) {
            pixel.copy_from_slice(color);
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_every_channel() {
        let mut pixels = vec![0u8; 4 * 4 * 3];
        let mut image = ImageMut::new(&mut pixels, &[4, 4, 3]).unwrap();

        let written = rasterize(&mut image, Segment::new(0, 0, 3, 3), &[10, 20, 30]);

        assert_eq!(written, 4);
        for i in 0..4 {
            assert_eq!(image.pixel(i, i), Some(&[10, 20, 30][..]));
        }
        assert_eq!(image.pixel(1, 0), Some(&[0, 0, 0][..]));
    }

    #[test]
    fn test_partially_outside() {
        let mut pixels = vec![0u8; 5 * 5];
        let mut image = ImageMut::new(&mut pixels, &[5, 5]).unwrap();

        let written = rasterize(&mut image, Segment::new(-3, 2, 8, 2), &[255]);

        assert_eq!(written, 5);
        assert_eq!(&image.as_bytes()[10..15], &[255; 5]);
    }

    #[test]
    fn test_zero_area_image_is_noop() {
        let mut pixels: Vec<u8> = Vec::new();
        let mut image = ImageMut::new(&mut pixels, &[0, 0, 3]).unwrap();

        assert_eq!(rasterize(&mut image, Segment::new(0, 0, 5, 5), &[1, 2, 3]), 0);
    }

    #[test]
    #[should_panic(expected = "color length")]
    fn test_color_length_is_checked() {
        let mut pixels = vec![0u8; 3];
        let mut image = ImageMut::new(&mut pixels, &[1, 1, 3]).unwrap();
        rasterize(&mut image, Segment::new(0, 0, 0, 0), &[1, 2]);
    }
}
