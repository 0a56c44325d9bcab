use crate::error::DrawError;

/// Validated image geometry: `height` rows of `width` pixels, `channels` bytes each.
///
/// Pixels are stored row-major with interleaved channels, so channel `c` of
/// pixel `(x, y)` lives at `(y * width + x) * channels + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    channels: usize,
    byte_len: usize,
}

impl Layout {
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self, DrawError> {
        if channels == 0 {
            return Err(DrawError::Shape {
                dims: vec![height, width, channels],
            });
        }

        let byte_len = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(DrawError::Overflow)?;

        Ok(Self {
            width,
            height,
            channels,
            byte_len,
        })
    }

    /// Derive geometry from an array shape: `[H, W]` is single channel, `[H, W, C]` has `C`
    pub fn from_shape(shape: &[usize]) -> Result<Self, DrawError> {
        match *shape {
            [height, width] => Self::new(width, height, 1),
            [height, width, channels] => Self::new(width, height, channels),
            _ => Err(DrawError::Shape {
                dims: shape.to_vec(),
            }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of bytes the image occupies
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// True if `(x, y)` names a pixel inside the image
    pub fn contains(&self, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.width)
            && usize::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Byte offset of the first channel of `(x, y)`, or `None` when out of bounds
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        // Fits: both coordinates are in bounds and byte_len did not overflow
        Some((y as usize * self.width + x as usize) * self.channels)
    }
}

/// Mutable, non-owning view of a caller-allocated image buffer
#[derive(Debug)]
pub struct ImageMut<'a> {
    pixels: &'a mut [u8],
    layout: Layout,
}

impl<'a> ImageMut<'a> {
    /// Wrap `pixels` using an array shape (`[H, W]` or `[H, W, C]`).
    ///
    /// The buffer may be longer than the shape requires; trailing bytes are never touched.
    pub fn new(pixels: &'a mut [u8], shape: &[usize]) -> Result<Self, DrawError> {
        Self::with_layout(pixels, Layout::from_shape(shape)?)
    }

    pub fn with_layout(pixels: &'a mut [u8], layout: Layout) -> Result<Self, DrawError> {
        if pixels.len() < layout.byte_len() {
            return Err(DrawError::BufferTooSmall {
                needed: layout.byte_len(),
                actual: pixels.len(),
            });
        }

        Ok(Self { pixels, layout })
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Channel bytes of pixel `(x, y)`
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        let offset = self.layout.offset(x, y)?;
        self.pixels.get(offset..offset + self.layout.channels)
    }

    pub(crate) fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [u8]> {
        let offset = self.layout.offset(x, y)?;
        self.pixels.get_mut(offset..offset + self.layout.channels)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels[..self.layout.byte_len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_2d_shape() {
        let layout = Layout::from_shape(&[4, 6]).unwrap();

        assert_eq!(layout.width(), 6);
        assert_eq!(layout.height(), 4);
        assert_eq!(layout.channels(), 1);
        assert_eq!(layout.byte_len(), 24);
    }

    #[test]
    fn test_layout_from_3d_shape() {
        let layout = Layout::from_shape(&[4, 6, 3]).unwrap();

        assert_eq!((layout.width(), layout.height(), layout.channels()), (6, 4, 3));
        assert_eq!(layout.byte_len(), 72);
    }

    #[test]
    fn test_layout_rejects_bad_dimensionality() {
        assert!(matches!(Layout::from_shape(&[10]), Err(DrawError::Shape { .. })));
        assert!(matches!(Layout::from_shape(&[1, 2, 3, 4]), Err(DrawError::Shape { .. })));
        assert!(matches!(Layout::from_shape(&[]), Err(DrawError::Shape { .. })));
    }

    #[test]
    fn test_layout_rejects_zero_channels() {
        assert_eq!(
            Layout::from_shape(&[2, 2, 0]),
            Err(DrawError::Shape { dims: vec![2, 2, 0] })
        );
    }

    #[test]
    fn test_layout_overflow() {
        assert_eq!(Layout::new(usize::MAX, 2, 1), Err(DrawError::Overflow));
    }

    #[test]
    fn test_offset_row_major_interleaved() {
        let layout = Layout::new(10, 5, 3).unwrap();

        assert_eq!(layout.offset(0, 0), Some(0));
        assert_eq!(layout.offset(1, 0), Some(3));
        assert_eq!(layout.offset(0, 1), Some(30));
        assert_eq!(layout.offset(9, 4), Some(147));
        assert_eq!(layout.offset(10, 0), None);
        assert_eq!(layout.offset(0, 5), None);
        assert_eq!(layout.offset(-1, 0), None);
    }

    #[test]
    fn test_zero_area_contains_nothing() {
        let layout = Layout::new(0, 7, 1).unwrap();
        assert!(!layout.contains(0, 0));
        assert_eq!(layout.byte_len(), 0);
    }

    #[test]
    fn test_image_rejects_short_buffer() {
        let mut pixels = vec![0u8; 10];
        assert_eq!(
            ImageMut::new(&mut pixels, &[2, 2, 3]).unwrap_err(),
            DrawError::BufferTooSmall { needed: 12, actual: 10 }
        );
    }

    #[test]
    fn test_image_ignores_trailing_bytes() {
        let mut pixels = vec![7u8; 20];
        let image = ImageMut::new(&mut pixels, &[2, 2, 3]).unwrap();

        assert_eq!(image.as_bytes().len(), 12);
        assert_eq!(image.pixel(1, 1), Some(&[7, 7, 7][..]));
        assert_eq!(image.pixel(2, 1), None);
    }
}
