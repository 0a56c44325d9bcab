use glam::IVec2;

use crate::error::DrawError;

/// Line segment between two pixel coordinates, both endpoints inclusive.
///
/// Coordinates may lie anywhere in the `i32` range; pixels that fall outside
/// the target image are skipped while drawing.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Segment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Segment {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_points(start: IVec2, end: IVec2) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// View a flat `[N, 4]` line table as segments without copying
    pub fn from_flat(values: &[i32]) -> Result<&[Segment], DrawError> {
        bytemuck::try_cast_slice(values).map_err(|_| DrawError::LineShape { len: values.len() })
    }

    pub fn start(&self) -> IVec2 {
        IVec2::new(self.x0, self.y0)
    }

    pub fn end(&self) -> IVec2 {
        IVec2::new(self.x1, self.y1)
    }

    /// Same segment traversed from the other end
    pub fn reversed(&self) -> Self {
        Self::new(self.x1, self.y1, self.x0, self.y0)
    }

    /// True when both endpoints coincide (draws a single pixel)
    pub fn is_point(&self) -> bool {
        self.x0 == self.x1 && self.y0 == self.y1
    }
}

impl From<(i32, i32, i32, i32)> for Segment {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

impl From<[i32; 4]> for Segment {
    fn from([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_views_table() {
        let table = [0, 0, 9, 0, 3, -4, 5, 7];
        let segments = Segment::from_flat(&table).unwrap();

        assert_eq!(segments, &[Segment::new(0, 0, 9, 0), Segment::new(3, -4, 5, 7)]);
    }

    #[test]
    fn test_from_flat_empty() {
        assert!(Segment::from_flat(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_from_flat_rejects_ragged_table() {
        let table = [0, 0, 9, 0, 1];
        assert_eq!(Segment::from_flat(&table), Err(DrawError::LineShape { len: 5 }));
    }

    #[test]
    fn test_points_and_reverse() {
        let segment = Segment::from_points(IVec2::new(1, 2), IVec2::new(-3, 4));

        assert_eq!(segment.start(), IVec2::new(1, 2));
        assert_eq!(segment.end(), IVec2::new(-3, 4));
        assert_eq!(segment.reversed(), Segment::new(-3, 4, 1, 2));
        assert!(!segment.is_point());
        assert!(Segment::from((5, 5, 5, 5)).is_point());
    }
}
