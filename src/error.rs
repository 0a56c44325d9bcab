use thiserror::Error;

/// Errors reported by the batch drawer before any pixel is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("image must be 2D (H, W) or 3D (H, W, C) with at least one channel, got shape {dims:?}")]
    Shape { dims: Vec<usize> },

    #[error("image shape is too large to address")]
    Overflow,

    #[error("image buffer holds {actual} bytes but its shape needs {needed}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("color has {actual} components but the image has {expected} channels")]
    ColorLengthMismatch { expected: usize, actual: usize },

    #[error("line table must be a [N, 4] array, got {len} values")]
    LineShape { len: usize },
}
