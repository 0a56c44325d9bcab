//! Integer-only line rasterization into caller-owned pixel buffers.
//!
//! ```
//! use line_raster::{draw_lines_in, Segment};
//!
//! let mut pixels = vec![0u8; 10 * 10 * 3];
//! draw_lines_in(&mut pixels, &[10, 10, 3], &[Segment::new(0, 0, 9, 9)], &[255, 0, 0]).unwrap();
//! assert_eq!(&pixels[0..3], &[255, 0, 0]);
//! ```

pub mod bresenham;
pub mod cli;
pub mod draw;
pub mod error;
pub mod image;
pub mod output;
pub mod pattern;
mod raster;
pub mod request;
pub mod segment;

pub use bresenham::BresenhamLine;
pub use draw::{draw_lines, draw_lines_in, DrawStats};
pub use error::DrawError;
pub use image::{ImageMut, Layout};
pub use segment::Segment;
