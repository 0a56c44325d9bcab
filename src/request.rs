use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// A batch of lines to draw into a freshly allocated image, as read from JSON.
///
/// ```json
/// { "width": 64, "height": 48, "channels": 3,
///   "color": [255, 0, 0], "lines": [[0, 0, 63, 47]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub width: usize,
    pub height: usize,
    /// Omitted means a single-channel (grayscale) image
    #[serde(default)]
    pub channels: Option<usize>,
    pub color: Vec<u8>,
    /// Initial value of every pixel; zero when omitted
    #[serde(default)]
    pub background: Option<Vec<u8>>,
    pub lines: Vec<[i32; 4]>,
}

impl BatchRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse batch request")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch request: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid batch request: {:?}", path))
    }

    /// Array shape of the target image, `[H, W]` or `[H, W, C]`
    pub fn shape(&self) -> Vec<usize> {
        match self.channels {
            Some(channels) => vec![self.height, self.width, channels],
            None => vec![self.height, self.width],
        }
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.lines.iter().copied().map(Segment::from).collect()
    }

    /// Allocate the image buffer, filled with the background color
    pub fn allocate(&self) -> Result<Vec<u8>> {
        let channels = self.channels.unwrap_or(1);
        let pixel_count = self
            .width
            .checked_mul(self.height)
            .context("Image dimensions overflow")?;
        let len = pixel_count
            .checked_mul(channels)
            .context("Image dimensions overflow")?;

        match &self.background {
            None => Ok(vec![0; len]),
            Some(background) => {
                ensure!(
                    background.len() == channels,
                    "Background has {} components but the image has {} channels",
                    background.len(),
                    channels
                );
                Ok(background.iter().copied().cycle().take(len).collect())
            }
        }
    }
}
