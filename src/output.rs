use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::image::Layout;

/// Write an image as binary netpbm: P5 for one channel, P6 for three.
///
/// Any other channel count is written as raw interleaved bytes with no header.
pub fn write_image(path: impl AsRef<Path>, layout: Layout, pixels: &[u8]) -> Result<()> {
    let path = path.as_ref();
    check_len(layout, pixels)?;

    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    encode(&mut writer, layout, pixels).with_context(|| format!("Failed to write {:?}", path))?;
    writer.flush()?;
    Ok(())
}

fn check_len(layout: Layout, pixels: &[u8]) -> Result<()> {
    ensure!(
        pixels.len() >= layout.byte_len(),
        "Image buffer holds {} bytes but its layout needs {}",
        pixels.len(),
        layout.byte_len()
    );
    Ok(())
}

fn encode(writer: &mut impl Write, layout: Layout, pixels: &[u8]) -> Result<()> {
    check_len(layout, pixels)?;

    let magic = match layout.channels() {
        1 => Some("P5"),
        3 => Some("P6"),
        _ => None,
    };

    if let Some(magic) = magic {
        write!(writer, "{}\n{} {}\n255\n", magic, layout.width(), layout.height())?;
    }
    writer.write_all(&pixels[..layout.byte_len()])?;
    Ok(())
}
