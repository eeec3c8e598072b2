use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write tightly-packed RGB8 pixel data as a PNG, overwriting `path`
pub fn write_rgb_png(width: u32, height: u32, data: &[u8], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create image {}", path.display()))?;
    let ref mut w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;

    Ok(())
}
