//! Window icon decoding

use anyhow::{Context, Result, bail};
use eframe::egui;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decode a PNG into RGBA icon data
pub fn load_icon(path: &Path) -> Result<egui::IconData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open icon '{}'", path.display()))?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    // Palette and low bit-depth images come out as 8-bit channels
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()
        .with_context(|| format!("Failed to read PNG header of '{}'", path.display()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)
        .with_context(|| format!("Failed to decode '{}'", path.display()))?;
    let pixels = &buf[..info.buffer_size()];

    Ok(egui::IconData {
        rgba: to_rgba(pixels, info.color_type)?,
        width: info.width,
        height: info.height,
    })
}

fn to_rgba(pixels: &[u8], color_type: png::ColorType) -> Result<Vec<u8>> {
    let rgba = match color_type {
        png::ColorType::Rgba => pixels.to_vec(),
        png::ColorType::Rgb => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
            .collect(),
        png::ColorType::GrayscaleAlpha => pixels
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => pixels
            .iter()
            .flat_map(|&g| [g, g, g, u8::MAX])
            .collect(),
        other => bail!("Unsupported PNG color type after expansion: {other:?}"),
    };
    Ok(rgba)
}
