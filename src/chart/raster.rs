//! PNG rasterization of the rendered SVG chart.

use anyhow::{Context, Result, anyhow};
use png::{BitDepth, ColorType, Encoder};
use tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

/// Rasterize an SVG document to PNG bytes at its native canvas size.
pub fn svg_to_png(svg: &str, width: u32, height: u32) -> Result<Vec<u8>> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree: Tree =
        Tree::from_data(svg.as_bytes(), &options).context("Failed to parse rendered SVG")?;

    let mut pixmap =
        Pixmap::new(width, height).ok_or_else(|| anyhow!("Failed to allocate {width}x{height} pixmap"))?;
    let mut pixmap_ref = pixmap.as_mut();
    resvg::render(&tree, Transform::default(), &mut pixmap_ref);

    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder
        .write_header()
        .context("Failed to write PNG header")?
        .write_image_data(pixmap.data())
        .context("Failed to encode PNG data")?;

    Ok(out)
}
