use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{EaseKitError, EaseKitResult};
use crate::plot::spec::PlotSpec;
use crate::plot::svg::render_svg;

const MAX_DIM: u32 = 16_384;

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Rasterize an SVG document into straight (non-premultiplied) RGBA8 of `width x height`.
#[tracing::instrument(skip(svg))]
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> EaseKitResult<Vec<u8>> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(EaseKitError::validation(format!(
            "raster size {width}x{height} out of range (1..={MAX_DIM})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse plot svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| EaseKitError::validation("failed to allocate plot pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut data);
    Ok(data)
}

/// Render `spec` straight to RGBA8.
pub fn render_rgba(spec: &PlotSpec, width: u32, height: u32) -> EaseKitResult<Vec<u8>> {
    let svg = render_svg(spec, width, height)?;
    rasterize_svg(&svg, width, height)
}

/// Encode RGBA8 pixels as a PNG file.
pub fn write_png(path: &Path, rgba: &[u8], width: u32, height: u32) -> EaseKitResult<()> {
    image::save_buffer_with_format(
        path,
        rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
