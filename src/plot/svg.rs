use crate::foundation::error::EaseKitResult;
use crate::plot::grid::grid_lines;
use crate::plot::sample::sample_path;
use crate::plot::spec::PlotSpec;
use crate::plot::view::View;

// Attribute values are written verbatim; keep user-supplied paints out of markup.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render `spec` as a standalone SVG document for a `width x height` pixel surface.
#[tracing::instrument(skip(spec))]
pub fn render_svg(spec: &PlotSpec, width: u32, height: u32) -> EaseKitResult<String> {
    spec.validate()?;
    let view = View::centered(spec.focus, width, height, spec.zoom)?;
    let pixel = 1.0 / spec.zoom;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{}\">\n",
        view.view_box()
    ));
    let r = view.rect();
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        r.x0,
        r.y0,
        r.width(),
        r.height(),
        escape_attr(&spec.background)
    ));
    out.push_str(&format!(
        "<g fill=\"none\" stroke=\"black\" stroke-width=\"{pixel}\">\n"
    ));

    for grid in &spec.grids {
        for gl in grid_lines(&view, grid)? {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" opacity=\"{}\"/>\n",
                gl.line.p0.x, gl.line.p0.y, gl.line.p1.x, gl.line.p1.y, gl.opacity
            ));
        }
    }

    let samples = spec.samples.unwrap_or(width as usize);
    for curve in &spec.curves {
        let func = curve.func;
        let path = sample_path(&view, |x| func.eval(x), samples);
        if path.elements().is_empty() {
            tracing::warn!(?func, "curve produced no finite samples");
            continue;
        }
        out.push_str(&format!("<path d=\"{}\"", path.to_svg()));
        if let Some(color) = &curve.color {
            out.push_str(&format!(" stroke=\"{}\"", escape_attr(color)));
        }
        if let Some(thickness) = curve.thickness {
            out.push_str(&format!(" stroke-width=\"{}\"", 0.01 * thickness));
        }
        out.push_str("/>\n");
    }

    out.push_str("</g>\n</svg>\n");
    tracing::debug!(bytes = out.len(), curves = spec.curves.len(), "svg rendered");
    Ok(out)
}
