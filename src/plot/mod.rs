//! Curve plotter: world-space grids and sampled curves rendered to SVG, optionally
//! rasterized to PNG.
//!
//! Nothing in the curve library depends on this module.

pub(crate) mod grid;
pub(crate) mod raster;
pub(crate) mod sample;
pub(crate) mod spec;
pub(crate) mod svg;
pub(crate) mod view;

pub use grid::{GridLine, GridSkip, GridSpec, grid_lines};
pub use raster::{rasterize_svg, render_rgba, write_png};
pub use sample::{PlotFn, sample_path};
pub use spec::{CurveStyle, PlotSpec};
pub use svg::render_svg;
pub use view::View;

#[cfg(test)]
#[path = "../../tests/unit/plot/plot.rs"]
mod tests;
