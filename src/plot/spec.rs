use std::path::Path;

use anyhow::Context as _;
use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::animation::ease::{Degree, Ease};
use crate::foundation::error::{EaseKitError, EaseKitResult};
use crate::plot::grid::{GridSkip, GridSpec};
use crate::plot::sample::PlotFn;

// More samples than this cannot add detail at any supported raster size.
const MAX_SAMPLES: usize = 1_000_000;

/// One plotted function with its stroke style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub func: PlotFn,
    /// Any SVG paint; inherits the group stroke when absent.
    #[serde(default)]
    pub color: Option<String>,
    /// Stroke width in hundredths of a world unit; inherits a one-pixel stroke when absent.
    #[serde(default)]
    pub thickness: Option<f64>,
}

/// Scene description for the plotter.
///
/// Missing JSON fields fall back to [`PlotSpec::default`], the reference scene: three grids
/// (unit, fives, hundreds), the identity line, and a red `inOut3` ping-pong signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSpec {
    /// World point at the centre of the surface.
    pub focus: Point,
    /// Pixels per world unit.
    pub zoom: f64,
    pub background: String,
    /// Samples per curve; one per horizontal pixel when absent.
    pub samples: Option<usize>,
    pub grids: Vec<GridSpec>,
    pub curves: Vec<CurveStyle>,
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self {
            focus: Point::ORIGIN,
            zoom: 40.0,
            background: "white".to_string(),
            samples: None,
            grids: vec![
                GridSpec {
                    step: 1.0,
                    opacity: 0.2,
                    skip: GridSkip::MultiplesOf(5.0),
                },
                GridSpec {
                    step: 5.0,
                    opacity: 0.5,
                    skip: GridSkip::Value(0.0),
                },
                GridSpec {
                    step: 100.0,
                    opacity: 1.0,
                    skip: GridSkip::None,
                },
            ],
            curves: vec![
                CurveStyle {
                    func: PlotFn::Identity,
                    color: None,
                    thickness: None,
                },
                CurveStyle {
                    func: PlotFn::PingPong {
                        ease: Ease::InOut(Degree::ALL[2]),
                        rise: 2.0,
                        hold: 3.0,
                    },
                    color: Some("red".to_string()),
                    thickness: Some(4.0),
                },
            ],
        }
    }
}

impl PlotSpec {
    /// Parse a JSON scene description.
    pub fn from_json_str(s: &str) -> EaseKitResult<Self> {
        let spec: Self =
            serde_json::from_str(s).map_err(|e| EaseKitError::serde(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Read and parse a JSON scene description from disk.
    pub fn load(path: &Path) -> EaseKitResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read plot spec '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> EaseKitResult<()> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(EaseKitError::validation(format!(
                "plot zoom must be finite and > 0, got {}",
                self.zoom
            )));
        }
        if let Some(n) = self.samples
            && !(1..=MAX_SAMPLES).contains(&n)
        {
            return Err(EaseKitError::validation(format!(
                "plot samples must be in [1, {MAX_SAMPLES}], got {n}"
            )));
        }
        for grid in &self.grids {
            grid.validate()?;
        }
        for curve in &self.curves {
            curve.func.validate()?;
            if let Some(t) = curve.thickness
                && (!t.is_finite() || t <= 0.0)
            {
                return Err(EaseKitError::validation(format!(
                    "curve thickness must be finite and > 0, got {t}"
                )));
            }
        }
        Ok(())
    }
}
