use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{EaseKitError, EaseKitResult};
use crate::foundation::math;
use crate::plot::view::View;

// A grid denser than this is a configuration mistake (tiny step or huge zoom-out).
const MAX_LINES_PER_AXIS: f64 = 10_000.0;

/// Which grid values to leave out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridSkip {
    /// Draw every line.
    #[default]
    None,
    /// Skip values that are exact multiples of the given number.
    MultiplesOf(f64),
    /// Skip one exact value (typically the axis at `0`).
    Value(f64),
}

impl GridSkip {
    fn skips(self, v: f64) -> bool {
        match self {
            Self::None => false,
            Self::MultiplesOf(m) => v % m == 0.0,
            Self::Value(x) => v == x,
        }
    }
}

/// One family of evenly spaced horizontal and vertical lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Spacing in world units.
    pub step: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    pub skip: GridSkip,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            step: 1.0,
            opacity: 0.33,
            skip: GridSkip::None,
        }
    }
}

impl GridSpec {
    /// Check step, opacity and skip multiple.
    pub fn validate(&self) -> EaseKitResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(EaseKitError::validation(format!(
                "grid step must be finite and > 0, got {}",
                self.step
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(EaseKitError::validation(format!(
                "grid opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        if let GridSkip::MultiplesOf(m) = self.skip
            && (!m.is_finite() || m <= 0.0)
        {
            return Err(EaseKitError::validation(format!(
                "grid skip multiple must be finite and > 0, got {m}"
            )));
        }
        Ok(())
    }
}

/// A grid line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub line: Line,
    pub opacity: f64,
}

/// Multiples of `step` inside `[lo, hi]`, computed from an integer index to avoid drift.
fn multiples(lo: f64, hi: f64, step: f64) -> EaseKitResult<Vec<f64>> {
    let first = math::ceil(lo, step);
    let last = math::floor(hi, step);
    let n = ((last - first) / step).round();
    if n < 0.0 {
        return Ok(Vec::new());
    }
    if n >= MAX_LINES_PER_AXIS {
        return Err(EaseKitError::validation(format!(
            "grid step {step} yields too many lines ({})",
            n + 1.0
        )));
    }
    Ok((0..=n as u32).map(|k| first + f64::from(k) * step).collect())
}

/// Vertical then horizontal lines spanning `view` for every non-skipped multiple of the step.
pub fn grid_lines(view: &View, spec: &GridSpec) -> EaseKitResult<Vec<GridLine>> {
    spec.validate()?;

    let mut out = Vec::new();
    for x in multiples(view.left(), view.right(), spec.step)? {
        if spec.skip.skips(x) {
            continue;
        }
        out.push(GridLine {
            line: Line::new(Point::new(x, view.top()), Point::new(x, view.bottom())),
            opacity: spec.opacity,
        });
    }
    for y in multiples(view.top(), view.bottom(), spec.step)? {
        if spec.skip.skips(y) {
            continue;
        }
        out.push(GridLine {
            line: Line::new(Point::new(view.left(), y), Point::new(view.right(), y)),
            opacity: spec.opacity,
        });
    }

    tracing::debug!(step = spec.step, lines = out.len(), "grid");
    Ok(out)
}
