use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::error::{EaseKitError, EaseKitResult};
use crate::foundation::math;
use crate::plot::view::View;

/// A world-space function `y = f(x)` to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotFn {
    /// `y = x`.
    Identity,
    /// A curve applied directly to `x`.
    Ease(Ease),
    /// Periodic rise/hold/fall signal shaped by `ease`.
    ///
    /// One period lasts `2 * (rise + hold)`: the progress ramps `0 -> 1` over `rise`, holds
    /// at `1`, ramps back over `rise`, then holds at `0`.
    PingPong { ease: Ease, rise: f64, hold: f64 },
}

impl PlotFn {
    /// Evaluate at world `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Self::Identity => x,
            Self::Ease(ease) => ease.apply(x),
            Self::PingPong { ease, rise, hold } => {
                let half = rise + hold;
                let t = math::positive_modulo(x, 2.0 * half);
                let progress = if t < half {
                    f64::min(1.0, t / rise)
                } else {
                    f64::max(0.0, 1.0 - (t - half) / rise)
                };
                ease.apply(progress)
            }
        }
    }

    pub fn validate(&self) -> EaseKitResult<()> {
        match *self {
            Self::Identity => Ok(()),
            Self::Ease(ease) => ease.validate(),
            Self::PingPong { ease, rise, hold } => {
                if !rise.is_finite() || rise <= 0.0 {
                    return Err(EaseKitError::validation(format!(
                        "ping-pong rise must be finite and > 0, got {rise}"
                    )));
                }
                if !hold.is_finite() || hold < 0.0 {
                    return Err(EaseKitError::validation(format!(
                        "ping-pong hold must be finite and >= 0, got {hold}"
                    )));
                }
                ease.validate()
            }
        }
    }
}

/// Polyline through `samples` evenly spaced points across the view, `y` negated so that
/// larger values plot higher on screen.
///
/// Non-finite samples break the polyline into separate subpaths.
pub fn sample_path(view: &View, f: impl Fn(f64) -> f64, samples: usize) -> BezPath {
    let mut path = BezPath::new();
    let mut pen_down = false;
    for k in 0..samples {
        let t = k as f64 / samples as f64;
        let x = view.left() + view.width() * t;
        let y = f(x);
        if !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = Point::new(x, -y);
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    path
}
