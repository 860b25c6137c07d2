use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::animation::ease::{self, DEFAULT_INFLECTION, DEFAULT_LINEAR_SPAN, DEFAULT_POWER, Ease};
use crate::foundation::error::{EaseKitError, EaseKitResult};

/// Shape parameters handed to parametric curves. Fixed curves ignore them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Exponent (ease-in exponent for `inLinearOut`).
    pub p: f64,
    /// Ease-out exponent for `inLinearOut`.
    pub q: f64,
    /// Inflection point for `inOut`.
    pub i: f64,
    /// Linear proportion for `inLinearOut`.
    pub s: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            p: DEFAULT_POWER,
            q: DEFAULT_POWER,
            i: DEFAULT_INFLECTION,
            s: DEFAULT_LINEAR_SPAN,
        }
    }
}

/// A curve implementation as stored in the registry.
#[derive(Clone, Copy, Debug)]
pub enum Curve {
    /// Curve without shape parameters.
    Fixed(fn(f64) -> f64),
    /// `(x, p, i)`.
    InOut(fn(f64, f64, f64) -> f64),
    /// `(x, p, q, s)`.
    InLinearOut(fn(f64, f64, f64, f64) -> f64),
}

impl Curve {
    /// Evaluate at `x`, reading whichever parameters this curve takes from `params`.
    pub fn eval(self, x: f64, params: CurveParams) -> f64 {
        match self {
            Self::Fixed(f) => f(x),
            Self::InOut(f) => f(x, params.p, params.i),
            Self::InLinearOut(f) => f(x, params.p, params.q, params.s),
        }
    }

    /// Evaluate with [`CurveParams::default`].
    pub fn eval_default(self, x: f64) -> f64 {
        self.eval(x, CurveParams::default())
    }

    /// Whether the curve reads anything from [`CurveParams`].
    pub fn is_parametric(self) -> bool {
        !matches!(self, Self::Fixed(_))
    }

    /// Bind `params` into an [`Ease`] selection equivalent to this registry entry.
    pub fn to_ease(self, name: &str, params: CurveParams) -> EaseKitResult<Ease> {
        match self {
            Self::Fixed(_) => name.parse(),
            Self::InOut(_) => Ok(Ease::Power {
                p: params.p,
                i: params.i,
            }),
            Self::InLinearOut(_) => Ok(Ease::InLinearOut {
                p: params.p,
                q: params.q,
                s: params.s,
            }),
        }
    }
}

/// Name-to-curve table. Immutable once built.
#[derive(Debug)]
pub struct CurveRegistry {
    curves: BTreeMap<&'static str, Curve>,
}

impl CurveRegistry {
    fn build() -> Self {
        let entries: [(&'static str, Curve); 21] = [
            ("linear", Curve::Fixed(ease::linear)),
            ("in1", Curve::Fixed(ease::ease_in1)),
            ("in2", Curve::Fixed(ease::ease_in2)),
            ("in3", Curve::Fixed(ease::ease_in3)),
            ("in4", Curve::Fixed(ease::ease_in4)),
            ("in5", Curve::Fixed(ease::ease_in5)),
            ("in6", Curve::Fixed(ease::ease_in6)),
            ("out1", Curve::Fixed(ease::ease_out1)),
            ("out2", Curve::Fixed(ease::ease_out2)),
            ("out3", Curve::Fixed(ease::ease_out3)),
            ("out4", Curve::Fixed(ease::ease_out4)),
            ("out5", Curve::Fixed(ease::ease_out5)),
            ("out6", Curve::Fixed(ease::ease_out6)),
            ("inOut1", Curve::Fixed(ease::ease_in_out1)),
            ("inOut2", Curve::Fixed(ease::ease_in_out2)),
            ("inOut3", Curve::Fixed(ease::ease_in_out3)),
            ("inOut4", Curve::Fixed(ease::ease_in_out4)),
            ("inOut5", Curve::Fixed(ease::ease_in_out5)),
            ("inOut6", Curve::Fixed(ease::ease_in_out6)),
            ("inOut", Curve::InOut(ease::ease_in_out)),
            ("inLinearOut", Curve::InLinearOut(ease::ease_in_linear_ease_out)),
        ];
        Self {
            curves: entries.into_iter().collect(),
        }
    }

    /// Curve published under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Curve> {
        self.curves.get(name).copied()
    }

    /// Curve published under `name`, or [`EaseKitError::UnknownCurve`].
    pub fn lookup(&self, name: &str) -> EaseKitResult<Curve> {
        self.get(name).ok_or_else(|| EaseKitError::unknown_curve(name))
    }

    /// Whether `name` is published.
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Published names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.curves.keys().copied()
    }

    /// Name/curve pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Curve)> + '_ {
        self.curves.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of published curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether no curve is published.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

static REGISTRY: LazyLock<CurveRegistry> = LazyLock::new(CurveRegistry::build);

/// The process-wide curve registry.
pub fn registry() -> &'static CurveRegistry {
    &REGISTRY
}

/// Shorthand for `registry().lookup(name)`.
pub fn lookup(name: &str) -> EaseKitResult<Curve> {
    registry().lookup(name)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
