//! Normalized easing curves.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]`, fixes both endpoints, is non-decreasing, and
//! saturates outside the unit interval (`0` below, `1` above).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{EaseKitError, EaseKitResult};
use crate::foundation::math::clamp01;

/// Default exponent of [`ease_in_out`].
pub const DEFAULT_POWER: f64 = 3.0;
/// Default inflection point of [`ease_in_out`].
pub const DEFAULT_INFLECTION: f64 = 0.5;
/// Default linear proportion of [`ease_in_linear_ease_out`] (pure ease-in/ease-out).
pub const DEFAULT_LINEAR_SPAN: f64 = 0.0;

// Exponents closer than this to 1 take the limit value `1/e` for the knee ordinate.
const KNEE_EPSILON: f64 = 1e-6;

/// Identity on the clamped input.
#[inline]
pub fn linear(x: f64) -> f64 {
    clamp01(x)
}

/// Linear ease-in (identity).
pub fn ease_in1(x: f64) -> f64 {
    linear(x)
}

/// Quadratic ease-in.
pub fn ease_in2(x: f64) -> f64 {
    let x = clamp01(x);
    x * x
}

/// Cubic ease-in.
pub fn ease_in3(x: f64) -> f64 {
    let x = clamp01(x);
    x * x * x
}

/// Quartic ease-in.
pub fn ease_in4(x: f64) -> f64 {
    let x = clamp01(x);
    x * x * x * x
}

/// Quintic ease-in.
pub fn ease_in5(x: f64) -> f64 {
    let x = clamp01(x);
    x * x * x * x * x
}

/// Sextic ease-in.
pub fn ease_in6(x: f64) -> f64 {
    let x = clamp01(x);
    x * x * x * x * x * x
}

/// Linear ease-out (identity).
pub fn ease_out1(x: f64) -> f64 {
    linear(x)
}

/// Quadratic ease-out.
pub fn ease_out2(x: f64) -> f64 {
    let y = clamp01(1.0 - x);
    1.0 - y * y
}

/// Cubic ease-out.
pub fn ease_out3(x: f64) -> f64 {
    let y = clamp01(1.0 - x);
    1.0 - y * y * y
}

/// Quartic ease-out.
pub fn ease_out4(x: f64) -> f64 {
    let y = clamp01(1.0 - x);
    1.0 - y * y * y * y
}

/// Quintic ease-out.
pub fn ease_out5(x: f64) -> f64 {
    let y = clamp01(1.0 - x);
    1.0 - y * y * y * y * y
}

/// Sextic ease-out.
pub fn ease_out6(x: f64) -> f64 {
    let y = clamp01(1.0 - x);
    1.0 - y * y * y * y * y * y
}

/// Piecewise in/out around the midpoint: `scale * x^n` below `0.5`, mirrored above.
/// `scale` is `2^(n-1)` so both halves meet at `(0.5, 0.5)`.
#[inline]
fn in_out_halves(x: f64, scale: f64, pow: fn(f64) -> f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else if x < 0.5 {
        scale * pow(x)
    } else {
        1.0 - scale * pow(1.0 - x)
    }
}

/// Linear ease-in-out (identity).
pub fn ease_in_out1(x: f64) -> f64 {
    linear(x)
}

/// Quadratic ease-in-out.
pub fn ease_in_out2(x: f64) -> f64 {
    in_out_halves(x, 2.0, |y| y * y)
}

/// Cubic ease-in-out.
pub fn ease_in_out3(x: f64) -> f64 {
    in_out_halves(x, 4.0, |y| y * y * y)
}

/// Quartic ease-in-out.
pub fn ease_in_out4(x: f64) -> f64 {
    in_out_halves(x, 8.0, |y| y * y * y * y)
}

/// Quintic ease-in-out.
pub fn ease_in_out5(x: f64) -> f64 {
    in_out_halves(x, 16.0, |y| y * y * y * y * y)
}

/// Sextic ease-in-out.
pub fn ease_in_out6(x: f64) -> f64 {
    in_out_halves(x, 32.0, |y| y * y * y * y * y * y)
}

/// Power ease-in-out with exponent `p` (`p > 1` for an S-curve) and inflection point
/// `i` in `(0, 1)`.
///
/// Below `i`: `x^p / i^(p-1)`. From `i` on: `1 - (1-x)^p / (1-i)^(p-1)`. With `i = 0.5`
/// and integer `p` this is [`ease_in_out_n`] of that degree.
///
/// See <https://www.desmos.com/calculator/chosfesws4>.
pub fn ease_in_out(x: f64, p: f64, i: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else if x < i {
        x.powf(p) / i.powf(p - 1.0)
    } else {
        1.0 - (1.0 - x).powf(p) / (1.0 - i).powf(p - 1.0)
    }
}

/// Knee ordinate `(1/k)^(1/(k-1))` of a power segment, where its slope reaches 1.
fn knee(k: f64) -> f64 {
    if (k - 1.0).abs() < KNEE_EPSILON {
        1.0 / std::f64::consts::E
    } else {
        (1.0 / k).powf(1.0 / (k - 1.0))
    }
}

/// Ease-in, linear, then ease-out, joined with matching value and slope.
///
/// `p` shapes the ease-in phase, `q` the ease-out phase, and `s` in `[0, 1]` is the share
/// of the domain spent in the linear phase. `s >= 1` is the identity.
///
/// See <https://www.desmos.com/calculator/3izcjwwok7>.
pub fn ease_in_linear_ease_out(x: f64, p: f64, q: f64, s: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if s >= 1.0 {
        return x;
    }

    let p1 = knee(p);
    let q1 = knee(q);
    let w = (p1 + q1) / (1.0 - s);
    let x1 = p1 / w;
    let x2 = 1.0 - q1 / w;
    let p2 = p1.powf(p);
    let q2 = q1.powf(q);
    let a = w - p1 + p2 - q1 + q2;

    if x < x1 {
        (x * w).powf(p) / a
    } else if x > x2 {
        1.0 - ((1.0 - x) * w).powf(q) / a
    } else {
        (x * w - p1 + p2) / a
    }
}

/// Degree of a fixed power curve, `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u8);

impl Degree {
    /// Lowest supported degree (linear).
    pub const MIN: u8 = 1;
    /// Highest supported degree.
    pub const MAX: u8 = 6;

    /// Every supported degree, ascending.
    pub const ALL: [Degree; 6] = [
        Degree(1),
        Degree(2),
        Degree(3),
        Degree(4),
        Degree(5),
        Degree(6),
    ];

    /// Create a validated degree.
    pub fn new(n: u8) -> EaseKitResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&n) {
            return Err(EaseKitError::validation(format!(
                "curve degree must be in {}..={}, got {n}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(n))
    }

    /// The degree as an integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Power ease-in `x^n` of the given degree.
pub fn ease_in(x: f64, degree: Degree) -> f64 {
    match degree.0 {
        1 => ease_in1(x),
        2 => ease_in2(x),
        3 => ease_in3(x),
        4 => ease_in4(x),
        5 => ease_in5(x),
        _ => ease_in6(x),
    }
}

/// Power ease-out `1 - (1-x)^n` of the given degree.
pub fn ease_out(x: f64, degree: Degree) -> f64 {
    match degree.0 {
        1 => ease_out1(x),
        2 => ease_out2(x),
        3 => ease_out3(x),
        4 => ease_out4(x),
        5 => ease_out5(x),
        _ => ease_out6(x),
    }
}

/// Symmetric power ease-in-out of the given degree.
pub fn ease_in_out_n(x: f64, degree: Degree) -> f64 {
    match degree.0 {
        1 => ease_in_out1(x),
        2 => ease_in_out2(x),
        3 => ease_in_out3(x),
        4 => ease_in_out4(x),
        5 => ease_in_out5(x),
        _ => ease_in_out6(x),
    }
}

/// A curve selection together with its shape parameters.
///
/// Serialized as the registry name for the fixed curves (`"in3"`), and as a single-key object
/// for the parametric ones (`{"inOut": {"p": 2.5, "i": 0.4}}`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// `x^n`.
    In(Degree),
    /// `1 - (1-x)^n`.
    Out(Degree),
    /// Symmetric in/out of degree `n`.
    InOut(Degree),
    /// [`ease_in_out`] with exponent `p` and inflection point `i`.
    Power {
        /// Exponent.
        p: f64,
        /// Inflection point.
        i: f64,
    },
    /// [`ease_in_linear_ease_out`].
    InLinearOut {
        /// Ease-in exponent.
        p: f64,
        /// Ease-out exponent.
        q: f64,
        /// Linear proportion.
        s: f64,
    },
}

impl Ease {
    /// [`Ease::Power`] with the default exponent and inflection point.
    pub const fn power_default() -> Self {
        Self::Power {
            p: DEFAULT_POWER,
            i: DEFAULT_INFLECTION,
        }
    }

    /// [`Ease::InLinearOut`] with default exponents and no linear phase.
    pub const fn in_linear_out_default() -> Self {
        Self::InLinearOut {
            p: DEFAULT_POWER,
            q: DEFAULT_POWER,
            s: DEFAULT_LINEAR_SPAN,
        }
    }

    /// Apply the curve to normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => linear(t),
            Self::In(d) => ease_in(t, d),
            Self::Out(d) => ease_out(t, d),
            Self::InOut(d) => ease_in_out_n(t, d),
            Self::Power { p, i } => ease_in_out(t, p, i),
            Self::InLinearOut { p, q, s } => ease_in_linear_ease_out(t, p, q, s),
        }
    }

    /// Registry name of the selected curve family.
    pub fn name(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::In(d) => format!("in{}", d.get()),
            Self::Out(d) => format!("out{}", d.get()),
            Self::InOut(d) => format!("inOut{}", d.get()),
            Self::Power { .. } => "inOut".to_string(),
            Self::InLinearOut { .. } => "inLinearOut".to_string(),
        }
    }

    /// Check shape parameters against their documented domains.
    ///
    /// [`Ease::apply`] never validates; call this where a selection enters from outside
    /// (configuration, CLI).
    pub fn validate(self) -> EaseKitResult<()> {
        fn exponent(name: &str, v: f64) -> EaseKitResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(EaseKitError::validation(format!(
                    "exponent {name} must be finite and > 0, got {v}"
                )));
            }
            Ok(())
        }

        match self {
            Self::Linear | Self::In(_) | Self::Out(_) | Self::InOut(_) => Ok(()),
            Self::Power { p, i } => {
                exponent("p", p)?;
                if !(i > 0.0 && i < 1.0) {
                    return Err(EaseKitError::validation(format!(
                        "inflection point i must be in (0, 1), got {i}"
                    )));
                }
                Ok(())
            }
            Self::InLinearOut { p, q, s } => {
                exponent("p", p)?;
                exponent("q", q)?;
                if !(0.0..=1.0).contains(&s) {
                    return Err(EaseKitError::validation(format!(
                        "linear proportion s must be in [0, 1], got {s}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Power { p, i } => write!(f, "inOut(p={p}, i={i})"),
            Self::InLinearOut { p, q, s } => write!(f, "inLinearOut(p={p}, q={q}, s={s})"),
            other => f.write_str(&other.name()),
        }
    }
}

impl FromStr for Ease {
    type Err = EaseKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn degree(name: &str, digit: &str) -> EaseKitResult<Degree> {
            match digit.as_bytes() {
                [d @ b'0'..=b'9'] => {
                    Degree::new(d - b'0').map_err(|_| EaseKitError::unknown_curve(name))
                }
                _ => Err(EaseKitError::unknown_curve(name)),
            }
        }

        match s {
            "linear" => Ok(Self::Linear),
            "inOut" => Ok(Self::power_default()),
            "inLinearOut" => Ok(Self::in_linear_out_default()),
            _ => {
                if let Some(d) = s.strip_prefix("inOut") {
                    Ok(Self::InOut(degree(s, d)?))
                } else if let Some(d) = s.strip_prefix("in") {
                    Ok(Self::In(degree(s, d)?))
                } else if let Some(d) = s.strip_prefix("out") {
                    Ok(Self::Out(degree(s, d)?))
                } else {
                    Err(EaseKitError::unknown_curve(s))
                }
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PowerParams {
    #[serde(default = "default_power")]
    p: f64,
    #[serde(default = "default_inflection")]
    i: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct InLinearOutParams {
    #[serde(default = "default_power")]
    p: f64,
    #[serde(default = "default_power")]
    q: f64,
    #[serde(default)]
    s: f64,
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_inflection() -> f64 {
    DEFAULT_INFLECTION
}

// Single-key objects; a second key or a misspelled one fails every variant.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PowerRepr {
    #[serde(rename = "inOut")]
    in_out: PowerParams,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct InLinearOutRepr {
    #[serde(rename = "inLinearOut")]
    in_linear_out: InLinearOutParams,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EaseRepr {
    Name(String),
    Power(PowerRepr),
    InLinearOut(InLinearOutRepr),
}

impl Serialize for Ease {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = match *self {
            Self::Power { p, i } => EaseRepr::Power(PowerRepr {
                in_out: PowerParams { p, i },
            }),
            Self::InLinearOut { p, q, s } => EaseRepr::InLinearOut(InLinearOutRepr {
                in_linear_out: InLinearOutParams { p, q, s },
            }),
            other => EaseRepr::Name(other.name()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match EaseRepr::deserialize(deserializer)? {
            EaseRepr::Name(name) => name.parse().map_err(serde::de::Error::custom),
            EaseRepr::Power(PowerRepr { in_out }) => Ok(Self::Power {
                p: in_out.p,
                i: in_out.i,
            }),
            EaseRepr::InLinearOut(InLinearOutRepr { in_linear_out }) => Ok(Self::InLinearOut {
                p: in_linear_out.p,
                q: in_linear_out.q,
                s: in_linear_out.s,
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
