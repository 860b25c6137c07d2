//! Scalar helpers shared by the curves and the plotter.
//!
//! Everything here is a total function over `f64`. Degenerate parameters (`a == b` for the
//! inverse interpolations, `base == 0` for the rounding helpers, `x == -limit` for
//! [`limited`]) are caller errors and surface as `NaN`/`±inf` rather than panics.

/// Bound `x` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this does not assert `min <= max`; with inverted bounds the result is
/// `min` when `x < min`, otherwise `max` when `x > max`, otherwise `x`.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// `clamp(x, 0, 1)`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

/// Interpolate from `a` to `b` by `x`, with `x` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f64, b: f64, x: f64) -> f64 {
    a + (b - a) * clamp01(x)
}

/// Interpolate from `a` to `b` by `x`, extrapolating outside `[0, 1]`.
#[inline]
pub fn lerp_unclamped(a: f64, b: f64, x: f64) -> f64 {
    a + (b - a) * x
}

/// Position of `x` between `a` and `b`, clamped to `[0, 1]`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, x: f64) -> f64 {
    clamp01((x - a) / (b - a))
}

/// `(b - x) / (b - a)`, unclamped.
///
/// Note the numerator is measured from `b`: this is the complement of the clamped
/// [`inverse_lerp`] ratio (`1` at `a`, `0` at `b`).
#[inline]
pub fn inverse_lerp_unclamped(a: f64, b: f64, x: f64) -> f64 {
    (b - x) / (b - a)
}

/// Round `x` to the nearest multiple of `base`, halves rounding up (toward `+inf`).
pub fn round(x: f64, base: f64) -> f64 {
    let v = x / base;
    let f = v.floor();
    let r = if v - f >= 0.5 { f + 1.0 } else { f };
    r * base
}

/// Smallest multiple of `base` that is `>= x` (for positive `base`).
#[inline]
pub fn ceil(x: f64, base: f64) -> f64 {
    (x / base).ceil() * base
}

/// Largest multiple of `base` that is `<= x` (for positive `base`).
#[inline]
pub fn floor(x: f64, base: f64) -> f64 {
    (x / base).floor() * base
}

/// Quantize a unit value to a byte: `clamp(floor(256 * x), 0, 255)`.
///
/// `NaN` maps to `0`.
pub fn toff(x: f64) -> u8 {
    clamp((256.0 * x).floor(), 0.0, 255.0) as u8
}

/// Rational soft limit `x * limit / (x + limit)`.
///
/// `0` at `x = 0`, approaches `limit` as `x` grows.
#[inline]
pub fn limited(x: f64, limit: f64) -> f64 {
    limit * (x / (x + limit))
}

/// [`limited`] mirrored through the origin for negative `x`.
pub fn signed_limited(x: f64, limit: f64) -> f64 {
    if x < 0.0 {
        -limited(-x, limit)
    } else {
        limited(x, limit)
    }
}

/// Modulo whose result carries the sign of `base`: `[0, base)` for positive `base`,
/// `(base, 0]` for negative `base`.
///
/// ```
/// assert_eq!(easekit::positive_modulo(-2.0, 10.0), 8.0);
/// ```
pub fn positive_modulo(x: f64, base: f64) -> f64 {
    let r = x % base;
    if r != 0.0 && (r < 0.0) != (base < 0.0) {
        r + base
    } else {
        r
    }
}

/// Rubber-band clamp for drag feedback.
///
/// Inside `[min, max]` returns `x`. Past a bound the overshoot `delta` is compressed with
/// `limit * (delta / (limit + delta))`, where `limit` is the signed distance from the bound to
/// `min_limit`/`max_limit`, so the result approaches but never crosses the limit.
pub fn limited_clamp(x: f64, min: f64, min_limit: f64, max: f64, max_limit: f64) -> f64 {
    if x < min {
        let limit = min_limit - min;
        let delta = x - min;
        min + limit * (delta / (limit + delta))
    } else if x > max {
        let limit = max_limit - max;
        let delta = x - max;
        max + limit * (delta / (limit + delta))
    } else {
        x
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
