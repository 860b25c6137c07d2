//! easekit: normalized easing curves and scalar interpolation helpers.
//!
//! - Scalar helpers: [`clamp`], [`lerp`], [`inverse_lerp`], rounding to a base,
//!   [`positive_modulo`], soft limits and the rubber-band [`limited_clamp`].
//! - Curves mapping `[0, 1]` onto `[0, 1]`: power ease-in/out/in-out of degree 1 to 6, the
//!   asymmetric [`ease_in_out`], and the three-phase [`ease_in_linear_ease_out`].
//! - Dynamic selection: the name-keyed [`registry()`] and the serializable [`Ease`].
//! - [`plot`]: an SVG/PNG plotter built on top of the above.
#![forbid(unsafe_code)]

mod animation;
mod foundation;

pub mod plot;

pub use crate::animation::ease::{
    DEFAULT_INFLECTION, DEFAULT_LINEAR_SPAN, DEFAULT_POWER, Degree, Ease, ease_in,
    ease_in_linear_ease_out, ease_in_out, ease_in_out_n, ease_in_out1, ease_in_out2,
    ease_in_out3, ease_in_out4, ease_in_out5, ease_in_out6, ease_in1, ease_in2, ease_in3,
    ease_in4, ease_in5, ease_in6, ease_out, ease_out1, ease_out2, ease_out3, ease_out4,
    ease_out5, ease_out6, linear,
};
pub use crate::animation::registry::{Curve, CurveParams, CurveRegistry, lookup, registry};
pub use crate::foundation::error::{EaseKitError, EaseKitResult};
pub use crate::foundation::math::{
    ceil, clamp, clamp01, floor, inverse_lerp, inverse_lerp_unclamped, lerp, lerp_unclamped,
    limited, limited_clamp, positive_modulo, round, signed_limited, toff,
};
