use crate::{EnError, EnResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> EnResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EnError::NonFinite { what, value: v })
    }
}

/// Ratio with the degenerate-input convention used by every EROEI
/// metric: a zero or negative denominator yields positive infinity
/// rather than an error.
pub fn ratio_or_infinite(num: Real, den: Real) -> Real {
    if den <= 0.0 {
        Real::INFINITY
    } else {
        num / den
    }
}
